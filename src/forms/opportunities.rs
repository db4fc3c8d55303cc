use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::opportunity::NewOpportunity;
use crate::domain::types::{
    Amount, CaseTypeAction, OpportunityCategory, OpportunityStatus, PersonName, Province,
    RegistrationNumber,
};
use crate::filter::{DateBound, FilterCriteria, is_unconstrained};
use crate::forms::FormError;
use crate::repository::OpportunityListQuery;

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).map(str::to_string)
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Query parameters of the opportunity listing.
pub struct OpportunityQueryForm {
    /// Case family the candidates are fetched for (`work_permit`, ...).
    pub category: Option<String>,
    pub case_type: Option<String>,
    pub province: Option<String>,
    pub status: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub date_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub date_to: Option<String>,
    pub name: Option<String>,
    pub registration_number: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl OpportunityQueryForm {
    /// Storage query selecting the candidate records.
    pub fn to_list_query(&self) -> Result<OpportunityListQuery, FormError> {
        let category = trimmed(&self.category);
        let query = OpportunityListQuery::new();
        if is_unconstrained(category.as_deref()) {
            return Ok(query);
        }
        let category = category.unwrap_or_default().parse::<OpportunityCategory>()?;
        Ok(query.category(category))
    }

    /// Filter selections for the chain.
    ///
    /// Date strings that do not parse are passed on as unparseable bounds
    /// rather than rejected.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            case_type: trimmed(&self.case_type),
            province: trimmed(&self.province),
            status: trimmed(&self.status),
            date_from: self.date_from.as_deref().and_then(DateBound::parse),
            date_to: self.date_to.as_deref().and_then(DateBound::parse),
            name: trimmed(&self.name),
            registration_number: trimmed(&self.registration_number),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Payload for registering a new opportunity.
pub struct AddOpportunityForm {
    pub category: String,
    #[validate(length(min = 1))]
    pub case_type_action: String,
    #[validate(length(min = 1))]
    pub province: String,
    pub registration_date: NaiveDate,
    #[validate(length(min = 1, max = 64))]
    pub registration_number: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub notes: Option<String>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub fee_amount: i64,
    pub status: Option<String>,
}

impl AddOpportunityForm {
    pub fn to_new_opportunity(self) -> Result<NewOpportunity, FormError> {
        self.validate()?;

        let new = NewOpportunity::new(
            self.category.trim().parse()?,
            CaseTypeAction::new(self.case_type_action)?,
            Province::new(self.province)?,
            self.registration_date,
            RegistrationNumber::new(self.registration_number)?,
            PersonName::new(self.first_name)?,
            PersonName::new(self.last_name)?,
            self.notes,
            Amount::new(self.fee_amount)?,
        );

        match self.status.as_deref().map(str::trim) {
            Some(status) if !status.is_empty() => {
                Ok(new.with_status(status.parse::<OpportunityStatus>()?))
            }
            _ => Ok(new),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Payload for moving an opportunity to another status.
pub struct ChangeStatusForm {
    #[validate(length(min = 1))]
    pub status: String,
}

impl ChangeStatusForm {
    pub fn to_status(&self) -> Result<OpportunityStatus, FormError> {
        self.validate()?;
        Ok(self.status.trim().parse()?)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Payload for registering a payment towards the fee.
pub struct RecordPaymentForm {
    #[validate(range(min = 1))]
    pub amount: i64,
}

impl RecordPaymentForm {
    pub fn to_amount(&self) -> Result<Amount, FormError> {
        self.validate()?;
        Ok(Amount::new(self.amount)?)
    }
}
