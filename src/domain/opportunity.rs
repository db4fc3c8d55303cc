use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Amount, CaseTypeAction, OpportunityCategory, OpportunityId, OpportunityStatus, PersonName,
    Province, RegistrationNumber,
};

/// A single immigration case tracked by the office.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub category: OpportunityCategory,
    pub case_type_action: CaseTypeAction,
    pub province: Province,
    pub status: OpportunityStatus,
    pub registration_date: NaiveDate,
    pub registration_number: RegistrationNumber,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub notes: Option<String>,
    /// Agreed fee in minor currency units.
    pub fee_amount: Amount,
    /// Sum of payments received so far.
    pub paid_amount: Amount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Opportunity {
    /// Customer name as shown in listings: first and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Fee still owed by the customer. Negative when the customer overpaid.
    pub fn outstanding_amount(&self) -> i64 {
        self.fee_amount.get() - self.paid_amount.get()
    }
}

/// Data required to register a new opportunity.
#[derive(Clone, Debug, Deserialize)]
pub struct NewOpportunity {
    pub category: OpportunityCategory,
    pub case_type_action: CaseTypeAction,
    pub province: Province,
    pub status: OpportunityStatus,
    pub registration_date: NaiveDate,
    pub registration_number: RegistrationNumber,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub notes: Option<String>,
    pub fee_amount: Amount,
}

impl NewOpportunity {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category: OpportunityCategory,
        case_type_action: CaseTypeAction,
        province: Province,
        registration_date: NaiveDate,
        registration_number: RegistrationNumber,
        first_name: PersonName,
        last_name: PersonName,
        notes: Option<String>,
        fee_amount: Amount,
    ) -> Self {
        Self {
            category,
            case_type_action,
            province,
            status: OpportunityStatus::Pending,
            registration_date,
            registration_number,
            first_name,
            last_name,
            notes: notes
                .map(|s| ammonia::clean(&s).trim().to_string())
                .filter(|s| !s.is_empty()),
            fee_amount,
        }
    }

    /// Overrides the initial status, e.g. when importing existing cases.
    #[must_use]
    pub fn with_status(mut self, status: OpportunityStatus) -> Self {
        self.status = status;
        self
    }
}
