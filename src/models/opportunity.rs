use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::opportunity::{
    NewOpportunity as DomainNewOpportunity, Opportunity as DomainOpportunity,
};
use crate::domain::types::{
    Amount, CaseTypeAction, OpportunityId, PersonName, Province, RegistrationNumber,
    TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::opportunities)]
/// Diesel model for [`crate::domain::opportunity::Opportunity`].
pub struct Opportunity {
    pub id: i32,
    pub category: String,
    pub case_type_action: String,
    pub province: String,
    pub status: String,
    pub registration_date: NaiveDate,
    pub registration_number: String,
    pub first_name: String,
    pub last_name: String,
    pub notes: Option<String>,
    pub fee_amount: i64,
    pub paid_amount: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::opportunities)]
/// Insertable form of [`Opportunity`].
pub struct NewOpportunity<'a> {
    pub category: &'a str,
    pub case_type_action: &'a str,
    pub province: &'a str,
    pub status: &'a str,
    pub registration_date: NaiveDate,
    pub registration_number: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub notes: Option<&'a str>,
    pub fee_amount: i64,
}

impl TryFrom<Opportunity> for DomainOpportunity {
    type Error = TypeConstraintError;

    fn try_from(opportunity: Opportunity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OpportunityId::try_from(opportunity.id)?,
            category: opportunity.category.parse()?,
            case_type_action: CaseTypeAction::new(opportunity.case_type_action)?,
            province: Province::new(opportunity.province)?,
            status: opportunity.status.parse()?,
            registration_date: opportunity.registration_date,
            registration_number: RegistrationNumber::new(opportunity.registration_number)?,
            first_name: PersonName::new(opportunity.first_name)?,
            last_name: PersonName::new(opportunity.last_name)?,
            notes: opportunity.notes,
            fee_amount: Amount::try_from(opportunity.fee_amount)?,
            paid_amount: Amount::try_from(opportunity.paid_amount)?,
            created_at: opportunity.created_at,
            updated_at: opportunity.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewOpportunity> for NewOpportunity<'a> {
    fn from(opportunity: &'a DomainNewOpportunity) -> Self {
        Self {
            category: opportunity.category.as_str(),
            case_type_action: opportunity.case_type_action.as_str(),
            province: opportunity.province.as_str(),
            status: opportunity.status.as_str(),
            registration_date: opportunity.registration_date,
            registration_number: opportunity.registration_number.as_str(),
            first_name: opportunity.first_name.as_str(),
            last_name: opportunity.last_name.as_str(),
            notes: opportunity.notes.as_deref(),
            fee_amount: opportunity.fee_amount.get(),
        }
    }
}
