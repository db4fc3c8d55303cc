//! DTOs shaped for the opportunity API responses.

use serde::Serialize;

use crate::domain::opportunity::Opportunity;
use crate::pagination::Paginated;

/// Opportunity as returned to API consumers, with derived fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpportunityDto {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub full_name: String,
    pub outstanding_amount: i64,
}

impl From<&Opportunity> for OpportunityDto {
    fn from(opportunity: &Opportunity) -> Self {
        Self {
            full_name: opportunity.full_name(),
            outstanding_amount: opportunity.outstanding_amount(),
            opportunity: opportunity.clone(),
        }
    }
}

/// One page of the opportunity listing.
pub type OpportunityPage = Paginated<OpportunityDto>;

/// Result of a bulk or single create.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreatedOpportunities {
    pub created: usize,
}
