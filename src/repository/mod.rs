use crate::db::{DbConnection, DbPool};
use crate::domain::opportunity::{NewOpportunity, Opportunity};
use crate::domain::types::{Amount, OpportunityCategory, OpportunityId, OpportunityStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod opportunity;

/// Diesel-backed repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            RepositoryError::from(e)
        })
    }
}

/// Selects the candidate opportunities a listing is filtered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityListQuery {
    pub category: Option<OpportunityCategory>,
}

impl OpportunityListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: OpportunityCategory) -> Self {
        self.category = Some(category);
        self
    }
}

pub trait OpportunityReader {
    fn get_opportunity_by_id(&self, id: OpportunityId) -> RepositoryResult<Option<Opportunity>>;
    /// Returns every candidate, newest registration first.
    fn list_opportunities(&self, query: OpportunityListQuery)
    -> RepositoryResult<Vec<Opportunity>>;
}

pub trait OpportunityWriter {
    fn create_opportunities(&self, new_opportunities: &[NewOpportunity])
    -> RepositoryResult<usize>;
    fn update_opportunity_status(
        &self,
        id: OpportunityId,
        status: OpportunityStatus,
    ) -> RepositoryResult<Opportunity>;
    /// Adds `amount` to the paid total.
    fn record_payment(&self, id: OpportunityId, amount: Amount) -> RepositoryResult<Opportunity>;
    fn delete_opportunity(&self, id: OpportunityId) -> RepositoryResult<()>;
}
