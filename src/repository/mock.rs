//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::opportunity::{NewOpportunity, Opportunity};
use crate::domain::types::{Amount, OpportunityId, OpportunityStatus};
use crate::repository::errors::RepositoryResult;
use crate::repository::{OpportunityListQuery, OpportunityReader, OpportunityWriter};

mock! {
    pub Repository {}

    impl OpportunityReader for Repository {
        fn get_opportunity_by_id(&self, id: OpportunityId) -> RepositoryResult<Option<Opportunity>>;
        fn list_opportunities(
            &self,
            query: OpportunityListQuery,
        ) -> RepositoryResult<Vec<Opportunity>>;
    }

    impl OpportunityWriter for Repository {
        fn create_opportunities(
            &self,
            new_opportunities: &[NewOpportunity],
        ) -> RepositoryResult<usize>;
        fn update_opportunity_status(
            &self,
            id: OpportunityId,
            status: OpportunityStatus,
        ) -> RepositoryResult<Opportunity>;
        fn record_payment(&self, id: OpportunityId, amount: Amount) -> RepositoryResult<Opportunity>;
        fn delete_opportunity(&self, id: OpportunityId) -> RepositoryResult<()>;
    }
}
