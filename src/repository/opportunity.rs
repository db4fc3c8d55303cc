//! Repository implementation for opportunities.

use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::{
        opportunity::{NewOpportunity, Opportunity},
        types::{Amount, OpportunityId, OpportunityStatus},
    },
    models::opportunity::{
        NewOpportunity as DbNewOpportunity, Opportunity as DbOpportunity,
    },
    repository::{
        DieselRepository, OpportunityListQuery, OpportunityReader, OpportunityWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl OpportunityReader for DieselRepository {
    fn get_opportunity_by_id(&self, id: OpportunityId) -> RepositoryResult<Option<Opportunity>> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let opportunity = opportunities::table
            .find(id.get())
            .first::<DbOpportunity>(&mut conn)
            .optional()?;

        opportunity
            .map(Opportunity::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_opportunities(
        &self,
        query: OpportunityListQuery,
    ) -> RepositoryResult<Vec<Opportunity>> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;

        let mut items = opportunities::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(category) = &query.category {
            items = items.filter(opportunities::category.eq(category.as_str()));
        }

        items
            .order((
                opportunities::registration_date.desc(),
                opportunities::id.desc(),
            ))
            .load::<DbOpportunity>(&mut conn)?
            .into_iter()
            .map(|row| Opportunity::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl OpportunityWriter for DieselRepository {
    fn create_opportunities(
        &self,
        new_opportunities: &[NewOpportunity],
    ) -> RepositoryResult<usize> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewOpportunity> =
            new_opportunities.iter().map(Into::into).collect();
        let affected = diesel::insert_into(opportunities::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_opportunity_status(
        &self,
        id: OpportunityId,
        status: OpportunityStatus,
    ) -> RepositoryResult<Opportunity> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let updated = diesel::update(opportunities::table.find(id.get()))
            .set((
                opportunities::status.eq(status.as_str()),
                opportunities::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbOpportunity>(&mut conn)?;

        Opportunity::try_from(updated).map_err(RepositoryError::from)
    }

    fn record_payment(&self, id: OpportunityId, amount: Amount) -> RepositoryResult<Opportunity> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let updated = conn.transaction::<DbOpportunity, RepositoryError, _>(|conn| {
            let paid = opportunities::table
                .find(id.get())
                .select(opportunities::paid_amount)
                .first::<i64>(conn)?;
            let total = Amount::new(paid)?.checked_add(amount).map_err(|err| {
                RepositoryError::ConstraintViolation(format!("Paid amount for {id}: {err}"))
            })?;

            let updated = diesel::update(opportunities::table.find(id.get()))
                .set((
                    opportunities::paid_amount.eq(total.get()),
                    opportunities::updated_at.eq(Utc::now().naive_utc()),
                ))
                .get_result::<DbOpportunity>(conn)?;
            Ok(updated)
        })?;

        Opportunity::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_opportunity(&self, id: OpportunityId) -> RepositoryResult<()> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(opportunities::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
