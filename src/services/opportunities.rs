use validator::Validate;

use crate::domain::types::OpportunityId;
use crate::dto::opportunities::{CreatedOpportunities, OpportunityDto, OpportunityPage};
use crate::filter::FilterChain;
use crate::forms::opportunities::{
    AddOpportunityForm, ChangeStatusForm, OpportunityQueryForm, RecordPaymentForm,
};
use crate::pagination::{Paginated, Paginator};
use crate::repository::{OpportunityReader, OpportunityWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the candidate opportunities, narrows them with the filter chain and
/// returns the requested page.
pub fn list_opportunities<R>(
    repo: &R,
    form: OpportunityQueryForm,
    default_page_size: usize,
) -> ServiceResult<OpportunityPage>
where
    R: OpportunityReader + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate listing query: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let list_query = form.to_list_query()?;
    let criteria = form.to_criteria();
    let paginator = Paginator::new(
        form.per_page.unwrap_or(default_page_size),
        form.page.unwrap_or(1),
    )?;

    let candidates = repo.list_opportunities(list_query).map_err(|err| {
        log::error!("Failed to list opportunities: {err}");
        ServiceError::from(err)
    })?;

    let filtered = FilterChain::new(&criteria).apply(&candidates);
    let pagination = paginator.pagination_state(filtered.len());
    let items = paginator
        .paginate(&filtered)
        .iter()
        .map(|opportunity| OpportunityDto::from(*opportunity))
        .collect();

    Ok(Paginated::new(items, pagination))
}

/// Loads a single opportunity.
pub fn get_opportunity<R>(repo: &R, id: i32) -> ServiceResult<OpportunityDto>
where
    R: OpportunityReader + ?Sized,
{
    let id = OpportunityId::new(id)?;
    let opportunity = repo
        .get_opportunity_by_id(id)
        .map_err(|err| {
            log::error!("Failed to load opportunity {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(OpportunityDto::from(&opportunity))
}

/// Validates the payload and persists a new opportunity.
pub fn create_opportunity<R>(
    repo: &R,
    form: AddOpportunityForm,
) -> ServiceResult<CreatedOpportunities>
where
    R: OpportunityWriter + ?Sized,
{
    let new_opportunity = form.to_new_opportunity().map_err(|err| {
        log::error!("Failed to validate opportunity form: {err}");
        ServiceError::from(err)
    })?;

    let created = repo
        .create_opportunities(&[new_opportunity])
        .map_err(|err| {
            log::error!("Failed to add an opportunity: {err}");
            ServiceError::from(err)
        })?;

    Ok(CreatedOpportunities { created })
}

/// Moves an opportunity to the requested status.
pub fn change_status<R>(
    repo: &R,
    id: i32,
    form: ChangeStatusForm,
) -> ServiceResult<OpportunityDto>
where
    R: OpportunityWriter + ?Sized,
{
    let id = OpportunityId::new(id)?;
    let status = form.to_status()?;

    let updated = repo.update_opportunity_status(id, status).map_err(|err| {
        log::error!("Failed to update status of opportunity {id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(OpportunityDto::from(&updated))
}

/// Adds a payment to the opportunity's paid total.
pub fn record_payment<R>(
    repo: &R,
    id: i32,
    form: RecordPaymentForm,
) -> ServiceResult<OpportunityDto>
where
    R: OpportunityWriter + ?Sized,
{
    let id = OpportunityId::new(id)?;
    let amount = form.to_amount()?;

    let updated = repo.record_payment(id, amount).map_err(|err| {
        log::error!("Failed to record payment for opportunity {id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(OpportunityDto::from(&updated))
}

pub fn delete_opportunity<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: OpportunityWriter + ?Sized,
{
    let id = OpportunityId::new(id)?;
    repo.delete_opportunity(id).map_err(|err| {
        log::error!("Failed to delete opportunity {id}: {err}");
        ServiceError::from(err)
    })
}
