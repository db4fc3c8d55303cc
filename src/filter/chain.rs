use crate::domain::opportunity::Opportunity;
use crate::filter::predicates::{
    CaseTypeFilter, DateRangeFilter, NameFilter, ProvinceFilter, RegistrationNumberFilter,
    StatusFilter,
};
use crate::filter::{FilterCriteria, RecordFilter};

/// All six filters built from one [`FilterCriteria`], applied left to right.
pub struct FilterChain {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl FilterChain {
    /// Builds the chain in its fixed order: case type, province, status,
    /// date range, name, registration number.
    pub fn new(criteria: &FilterCriteria) -> Self {
        let filters: Vec<Box<dyn RecordFilter>> = vec![
            Box::new(CaseTypeFilter::new(criteria.case_type.clone())),
            Box::new(ProvinceFilter::new(criteria.province.clone())),
            Box::new(StatusFilter::new(criteria.status.clone())),
            Box::new(DateRangeFilter::new(
                criteria.date_from.clone(),
                criteria.date_to.clone(),
            )),
            Box::new(NameFilter::new(criteria.name.clone())),
            Box::new(RegistrationNumberFilter::new(
                criteria.registration_number.clone(),
            )),
        ];
        Self { filters }
    }

    /// Runs every filter over `records`, feeding each one the previous output.
    pub fn apply<'a>(&self, records: &'a [Opportunity]) -> Vec<&'a Opportunity> {
        let kept = self
            .filters
            .iter()
            .fold(records.iter().collect::<Vec<_>>(), |acc, filter| {
                filter.apply(acc)
            });
        log::debug!("Filter chain kept {} of {} records", kept.len(), records.len());
        kept
    }
}
