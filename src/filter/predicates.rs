//! The six single-criterion filters.

use crate::domain::opportunity::Opportunity;
use crate::filter::{DateBound, RecordFilter, is_unconstrained};

/// Exact match on the procedure performed.
#[derive(Debug, Clone)]
pub struct CaseTypeFilter {
    case_type: Option<String>,
}

impl CaseTypeFilter {
    pub fn new(case_type: Option<String>) -> Self {
        Self { case_type }
    }
}

impl RecordFilter for CaseTypeFilter {
    fn matches(&self, record: &Opportunity) -> bool {
        self.case_type.as_deref() == Some(record.case_type_action.as_str())
    }

    fn is_bypassed(&self) -> bool {
        is_unconstrained(self.case_type.as_deref())
    }
}

/// Exact match on the province of filing.
#[derive(Debug, Clone)]
pub struct ProvinceFilter {
    province: Option<String>,
}

impl ProvinceFilter {
    pub fn new(province: Option<String>) -> Self {
        Self { province }
    }
}

impl RecordFilter for ProvinceFilter {
    fn matches(&self, record: &Opportunity) -> bool {
        self.province.as_deref() == Some(record.province.as_str())
    }

    fn is_bypassed(&self) -> bool {
        is_unconstrained(self.province.as_deref())
    }
}

/// Exact match on the status string (`pending`, `in_progress`, ...).
#[derive(Debug, Clone)]
pub struct StatusFilter {
    status: Option<String>,
}

impl StatusFilter {
    pub fn new(status: Option<String>) -> Self {
        Self { status }
    }
}

impl RecordFilter for StatusFilter {
    fn matches(&self, record: &Opportunity) -> bool {
        self.status.as_deref() == Some(record.status.as_str())
    }

    fn is_bypassed(&self) -> bool {
        is_unconstrained(self.status.as_deref())
    }
}

/// Inclusive range on the registration date.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    from: Option<DateBound>,
    to: Option<DateBound>,
}

impl DateRangeFilter {
    pub fn new(from: Option<DateBound>, to: Option<DateBound>) -> Self {
        Self { from, to }
    }
}

impl RecordFilter for DateRangeFilter {
    fn matches(&self, record: &Opportunity) -> bool {
        let date = record.registration_date;
        self.from.as_ref().is_none_or(|from| from.admits_from(date))
            && self.to.as_ref().is_none_or(|to| to.admits_until(date))
    }

    fn is_bypassed(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Case-insensitive substring search over the customer's full name.
#[derive(Debug, Clone)]
pub struct NameFilter {
    name: Option<String>,
    needle: String,
}

impl NameFilter {
    pub fn new(name: Option<String>) -> Self {
        let needle = name.as_deref().map(str::to_lowercase).unwrap_or_default();
        Self { name, needle }
    }
}

impl RecordFilter for NameFilter {
    fn matches(&self, record: &Opportunity) -> bool {
        record.full_name().to_lowercase().contains(&self.needle)
    }

    fn is_bypassed(&self) -> bool {
        is_unconstrained(self.name.as_deref())
    }
}

/// Case-sensitive substring search over the registration number.
#[derive(Debug, Clone)]
pub struct RegistrationNumberFilter {
    number: Option<String>,
}

impl RegistrationNumberFilter {
    pub fn new(number: Option<String>) -> Self {
        Self { number }
    }
}

impl RecordFilter for RegistrationNumberFilter {
    fn matches(&self, record: &Opportunity) -> bool {
        self.number
            .as_deref()
            .is_some_and(|number| record.registration_number.contains(number))
    }

    fn is_bypassed(&self) -> bool {
        is_unconstrained(self.number.as_deref())
    }
}
