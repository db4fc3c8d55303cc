//! Rule-based narrowing of opportunity listings.
//!
//! Each filter holds one criterion captured at construction and keeps the
//! records that satisfy it. A [`FilterChain`] runs all of them in a fixed order
//! over an already materialised record list.

use chrono::NaiveDate;

use crate::domain::opportunity::Opportunity;

pub mod chain;
pub mod predicates;

pub use chain::FilterChain;

/// Criterion value meaning "do not constrain on this field".
pub const ALL: &str = "all";

/// Date format accepted for range bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Single-predicate filter over opportunities.
pub trait RecordFilter {
    /// Returns `true` when the record satisfies the criterion.
    fn matches(&self, record: &Opportunity) -> bool;

    /// Returns `true` when the criterion is absent and the filter is a no-op.
    fn is_bypassed(&self) -> bool;

    /// Keeps the records matching the criterion, preserving their order.
    fn apply<'a>(&self, records: Vec<&'a Opportunity>) -> Vec<&'a Opportunity> {
        if self.is_bypassed() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Returns `true` for criteria that impose no constraint.
pub fn is_unconstrained(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some(ALL))
}

/// One end of a registration date range.
///
/// Raw input that is not a valid date is kept as [`DateBound::Unparseable`];
/// comparisons against it never succeed, so the range excludes every record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateBound {
    On(NaiveDate),
    Unparseable(String),
}

impl DateBound {
    /// Parses a raw bound. Blank input yields `None` (no bound).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => DateBound::On(date),
            Err(_) => DateBound::Unparseable(raw.to_string()),
        })
    }

    fn date(&self) -> Option<NaiveDate> {
        match self {
            DateBound::On(date) => Some(*date),
            DateBound::Unparseable(_) => None,
        }
    }

    /// `true` when `date` is on or after this bound.
    pub fn admits_from(&self, date: NaiveDate) -> bool {
        self.date().is_some_and(|start| date >= start)
    }

    /// `true` when `date` is on or before this bound.
    pub fn admits_until(&self, date: NaiveDate) -> bool {
        self.date().is_some_and(|end| date <= end)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::On(date)
    }
}

/// Filter selections for one listing request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub case_type: Option<String>,
    pub province: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<DateBound>,
    pub date_to: Option<DateBound>,
    pub name: Option<String>,
    pub registration_number: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_type(mut self, case_type: impl Into<String>) -> Self {
        self.case_type = Some(case_type.into());
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn date_from(mut self, bound: impl Into<DateBound>) -> Self {
        self.date_from = Some(bound.into());
        self
    }

    pub fn date_to(mut self, bound: impl Into<DateBound>) -> Self {
        self.date_to = Some(bound.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn registration_number(mut self, number: impl Into<String>) -> Self {
        self.registration_number = Some(number.into());
        self
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::date;
    use super::*;

    #[test]
    fn blank_and_sentinel_criteria_are_unconstrained() {
        assert!(is_unconstrained(None));
        assert!(is_unconstrained(Some("")));
        assert!(is_unconstrained(Some("all")));
        assert!(!is_unconstrained(Some("All")));
        assert!(!is_unconstrained(Some("Ankara")));
    }

    #[test]
    fn date_bound_parses_iso_dates() {
        assert_eq!(DateBound::parse(""), None);
        assert_eq!(DateBound::parse("  "), None);
        assert_eq!(
            DateBound::parse("2024-02-01"),
            Some(DateBound::On(date(2024, 2, 1)))
        );
        assert_eq!(
            DateBound::parse("01/02/2024"),
            Some(DateBound::Unparseable("01/02/2024".to_string()))
        );
    }

    #[test]
    fn unparseable_bound_admits_nothing() {
        let bound = DateBound::Unparseable("yesterday".to_string());
        assert!(!bound.admits_from(date(2024, 1, 1)));
        assert!(!bound.admits_until(date(2024, 1, 1)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bound = DateBound::On(date(2024, 2, 1));
        assert!(bound.admits_from(date(2024, 2, 1)));
        assert!(bound.admits_until(date(2024, 2, 1)));
        assert!(!bound.admits_from(date(2024, 1, 31)));
        assert!(!bound.admits_until(date(2024, 2, 2)));
    }
}
