//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! trimmed non-empty names, known status values) so that once a value reaches
//! the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided monetary amount is negative.
    #[error("amount cannot be negative")]
    NegativeAmount,
    /// Adding to a monetary amount exceeded its range.
    #[error("amount is too large")]
    AmountOverflow,
    /// Provided status is not one of the known opportunity states.
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    /// Provided category is not one of the known case categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(OpportunityId, "Unique identifier for an opportunity.");

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    PersonName,
    "First or last name of a customer enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    RegistrationNumber,
    "Filing number assigned to an opportunity enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    Province,
    "Administrative region an opportunity was filed in."
);

non_empty_string_newtype!(
    CaseTypeAction,
    "Procedure performed for an opportunity (e.g. first application, extension)."
);

/// Non-negative amount in minor currency units.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount, rejecting negative values.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            Err(TypeConstraintError::NegativeAmount)
        } else {
            Ok(Self(value))
        }
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Sums two amounts, failing instead of wrapping past `i64::MAX`.
    pub fn checked_add(self, other: Amount) -> Result<Self, TypeConstraintError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(TypeConstraintError::AmountOverflow)
    }
}

impl TryFrom<i64> for Amount {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

/// Processing state of an opportunity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    #[default]
    Pending,
    InProgress,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

impl OpportunityStatus {
    pub const ALL: [OpportunityStatus; 6] = [
        OpportunityStatus::Pending,
        OpportunityStatus::InProgress,
        OpportunityStatus::Approved,
        OpportunityStatus::Rejected,
        OpportunityStatus::Completed,
        OpportunityStatus::Cancelled,
    ];

    /// Stable string form used for storage and filtering.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OpportunityStatus::Pending => "pending",
            OpportunityStatus::InProgress => "in_progress",
            OpportunityStatus::Approved => "approved",
            OpportunityStatus::Rejected => "rejected",
            OpportunityStatus::Completed => "completed",
            OpportunityStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OpportunityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpportunityStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownStatus(s.to_string()))
    }
}

/// Broad family of immigration case an opportunity belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityCategory {
    WorkPermit,
    ResidencePermit,
    #[default]
    Other,
}

impl OpportunityCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OpportunityCategory::WorkPermit => "work_permit",
            OpportunityCategory::ResidencePermit => "residence_permit",
            OpportunityCategory::Other => "other",
        }
    }
}

impl Display for OpportunityCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityCategory {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work_permit" => Ok(OpportunityCategory::WorkPermit),
            "residence_permit" => Ok(OpportunityCategory::ResidencePermit),
            "other" => Ok(OpportunityCategory::Other),
            _ => Err(TypeConstraintError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_non_positive_values() {
        assert_eq!(OpportunityId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(OpportunityId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(OpportunityId::new(7).map(OpportunityId::get), Ok(7));
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        let name = PersonName::new("  Ali ").expect("valid name");
        assert_eq!(name.as_str(), "Ali");
        assert_eq!(PersonName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in OpportunityStatus::ALL {
            assert_eq!(status.as_str().parse::<OpportunityStatus>(), Ok(status));
        }
        assert!(matches!(
            "archived".parse::<OpportunityStatus>(),
            Err(TypeConstraintError::UnknownStatus(s)) if s == "archived"
        ));
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&OpportunityStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn category_parsing_rejects_unknown_values() {
        assert_eq!(
            "residence_permit".parse::<OpportunityCategory>(),
            Ok(OpportunityCategory::ResidencePermit)
        );
        assert!("visa".parse::<OpportunityCategory>().is_err());
    }

    #[test]
    fn amount_rejects_negative_values() {
        assert_eq!(Amount::new(-1), Err(TypeConstraintError::NegativeAmount));
        assert_eq!(Amount::new(0).map(Amount::get), Ok(0));
        assert_eq!(
            Amount(i64::MAX).checked_add(Amount(1)),
            Err(TypeConstraintError::AmountOverflow)
        );
        assert_eq!(Amount(40).checked_add(Amount(2)), Ok(Amount(42)));
    }
}
