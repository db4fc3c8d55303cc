//! Domain aggregates exposed by the service layer.

pub mod opportunity;
pub mod types;
