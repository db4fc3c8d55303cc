//! DTO modules that bridge services with the API.

pub mod opportunities;
