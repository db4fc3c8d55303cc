//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Page size used when a listing request does not specify one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}
