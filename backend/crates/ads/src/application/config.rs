//! Application Configuration
//!
//! Paging bounds for the advertisement listing.

/// Page size used when the client sends no `limit`
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest `limit` a client may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Ads application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdsConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl AdsConfig {
    pub fn new(default_page_size: u32, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            default_page_size: default_page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}
