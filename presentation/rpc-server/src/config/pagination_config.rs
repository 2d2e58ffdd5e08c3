use std::env;
use std::num::NonZeroU32;

use business::domain::pagination::PaginationConfig;

/// Load list defaults from environment variables
///
/// Environment variables:
/// - PAGINATION_DEFAULT_PAGE: page used when a request has none (default: 1)
/// - PAGINATION_DEFAULT_LIMIT: page size used when a request has none (default: 10)
pub fn from_env() -> PaginationConfig {
    from_lookup(|key| env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PaginationConfig {
    let read = |key: &str, fallback: NonZeroU32| {
        lookup(key)
            .and_then(|raw| raw.trim().parse::<NonZeroU32>().ok())
            .unwrap_or(fallback)
    };

    PaginationConfig {
        default_page: read("PAGINATION_DEFAULT_PAGE", PaginationConfig::DEFAULT_PAGE),
        default_limit: read("PAGINATION_DEFAULT_LIMIT", PaginationConfig::DEFAULT_LIMIT),
    }
}
