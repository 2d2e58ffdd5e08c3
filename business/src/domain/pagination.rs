use std::num::NonZeroU32;

/// Defaults applied when a list request omits `page` or `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page used when the caller sends none. Defaults to 1.
    pub default_page: NonZeroU32,
    /// Page size used when the caller sends none. Defaults to 10.
    pub default_limit: NonZeroU32,
}

impl PaginationConfig {
    pub const DEFAULT_PAGE: NonZeroU32 = NonZeroU32::MIN;
    pub const DEFAULT_LIMIT: NonZeroU32 = match NonZeroU32::new(10) {
        Some(limit) => limit,
        None => NonZeroU32::MIN,
    };

    /// Fills missing request values with the configured defaults.
    pub fn resolve(&self, page: Option<NonZeroU32>, limit: Option<NonZeroU32>) -> PageRequest {
        PageRequest {
            page: page.unwrap_or(self.default_page),
            limit: limit.unwrap_or(self.default_limit),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: Self::DEFAULT_PAGE,
            default_limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// A fully resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: NonZeroU32,
    pub limit: NonZeroU32,
}

impl PageRequest {
    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.get() - 1) * u64::from(self.limit.get())
    }

    pub fn take(&self) -> u64 {
        u64::from(self.limit.get())
    }

    /// `ceil(total / limit)`.
    pub fn last_page(&self, total: u64) -> u64 {
        total.div_ceil(self.take())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u32,
    pub total: u64,
    pub last_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
