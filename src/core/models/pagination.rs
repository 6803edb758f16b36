//! Paging and filtering of employee listings

/// Page size used when the caller gives none or a non-positive one
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page size served
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest page number accepted; higher requests are served this page
pub const MAX_PAGE_NUMBER: u64 = i32::MAX as u64;

/// Normalized employee listing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// 1-based page number
    pub page_number: u64,
    /// Records per page, within `1..=MAX_PAGE_SIZE`
    pub page_size: u64,
    /// Exact department match
    pub department: Option<String>,
    /// Substring matched against first name, last name and email
    pub search_term: Option<String>,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            department: None,
            search_term: None,
        }
    }
}

impl EmployeeFilter {
    /// Build a filter from raw caller input, clamping the paging values
    /// and dropping empty filter strings.
    pub fn new(
        page_number: Option<i64>,
        page_size: Option<i64>,
        department: Option<String>,
        search_term: Option<String>,
    ) -> Self {
        let page_number = match page_number {
            Some(n) if n >= 1 => (n as u64).min(MAX_PAGE_NUMBER),
            _ => 1,
        };
        let page_size = match page_size {
            Some(n) if n >= 1 => (n as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        Self {
            page_number,
            page_size,
            department: department.filter(|d| !d.is_empty()),
            search_term: search_term.filter(|s| !s.is_empty()),
        }
    }

    /// Number of records skipped before this page
    pub fn offset(&self) -> u64 {
        self.page_number
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }
}

/// One page of results plus the unpaged match count
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    /// `ceil(total_count / page_size)`
    pub fn total_pages(&self, page_size: u64) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(page_size)
    }
}
