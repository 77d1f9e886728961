//! Table configuration

use crate::page::PageSize;

/// Where the page's search box sends its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Match against the well-known search fields and foreign records.
    #[default]
    Global,
    /// Filter one column by its displayed value.
    Column(String),
    /// The page has no search box.
    Disabled,
}

/// Construction-time options for a [`DataTable`](crate::DataTable).
///
/// # Example
///
/// ```
/// use staffdesk_table::{PageSize, TableOptions};
///
/// let options = TableOptions::default()
///     .with_page_size(PageSize::Twenty)
///     .with_search_column("name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Initial rows per page.
    ///
    /// Default: 10
    pub page_size: PageSize,

    /// Search box routing.
    ///
    /// Default: global filter
    pub search_mode: SearchMode,
}

impl TableOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    /// Routes the search box to a single column.
    pub fn with_search_column(self, key: impl Into<String>) -> Self {
        self.with_search_mode(SearchMode::Column(key.into()))
    }
}
