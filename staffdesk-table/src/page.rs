//! Page size and pagination state.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;

/// Rows per page. The dashboard only offers these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    /// Every page size, smallest first.
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
    ];

    /// Returns the number of rows per page.
    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TableError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(TableError::InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Page index plus page size.
///
/// The stored index may run past the end when rows disappear; every
/// accessor that takes a row count clamps before answering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    index: usize,
    size: PageSize,
}

impl Pagination {
    pub fn new(size: PageSize) -> Self {
        Self { index: 0, size }
    }

    /// Returns the stored page index (unclamped).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Number of pages for `rows` rows. Never less than one.
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.size.get()).max(1)
    }

    /// Page index clamped to the last page for `rows` rows.
    pub fn current(&self, rows: usize) -> usize {
        self.index.min(self.page_count(rows) - 1)
    }

    /// Row range of the current page.
    pub fn range(&self, rows: usize) -> Range<usize> {
        let start = (self.current(rows) * self.size.get()).min(rows);
        let end = (start + self.size.get()).min(rows);
        start..end
    }

    /// Returns `true` if the stored index lies past the last page.
    pub fn is_out_of_range(&self, rows: usize) -> bool {
        self.index >= self.page_count(rows)
    }

    /// Pulls the index back onto the last page. Returns `true` if it moved.
    pub fn clamp(&mut self, rows: usize) -> bool {
        let current = self.current(rows);
        let moved = current != self.index;
        self.index = current;
        moved
    }

    /// Moves to `index`, clamped to the valid range.
    pub fn set_index(&mut self, index: usize, rows: usize) {
        self.index = index.min(self.page_count(rows) - 1);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Changes the page size, keeping the first visible row on screen.
    pub fn set_size(&mut self, size: PageSize, rows: usize) {
        let first_row = self.range(rows).start;
        self.size = size;
        self.index = first_row / size.get();
    }

    /// Advances one page. No-op on the last page.
    pub fn next(&mut self, rows: usize) -> bool {
        let current = self.current(rows);
        if current + 1 < self.page_count(rows) {
            self.index = current + 1;
            true
        } else {
            self.index = current;
            false
        }
    }

    /// Goes back one page. No-op on the first page.
    pub fn previous(&mut self, rows: usize) -> bool {
        let current = self.current(rows);
        if current > 0 {
            self.index = current - 1;
            true
        } else {
            self.index = 0;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_from_usize() {
        assert_eq!(PageSize::try_from(20), Ok(PageSize::Twenty));
        assert_eq!(PageSize::try_from(7), Err(TableError::InvalidPageSize(7)));
    }

    #[test]
    fn test_page_count_never_zero() {
        let pagination = Pagination::new(PageSize::Ten);
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
        assert_eq!(pagination.range(0), 0..0);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut pagination = Pagination::new(PageSize::Ten);
        assert!(!pagination.previous(12));
        assert!(pagination.next(12));
        assert!(!pagination.next(12));
        assert_eq!(pagination.index(), 1);
        assert_eq!(pagination.range(12), 10..12);
    }

    #[test]
    fn test_set_size_keeps_first_row_visible() {
        let mut pagination = Pagination::new(PageSize::Five);
        pagination.set_index(3, 100);
        assert_eq!(pagination.range(100).start, 15);

        pagination.set_size(PageSize::Ten, 100);
        assert_eq!(pagination.index(), 1);
        assert!(pagination.range(100).contains(&15));
    }

    #[test]
    fn test_clamp_reports_movement() {
        let mut pagination = Pagination::new(PageSize::Five);
        pagination.set_index(4, 25);
        assert!(pagination.clamp(7));
        assert_eq!(pagination.index(), 1);
        assert!(!pagination.clamp(7));
    }

    #[test]
    fn test_page_size_serde_as_number() {
        let json = serde_json::to_string(&PageSize::Fifty).unwrap();
        assert_eq!(json, "50");
        assert!(serde_json::from_str::<PageSize>("12").is_err());
    }
}
