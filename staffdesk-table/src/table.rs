//! The table engine.

use std::cmp::Ordering;
use std::ops::Range;

use log::debug;
use log::trace;

use crate::column::Column;
use crate::error::TableError;
use crate::export::Export;
use crate::filter::FilterState;
use crate::options::SearchMode;
use crate::options::TableOptions;
use crate::page::PageSize;
use crate::page::Pagination;
use crate::search::Lookup;
use crate::search::Searchable;
use crate::search::matches_global;
use crate::sort::Direction;
use crate::sort::SortState;
use crate::value::CellValue;

/// A filtered, sorted, paginated view over a record array.
///
/// The table owns its sort / filter / pagination state and a copy of the
/// records most recently handed to it. Derived views are recomputed from
/// scratch on every call: filter the full set, stable-sort the survivors,
/// then slice out the current page. Nothing is cached, so replacing the
/// records or any piece of state can never leave a stale view behind.
///
/// # Example
///
/// ```ignore
/// let mut table = DataTable::new(columns::employees(&departments))
///     .with_records(employees)
///     .with_lookup(Lookup::from_records(&departments));
///
/// table.set_global_filter("lee");
/// table.toggle_sort("name");
/// for employee in table.visible_rows() {
///     println!("{}", employee.full_name());
/// }
/// println!("page {} of {}", table.current_page() + 1, table.page_count());
/// ```
#[derive(Debug, Clone)]
pub struct DataTable<T> {
    records: Vec<T>,
    columns: Vec<Column<T>>,
    lookup: Lookup,
    search_mode: SearchMode,
    sort: SortState,
    filters: FilterState,
    pagination: Pagination,
}

impl<T: Searchable> DataTable<T> {
    /// Creates an empty table with default options.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            records: Vec::new(),
            columns,
            lookup: Lookup::new(),
            search_mode: SearchMode::default(),
            sort: SortState::new(),
            filters: FilterState::new(),
            pagination: Pagination::default(),
        }
    }

    /// Creates an empty table, checking that the search column exists and
    /// can be filtered.
    pub fn with_options(columns: Vec<Column<T>>, options: TableOptions) -> Result<Self, TableError> {
        if let SearchMode::Column(key) = &options.search_mode {
            match columns.iter().find(|c| c.key() == key) {
                None => return Err(TableError::UnknownColumn(key.clone())),
                Some(column) if !column.is_filterable() => {
                    return Err(TableError::NotFilterable(key.clone()));
                }
                Some(_) => {}
            }
        }

        let mut table = Self::new(columns);
        table.search_mode = options.search_mode;
        table.pagination = Pagination::new(options.page_size);
        Ok(table)
    }

    /// Sets the records (builder pattern).
    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.set_records(records);
        self
    }

    /// Sets the foreign-key lookup (builder pattern).
    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.set_lookup(lookup);
        self
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Replaces the record array.
    ///
    /// If the new set is smaller, the page index is pulled back onto the
    /// new last page.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        let rows = self.row_count();
        if self.pagination.clamp(rows) {
            debug!(
                "records replaced, page clamped to {}",
                self.pagination.index()
            );
        }
    }

    /// Replaces the foreign-key lookup.
    pub fn set_lookup(&mut self, lookup: Lookup) {
        self.lookup = lookup;
        self.reset_page_if_out_of_range();
    }

    /// Returns the records as supplied, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Returns the column with the given key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key() == key)
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    pub fn search_mode(&self) -> &SearchMode {
        &self.search_mode
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Returns the global filter text.
    pub fn global_filter(&self) -> &str {
        self.filters.global()
    }

    /// Replaces the global filter.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.filters.set_global(text);
        debug!("global filter set to {:?}", self.filters.global());
        self.reset_page_if_out_of_range();
    }

    /// Filters one column by its displayed value. Empty text clears it.
    ///
    /// Returns `false` (and changes nothing) for unknown or non-filterable
    /// columns.
    pub fn set_column_filter(&mut self, key: &str, text: impl Into<String>) -> bool {
        if !self.column(key).is_some_and(Column::is_filterable) {
            debug!("ignoring filter on unfilterable column {key:?}");
            return false;
        }
        self.filters.set_column(key, text);
        debug!("column filter {key:?} set to {:?}", self.filters.column(key));
        self.reset_page_if_out_of_range();
        true
    }

    /// Sends search box text wherever the search mode says.
    pub fn search(&mut self, text: impl Into<String>) {
        match self.search_mode.clone() {
            SearchMode::Global => self.set_global_filter(text),
            SearchMode::Column(key) => {
                self.set_column_filter(&key, text);
            }
            SearchMode::Disabled => {}
        }
    }

    /// Clears the global filter and every column filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        debug!("filters cleared");
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sorts by `key` in `direction`, or clears the sort on `key` for `None`.
    ///
    /// Returns `false` (and changes nothing) for unknown or non-sortable
    /// columns.
    pub fn set_sort(&mut self, key: &str, direction: Option<Direction>) -> bool {
        if !self.column(key).is_some_and(Column::is_sortable) {
            debug!("ignoring sort on unsortable column {key:?}");
            return false;
        }
        self.sort.set(key, direction);
        debug!("sort set to {:?}", self.sort.active());
        true
    }

    /// Header click: cycles `key` through none → asc → desc → none.
    ///
    /// Returns the new direction. Unknown or non-sortable columns leave
    /// the current sort untouched.
    pub fn toggle_sort(&mut self, key: &str) -> Option<Direction> {
        if !self.column(key).is_some_and(Column::is_sortable) {
            debug!("ignoring sort toggle on unsortable column {key:?}");
            return self.sort.direction_of(key);
        }
        let direction = self.sort.toggle(key);
        debug!("sort toggled to {:?}", self.sort.active());
        direction
    }

    /// Restores insertion order.
    pub fn clear_sort(&mut self) {
        self.sort.clear();
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn page_size(&self) -> PageSize {
        self.pagination.size()
    }

    /// Changes the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, size: PageSize) {
        let rows = self.row_count();
        self.pagination.set_size(size, rows);
        debug!("page size set to {size}, page {}", self.pagination.index());
    }

    /// Advances one page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        let rows = self.row_count();
        self.pagination.next(rows)
    }

    /// Goes back one page. Returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        let rows = self.row_count();
        self.pagination.previous(rows)
    }

    pub fn first_page(&mut self) {
        self.pagination.reset();
    }

    pub fn last_page(&mut self) {
        let rows = self.row_count();
        self.pagination.set_index(usize::MAX, rows);
    }

    /// Jumps to a page, clamped to the valid range.
    pub fn set_page(&mut self, index: usize) {
        let rows = self.row_count();
        self.pagination.set_index(index, rows);
    }

    pub fn can_previous_page(&self) -> bool {
        self.current_page() > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.current_page() + 1 < self.page_count()
    }

    /// Zero-based index of the current page, always within range.
    pub fn current_page(&self) -> usize {
        self.pagination.current(self.row_count())
    }

    /// Number of pages. One even when there are no rows.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.row_count())
    }

    /// Positions of the current page within the filtered rows.
    pub fn page_range(&self) -> Range<usize> {
        self.pagination.range(self.row_count())
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Number of records before filtering.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Number of records that pass the filters.
    pub fn row_count(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Every filtered and sorted record, across all pages.
    pub fn rows(&self) -> Vec<&T> {
        self.processed_indices()
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// The current page of filtered and sorted records.
    ///
    /// An empty result is the "no results" state; rendering a message for
    /// it is the caller's job.
    pub fn visible_rows(&self) -> Vec<&T> {
        let indices = self.processed_indices();
        let range = self.pagination.range(indices.len());
        indices[range].iter().map(|&i| &self.records[i]).collect()
    }

    /// Renders every filtered and sorted row through the column renderers.
    pub fn export(&self) -> Export {
        let headers = self.columns.iter().map(|c| c.header().to_string()).collect();
        let rows = self
            .rows()
            .into_iter()
            .map(|record| self.columns.iter().map(|c| c.display(record)).collect())
            .collect();
        Export { headers, rows }
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    fn filtered_indices(&self) -> Vec<usize> {
        let global = self.filters.global().to_lowercase();
        let column_filters: Vec<(&Column<T>, String)> = self
            .filters
            .columns()
            .filter_map(|(key, text)| Some((self.column(key)?, text.to_lowercase())))
            .collect();

        let indices: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_global(*record, &global, &self.lookup))
            .filter(|(_, record)| {
                column_filters
                    .iter()
                    .all(|(column, needle)| column.display(record).to_lowercase().contains(needle))
            })
            .map(|(i, _)| i)
            .collect();

        trace!(
            "filtered {} of {} records",
            indices.len(),
            self.records.len()
        );
        indices
    }

    fn processed_indices(&self) -> Vec<usize> {
        let indices = self.filtered_indices();

        let sort_columns: Vec<(&Column<T>, Direction)> = self
            .sort
            .keys()
            .iter()
            .filter_map(|(key, dir)| Some((self.column(key)?, *dir)))
            .collect();
        if sort_columns.is_empty() {
            return indices;
        }

        let mut keyed: Vec<(usize, Vec<CellValue>)> = indices
            .into_iter()
            .map(|i| {
                let values = sort_columns
                    .iter()
                    .map(|(column, _)| column.value(&self.records[i]))
                    .collect();
                (i, values)
            })
            .collect();

        // Stable: ties keep insertion order in either direction.
        keyed.sort_by(|(_, a), (_, b)| {
            sort_columns
                .iter()
                .zip(a.iter().zip(b))
                .map(|((_, dir), (a, b))| match dir {
                    Direction::Asc => a.compare(b),
                    Direction::Desc => b.compare(a),
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        keyed.into_iter().map(|(i, _)| i).collect()
    }

    fn reset_page_if_out_of_range(&mut self) {
        let rows = self.row_count();
        if self.pagination.is_out_of_range(rows) {
            debug!(
                "page {} out of range for {rows} rows, back to first page",
                self.pagination.index()
            );
            self.pagination.reset();
        }
    }
}
