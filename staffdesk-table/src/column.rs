//! Column definitions.

use std::fmt;
use std::sync::Arc;

use crate::value::CellValue;

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type Render = Arc<dyn Fn(&CellValue) -> String + Send + Sync>;

/// Column configuration.
///
/// A column pairs a stable key with a typed accessor that reads one
/// (possibly derived) value off a record, plus an optional render
/// transform used for display, column filtering and export. Columns are
/// sortable and filterable unless switched off.
///
/// # Examples
///
/// ```
/// use staffdesk_table::{CellValue, Column};
///
/// struct Leave {
///     days: i64,
/// }
///
/// let column = Column::new("days", "Days", |l: &Leave| CellValue::from(l.days))
///     .render(|v| format!("{v} d"));
///
/// assert_eq!(column.display(&Leave { days: 3 }), "3 d");
/// ```
pub struct Column<T> {
    key: String,
    header: String,
    accessor: Accessor<T>,
    render: Option<Render>,
    sortable: bool,
    filterable: bool,
}

impl<T> Column<T> {
    /// Creates a column reading its value through `accessor`.
    pub fn new<F>(key: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
            render: None,
            sortable: true,
            filterable: true,
        }
    }

    /// Sets the display transform.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Excludes the column from sorting.
    pub fn disable_sorting(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Excludes the column from per-column filtering.
    pub fn disable_filtering(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Reads the raw cell value from a record.
    pub fn value(&self, record: &T) -> CellValue {
        (self.accessor)(record)
    }

    /// Reads and renders the cell for a record.
    pub fn display(&self, record: &T) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value),
            None => value.display().into_owned(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            render: self.render.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("rendered", &self.render.is_some())
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .finish()
    }
}
