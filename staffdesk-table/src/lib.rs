//! In-memory tabular data engine.
//!
//! `staffdesk-table` turns a record array plus a set of column definitions
//! into a filtered, sorted, paginated view. Every dashboard page (employees,
//! departments, leave requests, attendance) configures one [`DataTable`]
//! and drives it from its search box, header clicks and pager.
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//!
//! use staffdesk_table::{CellValue, Column, DataTable, SearchField, Searchable};
//!
//! struct Person {
//!     first: String,
//!     last: String,
//! }
//!
//! impl Searchable for Person {
//!     fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
//!         match field {
//!             SearchField::FirstName => Some(Cow::Borrowed(&self.first)),
//!             SearchField::LastName => Some(Cow::Borrowed(&self.last)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let columns = vec![
//!     Column::new("first", "First", |p: &Person| CellValue::from(p.first.as_str())),
//!     Column::new("last", "Last", |p: &Person| CellValue::from(p.last.as_str())),
//! ];
//! let mut table = DataTable::new(columns).with_records(vec![
//!     Person { first: "Ann".into(), last: "Lee".into() },
//!     Person { first: "Bob".into(), last: "Lee".into() },
//! ]);
//!
//! table.set_global_filter("ann");
//! assert_eq!(table.row_count(), 1);
//! ```

pub mod column;
pub mod error;
pub mod export;
pub mod filter;
pub mod options;
pub mod page;
pub mod search;
pub mod sort;
pub mod value;

mod table;

pub use column::Column;
pub use error::TableError;
pub use export::Export;
pub use filter::FilterState;
pub use options::{SearchMode, TableOptions};
pub use page::{PageSize, Pagination};
pub use search::{Lookup, SearchField, Searchable};
pub use sort::{Direction, SortSpec, SortState};
pub use table::DataTable;
pub use value::CellValue;
