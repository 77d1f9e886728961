//! Global search: well-known fields and foreign-key name resolution.
//!
//! The global filter never probes record shape. Records opt in through
//! [`Searchable`], answering for each [`SearchField`] they carry, and may
//! name one foreign record whose name fields are searched as well.

use std::borrow::Cow;
use std::collections::HashMap;

/// The fixed set of fields the global filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    FirstName,
    LastName,
    Email,
    Username,
    Position,
    Type,
    Reason,
    Status,
}

impl SearchField {
    /// Every search field, in evaluation order.
    pub const ALL: [SearchField; 9] = [
        SearchField::Name,
        SearchField::FirstName,
        SearchField::LastName,
        SearchField::Email,
        SearchField::Username,
        SearchField::Position,
        SearchField::Type,
        SearchField::Reason,
        SearchField::Status,
    ];

    /// Field name as it appears in the backend's JSON.
    pub fn name(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::FirstName => "firstName",
            SearchField::LastName => "lastName",
            SearchField::Email => "email",
            SearchField::Username => "username",
            SearchField::Position => "position",
            SearchField::Type => "type",
            SearchField::Reason => "reason",
            SearchField::Status => "status",
        }
    }
}

/// Capability trait for records the global filter can search.
///
/// Every method defaults to "absent", so a record type only answers for
/// what it actually has. Absent fields never match.
pub trait Searchable {
    /// Returns the value of a well-known field, if the record has it.
    fn search_field(&self, _field: SearchField) -> Option<Cow<'_, str>> {
        None
    }

    /// Identifier other records use to reference this one.
    fn record_id(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Identifier of the foreign record this one references, if any.
    fn foreign_id(&self) -> Option<Cow<'_, str>> {
        None
    }
}

impl<S: Searchable + ?Sized> Searchable for &S {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        (**self).search_field(field)
    }

    fn record_id(&self) -> Option<Cow<'_, str>> {
        (**self).record_id()
    }

    fn foreign_id(&self) -> Option<Cow<'_, str>> {
        (**self).foreign_id()
    }
}

/// Searchable fields of a referenced record, lowercased. People carry the
/// name parts, things like departments carry `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LookupEntry {
    name: String,
    first_name: String,
    last_name: String,
    email: String,
    position: String,
}

impl LookupEntry {
    fn from_record<L: Searchable>(record: &L) -> Self {
        let field = |f| lowercase_field(record, f);
        Self {
            name: field(SearchField::Name),
            first_name: field(SearchField::FirstName),
            last_name: field(SearchField::LastName),
            email: field(SearchField::Email),
            position: field(SearchField::Position),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.contains(needle)
            || self.first_name.contains(needle)
            || self.last_name.contains(needle)
            || self.email.contains(needle)
            || self.position.contains(needle)
            || full_name_matches(&self.first_name, &self.last_name, needle)
    }
}

/// Auxiliary id → searchable-name index used to resolve foreign keys while searching.
///
/// # Example
///
/// ```ignore
/// let lookup = Lookup::from_records(&employees);
/// let table = DataTable::new(columns::leave_requests(&employees))
///     .with_records(requests)
///     .with_lookup(lookup);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    entries: HashMap<String, LookupEntry>,
}

impl Lookup {
    /// Creates an empty lookup. Foreign keys never resolve against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every record that has a [`Searchable::record_id`].
    pub fn from_records<L: Searchable>(records: &[L]) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| {
                let id = record.record_id()?.into_owned();
                Some((id, LookupEntry::from_record(record)))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` resolves.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<&LookupEntry> {
        self.entries.get(id)
    }
}

/// Global filter predicate. `needle` must already be lowercased.
pub(crate) fn matches_global<T: Searchable>(record: &T, needle: &str, lookup: &Lookup) -> bool {
    if needle.is_empty() {
        return true;
    }

    if SearchField::ALL
        .iter()
        .any(|&field| lowercase_field(record, field).contains(needle))
    {
        return true;
    }

    let first = lowercase_field(record, SearchField::FirstName);
    let last = lowercase_field(record, SearchField::LastName);
    if full_name_matches(&first, &last, needle) {
        return true;
    }

    // Unresolved ids add nothing.
    record
        .foreign_id()
        .and_then(|id| lookup.get(&id))
        .is_some_and(|entry| entry.matches(needle))
}

fn lowercase_field<T: Searchable + ?Sized>(record: &T, field: SearchField) -> String {
    record
        .search_field(field)
        .map(|value| value.to_lowercase())
        .unwrap_or_default()
}

/// Matches `"first last"` so multi-word name queries work.
fn full_name_matches(first: &str, last: &str, needle: &str) -> bool {
    if first.is_empty() && last.is_empty() {
        return false;
    }
    format!("{first} {last}").contains(needle)
}
