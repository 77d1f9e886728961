use std::borrow::Cow;
use std::collections::HashSet;

use staffdesk_table::{
    CellValue, Column, DataTable, Direction, Lookup, PageSize, SearchField, Searchable,
};

#[derive(Debug, Clone, PartialEq)]
struct Staff {
    id: u32,
    first: &'static str,
    last: &'static str,
    email: &'static str,
    position: Option<&'static str>,
}

impl Searchable for Staff {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        match field {
            SearchField::FirstName => Some(Cow::Borrowed(self.first)),
            SearchField::LastName => Some(Cow::Borrowed(self.last)),
            SearchField::Email => Some(Cow::Borrowed(self.email)),
            SearchField::Position => self.position.map(Cow::Borrowed),
            _ => None,
        }
    }

    fn record_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.id.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Leave {
    employee_id: u32,
    reason: &'static str,
    status: &'static str,
}

impl Searchable for Leave {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        match field {
            SearchField::Reason => Some(Cow::Borrowed(self.reason)),
            SearchField::Status => Some(Cow::Borrowed(self.status)),
            _ => None,
        }
    }

    fn foreign_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.employee_id.to_string()))
    }
}

fn staff(id: u32, first: &'static str, last: &'static str) -> Staff {
    Staff {
        id,
        first,
        last,
        email: "",
        position: None,
    }
}

fn staff_columns() -> Vec<Column<Staff>> {
    vec![
        Column::new("name", "Name", |s: &Staff| {
            CellValue::from(format!("{} {}", s.first, s.last))
        }),
        Column::new("last", "Last", |s: &Staff| s.last.into()),
        Column::new("email", "Email", |s: &Staff| s.email.into()),
        Column::new("position", "Position", |s: &Staff| s.position.into()),
    ]
}

fn roster() -> Vec<Staff> {
    let names = [
        ("Eve", "Park"),
        ("Ann", "Lee"),
        ("Kai", "Diaz"),
        ("Bob", "Lee"),
        ("Hana", "Kim"),
        ("Dan", "Lee"),
        ("Cara", "Diaz"),
        ("Gus", "Lee"),
        ("Ivan", "Park"),
        ("Jo", "Lee"),
        ("Finn", "Diaz"),
        ("Lena", "Kim"),
        ("Mo", "Lee"),
    ];
    names
        .into_iter()
        .enumerate()
        .map(|(i, (first, last))| staff(i as u32, first, last))
        .collect()
}

fn ids(rows: &[&Staff]) -> Vec<u32> {
    rows.iter().map(|s| s.id).collect()
}

fn all_pages(table: &mut DataTable<Staff>) -> Vec<u32> {
    table.first_page();
    let mut seen = Vec::new();
    for _ in 0..table.page_count() {
        seen.extend(ids(&table.visible_rows()));
        table.next_page();
    }
    seen
}

// ============================================================================
// Search, paging and sort cycling
// ============================================================================

#[test]
fn test_global_filter_matches_names() {
    let records = vec![
        Staff {
            email: "a@x.com",
            ..staff(1, "Ann", "Lee")
        },
        Staff {
            email: "b@x.com",
            ..staff(2, "Bob", "Lee")
        },
    ];
    let mut table = DataTable::new(staff_columns()).with_records(records);

    table.set_global_filter("lee");
    assert_eq!(ids(&table.visible_rows()), vec![1, 2]);

    table.set_global_filter("ann");
    assert_eq!(ids(&table.visible_rows()), vec![1]);
}

#[test]
fn test_twelve_rows_span_two_pages() {
    let records: Vec<Staff> = (0..12).map(|i| staff(i, "P", "Q")).collect();
    let mut table = DataTable::new(staff_columns()).with_records(records);
    assert_eq!(table.page_size(), PageSize::Ten);

    assert_eq!(table.page_count(), 2);
    assert_eq!(table.visible_rows().len(), 10);

    assert!(table.next_page());
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.visible_rows().len(), 2);

    assert!(!table.next_page());
    assert_eq!(table.current_page(), 1);
}

#[test]
fn test_third_click_restores_insertion_order() {
    let mut table = DataTable::new(staff_columns()).with_records(roster());
    let original = ids(&table.rows());

    assert_eq!(table.toggle_sort("name"), Some(Direction::Asc));
    let ascending = ids(&table.rows());
    assert_ne!(ascending, original);

    assert_eq!(table.toggle_sort("name"), Some(Direction::Desc));
    let mut descending = ids(&table.rows());
    descending.reverse();
    assert_eq!(descending, ascending);

    assert_eq!(table.toggle_sort("name"), None);
    assert_eq!(ids(&table.rows()), original);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_filter_monotonicity() {
    let table_for = |query: &str| {
        let mut table = DataTable::new(staff_columns()).with_records(roster());
        table.set_global_filter(query);
        ids(&table.rows()).into_iter().collect::<HashSet<_>>()
    };

    for (shorter, longer) in [("e", "le"), ("le", "lee"), ("a", "an"), ("an", "ann")] {
        let wide = table_for(shorter);
        let narrow = table_for(longer);
        assert!(narrow.is_subset(&wide), "{longer:?} not within {shorter:?}");
    }
}

#[test]
fn test_sort_stability_on_ties() {
    let mut table = DataTable::new(staff_columns()).with_records(roster());
    table.set_sort("last", Some(Direction::Asc));

    let lees: Vec<u32> = table
        .rows()
        .into_iter()
        .filter(|s| s.last == "Lee")
        .map(|s| s.id)
        .collect();
    assert_eq!(lees, vec![1, 3, 5, 7, 9, 12]);

    table.set_sort("last", Some(Direction::Desc));
    let lees: Vec<u32> = table
        .rows()
        .into_iter()
        .filter(|s| s.last == "Lee")
        .map(|s| s.id)
        .collect();
    assert_eq!(lees, vec![1, 3, 5, 7, 9, 12]);
}

#[test]
fn test_pagination_covers_every_row_once() {
    for size in PageSize::ALL {
        let mut table = DataTable::new(staff_columns()).with_records(roster());
        table.set_page_size(size);
        table.set_sort("last", Some(Direction::Desc));
        table.set_global_filter("a");

        let paged = all_pages(&mut table);
        assert_eq!(paged, ids(&table.rows()), "page size {size}");
    }
}

#[test]
fn test_page_clamp_after_filter_shrinks_rows() {
    let mut table = DataTable::new(staff_columns()).with_records(roster());
    table.set_page_size(PageSize::Five);
    table.last_page();
    assert_eq!(table.current_page(), 2);

    table.set_global_filter("kim");
    assert!(table.current_page() < table.page_count());
    assert_eq!(table.current_page(), 0);
    assert_eq!(table.visible_rows().len(), 2);
}

#[test]
fn test_empty_filter_is_idempotent() {
    let mut table = DataTable::new(staff_columns()).with_records(roster());
    table.toggle_sort("last");
    let unfiltered = ids(&table.rows());

    table.set_global_filter("park");
    assert_eq!(table.row_count(), 2);

    table.set_global_filter("");
    assert_eq!(ids(&table.rows()), unfiltered);
}

// ============================================================================
// Foreign-key resolution
// ============================================================================

fn leave_columns() -> Vec<Column<Leave>> {
    vec![
        Column::new("reason", "Reason", |l: &Leave| l.reason.into()),
        Column::new("status", "Status", |l: &Leave| l.status.into()),
    ]
}

#[test]
fn test_global_filter_resolves_foreign_names() {
    let employees = vec![
        Staff {
            position: Some("Engineer"),
            ..staff(1, "Ann", "Lee")
        },
        staff(2, "Bob", "Park"),
    ];
    let requests = vec![
        Leave {
            employee_id: 1,
            reason: "Flu",
            status: "Pending",
        },
        Leave {
            employee_id: 2,
            reason: "Trip",
            status: "Approved",
        },
        Leave {
            employee_id: 9,
            reason: "Move",
            status: "Pending",
        },
    ];
    let mut table = DataTable::new(leave_columns())
        .with_records(requests)
        .with_lookup(Lookup::from_records(&employees));

    table.set_global_filter("ann lee");
    assert_eq!(table.rows()[0].reason, "Flu");
    assert_eq!(table.row_count(), 1);

    table.set_global_filter("engineer");
    assert_eq!(table.row_count(), 1);

    table.set_global_filter("pending");
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_empty_lookup_matches_own_fields_only() {
    let requests = vec![Leave {
        employee_id: 1,
        reason: "Flu",
        status: "Pending",
    }];
    let mut table = DataTable::new(leave_columns()).with_records(requests);

    table.set_global_filter("ann");
    assert_eq!(table.row_count(), 0);
    table.set_global_filter("flu");
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_caller_records_are_untouched() {
    let records = roster();
    let mut table = DataTable::new(staff_columns()).with_records(records.clone());
    table.toggle_sort("name");
    table.toggle_sort("name");
    table.set_global_filter("lee");

    assert_eq!(table.records(), records.as_slice());
}
