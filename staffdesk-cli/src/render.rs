//! Plain-text rendering of the visible page.

use staffdesk_table::DataTable;
use staffdesk_table::Direction;
use staffdesk_table::Searchable;
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

/// Renders the current page as an aligned grid followed by a status line.
pub fn page<T: Searchable>(table: &DataTable<T>) -> String {
    let active = table.sort_state().active();
    let headers: Vec<String> = table
        .columns()
        .iter()
        .map(|column| match active {
            Some((key, direction)) if key == column.key() => {
                format!("{} {}", column.header(), indicator(direction))
            }
            _ => column.header().to_string(),
        })
        .collect();

    let rows: Vec<Vec<String>> = table
        .visible_rows()
        .into_iter()
        .map(|record| table.columns().iter().map(|c| c.display(record)).collect())
        .collect();

    let mut out = grid(&headers, &rows);
    if rows.is_empty() {
        out.push_str("No results.\n");
    }
    out.push_str(&footer(table));
    out
}

fn indicator(direction: Direction) -> &'static str {
    match direction {
        Direction::Asc => "▲",
        Direction::Desc => "▼",
    }
}

fn footer<T: Searchable>(table: &DataTable<T>) -> String {
    let (rows, total) = (table.row_count(), table.total_count());
    let count = if rows == total {
        format!("{rows} rows")
    } else {
        format!("{rows} of {total} rows")
    };
    format!(
        "page {} of {} ({count})\n",
        table.current_page() + 1,
        table.page_count()
    )
}

/// Left-aligns every cell to its column's display width.
fn grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad(cell, width))
            .collect();
        out.push_str(line.join(GAP).trim_end());
        out.push('\n');
    };

    push_line(headers);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&rule);
    for row in rows {
        push_line(row);
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use staffdesk_table::Column;
    use staffdesk_table::PageSize;

    use super::*;

    struct Person(&'static str, u32);

    impl Searchable for Person {}

    fn table() -> DataTable<Person> {
        let mut table = DataTable::new(vec![
            Column::new("name", "Name", |p: &Person| p.0.into()),
            Column::new("age", "Age", |p: &Person| p.1.into()),
        ])
        .with_records(vec![
            Person("Zoë", 41),
            Person("Al", 9),
            Person("Bea", 30),
            Person("Cy", 22),
            Person("Di", 35),
            Person("Ed", 28),
        ]);
        table.set_page_size(PageSize::Five);
        table
    }

    #[test]
    fn test_grid_aligns_wide_characters() {
        let out = grid(
            &["Name".into(), "Age".into()],
            &[vec!["Zoë".into(), "41".into()], vec!["日本".into(), "7".into()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name  Age");
        assert_eq!(lines[1], "----  ---");
        assert_eq!(lines[2], "Zoë   41");
        assert_eq!(lines[3], "日本  7");
    }

    #[test]
    fn test_page_shows_sort_indicator_and_footer() {
        let mut table = table();
        table.set_sort("age", Some(Direction::Desc));
        let out = page(&table);
        assert!(out.starts_with("Name  Age ▼\n"));
        assert!(out.ends_with("page 1 of 2 (6 rows)\n"));
        assert!(out.lines().nth(2).unwrap().starts_with("Zoë"));
    }

    #[test]
    fn test_page_footer_counts_filtered_rows() {
        let mut table = table();
        table.set_global_filter("nobody");
        let out = page(&table);
        assert!(out.contains("No results.\n"));
        assert!(out.ends_with("page 1 of 1 (0 of 6 rows)\n"));
    }
}
