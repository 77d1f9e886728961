//! Sort state and header-click cycling.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered sort keys. Empty means insertion order.
///
/// The table only ever holds one key at a time, but the comparator honours
/// every entry in order so the type stays honest about what it stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    keys: Vec<(String, Direction)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the sort keys with their directions.
    pub fn keys(&self) -> &[(String, Direction)] {
        &self.keys
    }

    /// Returns the primary sort key, if any.
    pub fn active(&self) -> Option<(&str, Direction)> {
        self.keys.first().map(|(key, dir)| (key.as_str(), *dir))
    }

    /// Returns the direction `key` is sorted in, if it is sorted.
    pub fn direction_of(&self, key: &str) -> Option<Direction> {
        self.keys
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, dir)| *dir)
    }

    /// Sorts by `key` alone, or clears `key` when `direction` is `None`.
    pub fn set(&mut self, key: &str, direction: Option<Direction>) {
        match direction {
            Some(direction) => self.keys = vec![(key.to_string(), direction)],
            None => self.keys.retain(|(k, _)| k != key),
        }
    }

    /// Advances `key` through none → asc → desc → none.
    ///
    /// A key other than the active one starts over at ascending and
    /// replaces whatever was sorted before. Returns the new direction.
    pub fn toggle(&mut self, key: &str) -> Option<Direction> {
        let next = match self.direction_of(key) {
            None => Some(Direction::Asc),
            Some(Direction::Asc) => Some(Direction::Desc),
            Some(Direction::Desc) => None,
        };
        match next {
            Some(direction) => self.set(key, Some(direction)),
            None => self.keys.clear(),
        }
        next
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Parsed `KEY[:asc|:desc]` sort request.
///
/// # Example
///
/// ```
/// use staffdesk_table::{Direction, SortSpec};
///
/// let spec: SortSpec = "hiredOn:desc".parse().unwrap();
/// assert_eq!(spec.key, "hiredOn");
/// assert_eq!(spec.direction, Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: Direction,
}

impl FromStr for SortSpec {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TableError::InvalidSortSpec(s.to_string());
        let (key, direction) = match s.split_once(':') {
            Some((key, dir)) => {
                let direction = match dir.to_ascii_lowercase().as_str() {
                    "asc" => Direction::Asc,
                    "desc" => Direction::Desc,
                    _ => return Err(invalid()),
                };
                (key, direction)
            }
            None => (s, Direction::Asc),
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }
        Ok(SortSpec {
            key: key.to_string(),
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_same_column() {
        let mut sort = SortState::new();
        assert_eq!(sort.toggle("name"), Some(Direction::Asc));
        assert_eq!(sort.toggle("name"), Some(Direction::Desc));
        assert_eq!(sort.toggle("name"), None);
        assert!(sort.is_empty());
    }

    #[test]
    fn test_toggle_other_column_replaces_key() {
        let mut sort = SortState::new();
        sort.toggle("name");
        sort.toggle("name");
        assert_eq!(sort.toggle("email"), Some(Direction::Asc));
        assert_eq!(sort.keys(), &[("email".to_string(), Direction::Asc)]);
    }

    #[test]
    fn test_set_none_only_clears_named_key() {
        let mut sort = SortState::new();
        sort.set("name", Some(Direction::Desc));
        sort.set("email", None);
        assert_eq!(sort.active(), Some(("name", Direction::Desc)));
        sort.set("name", None);
        assert_eq!(sort.active(), None);
    }

    #[test]
    fn test_parse_sort_spec() {
        let spec: SortSpec = "name".parse().unwrap();
        assert_eq!(spec.direction, Direction::Asc);

        let spec: SortSpec = "startDate:DESC".parse().unwrap();
        assert_eq!(spec.key, "startDate");
        assert_eq!(spec.direction, Direction::Desc);

        assert!("name:sideways".parse::<SortSpec>().is_err());
        assert!(":asc".parse::<SortSpec>().is_err());
    }
}
