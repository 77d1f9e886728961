//! Cell values produced by column accessors.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

/// A single cell read from a record by a column accessor.
///
/// Accessors return `Empty` for absent fields; it displays and compares as
/// the empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Absent field.
    #[default]
    Empty,
    /// Boolean flag.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Free text.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Point in time.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the default display string for this value.
    ///
    /// Dates use `%Y-%m-%d`, timestamps RFC 3339.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Bool(v) => Cow::Borrowed(if *v { "true" } else { "false" }),
            CellValue::Int(v) => Cow::Owned(v.to_string()),
            CellValue::Float(v) => Cow::Owned(v.to_string()),
            CellValue::Text(v) => Cow::Borrowed(v),
            CellValue::Date(v) => Cow::Owned(v.format("%Y-%m-%d").to_string()),
            CellValue::DateTime(v) => Cow::Owned(v.to_rfc3339()),
        }
    }

    /// Total ordering used for sorting.
    ///
    /// Values are grouped by kind first: `Empty`, then booleans, numbers,
    /// dates, timestamps and finally text. Within a kind they compare
    /// naturally, text case-insensitively. `Int` and `Float` share a kind
    /// and compare by exact numeric value.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => compare_floats(*a, *b),
            (CellValue::Int(a), CellValue::Float(b)) => compare_int_float(*a, *b),
            (CellValue::Float(a), CellValue::Int(b)) => compare_int_float(*b, *a).reverse(),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::DateTime(_) => 4,
            CellValue::Text(_) => 5,
        }
    }
}

/// `total_cmp` with the two zeros merged, so `-0.0`, `0.0` and `Int(0)`
/// are all equal.
fn compare_floats(a: f64, b: f64) -> Ordering {
    if a == 0.0 && b == 0.0 {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Exact comparison of an integer against a float. NaNs sit at the ends,
/// by sign, as they do under `total_cmp`.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, the first float past i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    int.cmp(&(whole as i64)).then_with(|| {
        let fraction = float - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<usize> for CellValue {
    fn from(v: usize) -> Self {
        CellValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_displays_as_empty_string() {
        assert_eq!(CellValue::Empty.display(), "");
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        let a = CellValue::from("ann");
        let b = CellValue::from("Bob");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            CellValue::from("Lee").compare(&CellValue::from("lee")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(CellValue::Int(9).compare(&CellValue::Int(10)), Ordering::Less);
        assert_eq!(
            CellValue::Int(2).compare(&CellValue::Float(1.5)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_empty_sorts_before_text() {
        assert_eq!(
            CellValue::Empty.compare(&CellValue::from("a")),
            Ordering::Less
        );
    }

    #[test]
    fn test_large_ints_compare_exactly_against_floats() {
        let big = 9_007_199_254_740_992_i64;
        let float = CellValue::Float(big as f64);
        assert_eq!(CellValue::Int(big).compare(&float), Ordering::Equal);
        assert_eq!(CellValue::Int(big + 1).compare(&float), Ordering::Greater);
        assert_eq!(float.compare(&CellValue::Int(big + 1)), Ordering::Less);
        assert_eq!(
            CellValue::Int(-3).compare(&CellValue::Float(-2.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Int(i64::MAX).compare(&CellValue::Float(f64::INFINITY)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Int(0).compare(&CellValue::Float(f64::NAN)),
            Ordering::Less
        );
    }

    #[test]
    fn test_signed_zeros_are_equal() {
        let zeros = [CellValue::Float(-0.0), CellValue::Float(0.0), CellValue::Int(0)];
        for a in &zeros {
            for b in &zeros {
                assert_eq!(a.compare(b), Ordering::Equal);
            }
        }
    }

    #[test]
    fn test_kinds_group_before_values() {
        let ordered = [
            CellValue::Empty,
            CellValue::Bool(true),
            CellValue::Int(1_000),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            CellValue::from("1"),
        ];
        for (i, a) in ordered.iter().enumerate() {
            for (j, b) in ordered.iter().enumerate() {
                assert_eq!(a.compare(b), i.cmp(&j), "{a:?} vs {b:?}");
            }
        }
        // Text never ties with a number, even when they display alike.
        assert_eq!(CellValue::Int(9).compare(&CellValue::from("9")), Ordering::Less);
    }

    #[test]
    fn test_date_display() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(CellValue::from(date).display(), "2024-03-07");
    }
}
