//! Multi-level sorting for the grid view
//!
//! Rules are walked in priority order; the first rule on which two rows
//! differ decides, reversed for descending rules. Rows that tie on every
//! rule keep their relative order.

use std::cmp::Ordering;

use brgrid_core::{stringify_value, Row, SlotRule, SortDirection, SortRule, Value};

/// Configuration for null value handling in sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPosition {
    /// Null and missing values appear first
    First,
    /// Null and missing values appear last
    #[default]
    Last,
}

impl NullPosition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "Nulls first",
            Self::Last => "Nulls last",
        }
    }
}

/// Multi-level sort over row fields
#[derive(Debug, Clone, Default)]
pub struct ViewSorter<'a> {
    rules: Vec<&'a SortRule>,
    null_position: NullPosition,
}

impl<'a> ViewSorter<'a> {
    /// Sort by the active rules of `rules`, in order; blank rules are skipped
    pub fn new(rules: &'a [SortRule]) -> Self {
        Self {
            rules: rules.iter().filter(|rule| rule.is_active()).collect(),
            null_position: NullPosition::default(),
        }
    }

    pub fn with_null_position(mut self, null_position: NullPosition) -> Self {
        self.null_position = null_position;
        self
    }

    /// Check if any sort rules are active
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn null_position(&self) -> NullPosition {
        self.null_position
    }

    /// Compare two field values with null handling
    fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let a = a.filter(|v| !v.is_null());
        let b = b.filter(|v| !v.is_null());

        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match self.null_position {
                NullPosition::First => Ordering::Less,
                NullPosition::Last => Ordering::Greater,
            },
            (Some(_), None) => match self.null_position {
                NullPosition::First => Ordering::Greater,
                NullPosition::Last => Ordering::Less,
            },
            (Some(a), Some(b)) => compare_non_null_values(a, b),
        }
    }

    /// Compare two rows using all active rules
    pub fn compare_rows(&self, a: &Row, b: &Row) -> Ordering {
        for rule in &self.rules {
            let ordering = self.compare_values(a.field(&rule.field), b.field(&rule.field));
            if ordering != Ordering::Equal {
                return match rule.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                };
            }
        }
        Ordering::Equal
    }

    /// Sort rows in place. Without active rules this is the identity.
    pub fn sort_rows(&self, rows: &mut [Row]) {
        if self.is_empty() {
            return;
        }
        // `sort_by` is stable, so ties keep the filtered order.
        rows.sort_by(|a, b| self.compare_rows(a, b));
    }
}

/// How a value takes part in ordering.
///
/// Each value maps to one key on its own, so the ordering between any two
/// values never depends on a third. Text that reads as a finite number sorts
/// with the numbers.
enum SortKey<'v> {
    Null,
    Bool(bool),
    Number(NumberKey),
    Text(&'v str),
    Array(&'v [Value]),
    Object(&'v Value),
}

impl<'v> SortKey<'v> {
    fn of(value: &'v Value) -> Self {
        match value {
            Value::Null => SortKey::Null,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Number(n) => SortKey::Number(n.as_i64().map_or_else(
                || NumberKey::float(n.as_f64().unwrap_or_default()),
                NumberKey::int,
            )),
            Value::String(s) => NumberKey::parse(s).map_or(SortKey::Text(s), SortKey::Number),
            Value::Array(items) => SortKey::Array(items),
            Value::Object(_) => SortKey::Object(value),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::Array(_) => 4,
            Self::Object(_) => 5,
        }
    }
}

/// Numeric sort key: the value as `f64`, then integers before floats of the
/// same magnitude, then the exact integer.
#[derive(Debug, Clone, Copy)]
struct NumberKey {
    approx: f64,
    is_float: bool,
    exact: i64,
}

impl NumberKey {
    fn int(value: i64) -> Self {
        Self {
            approx: value as f64,
            is_float: false,
            exact: value,
        }
    }

    fn float(value: f64) -> Self {
        Self {
            approx: value,
            is_float: true,
            exact: 0,
        }
    }

    /// Numeric reading of text. `NaN` and infinities stay text.
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(int) = text.parse::<i64>() {
            return Some(Self::int(int));
        }
        text.parse::<f64>()
            .ok()
            .filter(|float| float.is_finite())
            .map(Self::float)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.approx
            .total_cmp(&other.approx)
            .then(self.is_float.cmp(&other.is_float))
            .then(self.exact.cmp(&other.exact))
    }
}

/// Compare two non-null values
fn compare_non_null_values(a: &Value, b: &Value) -> Ordering {
    let (a, b) = (SortKey::of(a), SortKey::of(b));
    match (&a, &b) {
        (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
        (SortKey::Number(x), SortKey::Number(y)) => x.compare(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Array(x), SortKey::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(va, vb)| compare_non_null_values(va, vb))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (SortKey::Object(x), SortKey::Object(y)) => {
            stringify_value(Some(*x)).cmp(&stringify_value(Some(*y)))
        }
        _ => a.rank().cmp(&b.rank()),
    }
}
