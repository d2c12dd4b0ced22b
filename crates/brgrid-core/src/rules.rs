//! Sort and filter criteria
//!
//! Criteria exist in two shapes. `RuleSlots` is the fixed-length array an
//! editing panel binds to, blank slots included. The sparse list returned by
//! `RuleSlots::active` is what filtering and sorting iterate.

use serde::{Deserialize, Serialize};

/// Lowest and highest number of sort/filter slots a grid may configure
pub const MIN_RULE_LEVELS: usize = 1;
pub const MAX_RULE_LEVELS: usize = 6;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A single sort criterion; an empty `field` marks a blank slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortRule {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortRule {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

/// Filter operators, all case-insensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    #[default]
    Contains,
    Equals,
    StartsWith,
    EndsWith,
}

impl FilterOperator {
    /// Get the display label for the operator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Equals => "equals",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
        }
    }

    /// Get all available operators in display order
    pub fn all() -> &'static [FilterOperator] {
        &[
            Self::Contains,
            Self::Equals,
            Self::StartsWith,
            Self::EndsWith,
        ]
    }

    /// Test an already lower-cased cell value against an already lower-cased needle
    pub fn matches(&self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Contains => haystack.contains(needle),
            Self::Equals => haystack == needle,
            Self::StartsWith => haystack.starts_with(needle),
            Self::EndsWith => haystack.ends_with(needle),
        }
    }
}

/// A single filter criterion
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterRule {
    pub field: String,
    #[serde(default)]
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: String,
}

impl FilterRule {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// A criterion that can sit in an editing slot
pub trait SlotRule: Clone + Default + PartialEq {
    /// Whether a field has been picked for this slot
    fn has_field(&self) -> bool;

    /// Whether this slot takes part in computation
    fn is_active(&self) -> bool {
        self.has_field()
    }
}

impl SlotRule for SortRule {
    fn has_field(&self) -> bool {
        !self.field.is_empty()
    }
}

impl SlotRule for FilterRule {
    fn has_field(&self) -> bool {
        !self.field.is_empty()
    }

    fn is_active(&self) -> bool {
        self.has_field() && !self.value.trim().is_empty()
    }
}

/// Clamp a configured level count into the supported range
pub fn clamp_levels(levels: i64) -> usize {
    levels.clamp(MIN_RULE_LEVELS as i64, MAX_RULE_LEVELS as i64) as usize
}

/// Fixed-length editing slots for sort or filter criteria
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSlots<T: SlotRule> {
    slots: Vec<T>,
}

impl<T: SlotRule> RuleSlots<T> {
    /// All-blank slots
    pub fn blank(levels: usize) -> Self {
        Self {
            slots: vec![T::default(); levels],
        }
    }

    /// Seed slots from default criteria.
    ///
    /// Entries without a field are dropped, the rest are truncated to
    /// `levels` and the remainder is padded with blank slots.
    pub fn seed(seed: &[T], levels: usize) -> Self {
        let mut slots: Vec<T> = seed
            .iter()
            .filter(|rule| rule.has_field())
            .take(levels)
            .cloned()
            .collect();
        slots.resize(levels, T::default());
        Self { slots }
    }

    /// Number of slots
    pub fn levels(&self) -> usize {
        self.slots.len()
    }

    /// Get the slots, blank ones included
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Get one slot
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Overwrite one slot. Returns false when `index` is out of range.
    pub fn set(&mut self, index: usize, rule: T) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = rule;
                true
            }
            None => false,
        }
    }

    /// Blank every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = T::default());
    }

    /// The sparse list of participating criteria, in slot order
    pub fn active(&self) -> Vec<T> {
        self.slots
            .iter()
            .filter(|rule| rule.is_active())
            .cloned()
            .collect()
    }

    /// Number of participating criteria
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|rule| rule.is_active()).count()
    }
}
