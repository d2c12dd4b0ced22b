//! View filter - free-text search plus field-level filter rules
//!
//! A row passes when it matches the search term (if any) and every active
//! filter rule. Output order is the input order.

use brgrid_core::{normalized_value, FilterOperator, FilterRule, Row, SlotRule};

#[derive(Debug, Clone)]
struct PreparedRule<'a> {
    field: &'a str,
    operator: FilterOperator,
    needle: String,
}

/// Row predicate built from the current search term and filter rules
#[derive(Debug, Clone, Default)]
pub struct ViewFilter<'a> {
    search: Option<String>,
    search_fields: Vec<&'a str>,
    rules: Vec<PreparedRule<'a>>,
}

impl<'a> ViewFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `fields` for `term`, case-insensitively.
    ///
    /// A blank term or an empty field list disables search.
    pub fn with_search(mut self, term: &str, fields: impl IntoIterator<Item = &'a str>) -> Self {
        let term = term.trim().to_lowercase();
        self.search_fields = fields.into_iter().collect();
        self.search = (!term.is_empty() && !self.search_fields.is_empty()).then_some(term);
        self
    }

    /// Require every active rule in `rules`; blank ones are skipped
    pub fn with_rules(mut self, rules: &'a [FilterRule]) -> Self {
        self.rules = rules
            .iter()
            .filter(|rule| rule.is_active())
            .map(|rule| PreparedRule {
                field: rule.field.as_str(),
                operator: rule.operator,
                needle: rule.value.to_lowercase(),
            })
            .collect();
        self
    }

    /// True when no row can be excluded
    pub fn is_pass_through(&self) -> bool {
        self.search.is_none() && self.rules.is_empty()
    }

    pub fn matches_search(&self, row: &Row) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        self.search_fields
            .iter()
            .any(|field| normalized_value(row.field(field)).contains(term.as_str()))
    }

    pub fn matches_rules(&self, row: &Row) -> bool {
        self.rules.iter().all(|rule| {
            rule.operator
                .matches(&normalized_value(row.field(rule.field)), &rule.needle)
        })
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.matches_search(row) && self.matches_rules(row)
    }

    /// Order-preserving subsequence of `rows` that passes the filter
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        if self.is_pass_through() {
            return rows.to_vec();
        }
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brgrid_core::{RowId, Value};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn rows() -> Vec<Row> {
        [
            json!({ "name": "Alice Johnson", "role": "Admin", "status": "Active", "age": 31 }),
            json!({ "name": "Bob Smith", "role": "Developer", "status": "Active", "age": 45 }),
            json!({ "name": "Carol Williams", "role": "Designer", "status": "Inactive", "age": 28 }),
            json!({ "name": "Dave Brown", "role": "Developer", "status": null }),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, record): (usize, Value)| Row::new(RowId(i), Arc::new(record)))
        .collect()
    }

    fn ids(rows: &[Row]) -> Vec<usize> {
        rows.iter().map(|row| row.id().index()).collect()
    }

    #[test]
    fn test_pass_through_without_criteria() {
        let filter = ViewFilter::new();
        assert!(filter.is_pass_through());
        assert_eq!(ids(&filter.apply(&rows())), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_search_any_visible_field_case_insensitive() {
        let filter = ViewFilter::new().with_search("  DEV ", ["name", "role"]);
        assert_eq!(ids(&filter.apply(&rows())), vec![1, 3]);

        // Only the listed fields are searched
        let filter = ViewFilter::new().with_search("dev", ["name"]);
        assert!(filter.apply(&rows()).is_empty());

        // Numbers are stringified
        let filter = ViewFilter::new().with_search("45", ["age"]);
        assert_eq!(ids(&filter.apply(&rows())), vec![1]);
    }

    #[test]
    fn test_search_disabled_without_fields_or_term() {
        assert!(ViewFilter::new().with_search("bob", []).is_pass_through());
        assert!(ViewFilter::new().with_search("   ", ["name"]).is_pass_through());
    }

    #[rstest]
    #[case::equals(FilterOperator::Equals, "active", vec![0, 1])]
    #[case::contains(FilterOperator::Contains, "active", vec![0, 1, 2])]
    #[case::starts_with(FilterOperator::StartsWith, "in", vec![2])]
    #[case::ends_with(FilterOperator::EndsWith, "IVE", vec![0, 1, 2])]
    fn test_single_rule(
        #[case] operator: FilterOperator,
        #[case] value: &str,
        #[case] expected: Vec<usize>,
    ) {
        let rules = vec![FilterRule::new("status", operator, value)];
        let filter = ViewFilter::new().with_rules(&rules);
        assert_eq!(ids(&filter.apply(&rows())), expected);
    }

    #[test]
    fn test_rules_are_anded_and_blank_rules_ignored() {
        let rules = vec![
            FilterRule::new("status", FilterOperator::Equals, "Active"),
            FilterRule::new("role", FilterOperator::Contains, "dev"),
            FilterRule::new("name", FilterOperator::Contains, "  "),
            FilterRule::default(),
        ];
        let filter = ViewFilter::new().with_rules(&rules);
        assert_eq!(ids(&filter.apply(&rows())), vec![1]);
    }

    #[test]
    fn test_null_field_matches_as_empty_string() {
        let rules = vec![FilterRule::new("status", FilterOperator::Contains, "a")];
        let filter = ViewFilter::new().with_rules(&rules);
        assert!(!filter.matches(&rows()[3]));
    }

    #[test]
    fn test_search_and_rules_intersect() {
        let rules = vec![FilterRule::new("status", FilterOperator::Equals, "active")];
        let combined = ViewFilter::new()
            .with_search("o", ["name"])
            .with_rules(&rules);
        let search_only = ViewFilter::new().with_search("o", ["name"]);
        let rules_only = ViewFilter::new().with_rules(&rules);

        let expected: Vec<usize> = rows()
            .iter()
            .filter(|row| search_only.matches(row) && rules_only.matches(row))
            .map(|row| row.id().index())
            .collect();
        assert_eq!(ids(&combined.apply(&rows())), expected);
        assert_eq!(expected, vec![0, 1]);
    }
}
