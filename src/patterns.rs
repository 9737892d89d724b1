//! The pattern table.
//!
//! An ordered list of `(IntentKind, [Regex])` pairs. Order is significant:
//! the resolver takes the first match across the whole table, walking intents
//! in declaration order and each intent's patterns in list order.
//!
//! Capture groups mean different things per pattern (table, column, filter
//! value or row count); the resolver assigns them per intent.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::intent::IntentKind;

/// Pattern sources in declaration order.
const PATTERN_SOURCES: &[(IntentKind, &[&str])] = &[
    (
        IntentKind::ShowAll,
        &[
            r"(?:show|display|list|get|select)\s+all\s+(\w+)",
            r"(?:show|display|list|get|select)\s+(\w+)\s+(?:table|records)",
            r"(?:all|entire)\s+(\w+)\s+(?:table|data)",
        ],
    ),
    (
        IntentKind::CountRecords,
        &[
            r"(?:count|how many)\s+(\w+)",
            r"(?:number of|total number of)\s+(\w+)",
            r"(\w+)\s+count",
        ],
    ),
    (
        IntentKind::FilterByColumn,
        &[
            r#"(?:show|get|find)\s+(\w+)\s+(?:where|with)\s+(\w+)\s+(?:is|=|equals?)\s+['"]?(\w+)['"]?"#,
            r"(\w+)\s+(?:in|from)\s+(\w+)\s+(?:city|state|country|region)",
            r#"(\w+)\s+(?:where|with)\s+(\w+)\s+['"]?(\w+)['"]?"#,
        ],
    ),
    (
        IntentKind::CalculateSum,
        &[
            r"(?:total|sum of?)\s+(\w+)",
            r"(?:add up|calculate)\s+(?:all\s+)?(\w+)",
            r"(\w+)\s+(?:total|sum)",
        ],
    ),
    (
        IntentKind::CalculateAvg,
        &[
            r"(?:average|avg|mean)\s+(\w+)",
            r"(\w+)\s+(?:average|avg|mean)",
        ],
    ),
    (
        IntentKind::CalculateMax,
        &[
            r"(?:maximum|max|highest)\s+(\w+)",
            r"(\w+)\s+(?:maximum|max|highest)",
        ],
    ),
    (
        IntentKind::CalculateMin,
        &[
            r"(?:minimum|min|lowest)\s+(\w+)",
            r"(\w+)\s+(?:minimum|min|lowest)",
        ],
    ),
    (
        IntentKind::OrderBy,
        &[
            r"(?:sort|order)\s+(\w+)\s+by\s+(\w+)",
            r"(\w+)\s+(?:sorted|ordered)\s+by\s+(\w+)",
        ],
    ),
    (
        IntentKind::Limit,
        &[
            r"(?:top|first)\s+(\d+)\s+(\w+)",
            r"(\d+)\s+(?:first|top)\s+(\w+)",
        ],
    ),
];

static PATTERNS: LazyLock<PatternTable> = LazyLock::new(PatternTable::compile);

/// Compiled, ordered pattern table.
#[derive(Debug)]
pub struct PatternTable {
    entries: Vec<(IntentKind, Vec<Regex>)>,
}

/// One regex hit: which intent it belongs to and its captured groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'q> {
    pub kind: IntentKind,
    /// Position of the pattern within its intent's list.
    pub pattern: usize,
    /// Capture groups 1..=n, one entry per group in the pattern.
    pub groups: Vec<&'q str>,
}

impl PatternTable {
    /// The built-in table, compiled on first use.
    pub fn global() -> &'static PatternTable {
        &PATTERNS
    }

    fn compile() -> Self {
        let entries = PATTERN_SOURCES
            .iter()
            .map(|(kind, sources)| {
                let regexes: Vec<Regex> = sources
                    .iter()
                    .map(|src| {
                        RegexBuilder::new(src)
                            .case_insensitive(true)
                            .build()
                            .expect("built-in pattern must compile")
                    })
                    .collect();
                (*kind, regexes)
            })
            .collect();
        Self { entries }
    }

    /// Intents in declaration order with their patterns.
    pub fn entries(&self) -> &[(IntentKind, Vec<Regex>)] {
        &self.entries
    }

    /// Intent kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = IntentKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    /// Every pattern that matches `query`, in table order.
    ///
    /// Lazy: the resolver stops pulling at the first hit it can use.
    pub fn matches<'q>(&self, query: &'q str) -> impl Iterator<Item = PatternMatch<'q>> {
        self.entries.iter().flat_map(move |(kind, regexes)| {
            regexes.iter().enumerate().filter_map(move |(pattern, re)| {
                let caps = re.captures(query)?;
                let groups = caps
                    .iter()
                    .skip(1)
                    .map(|m| m.map_or("", |m| m.as_str()))
                    .collect();
                Some(PatternMatch {
                    kind: *kind,
                    pattern,
                    groups,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let kinds: Vec<IntentKind> = PatternTable::global().kinds().collect();
        assert_eq!(
            kinds,
            vec![
                IntentKind::ShowAll,
                IntentKind::CountRecords,
                IntentKind::FilterByColumn,
                IntentKind::CalculateSum,
                IntentKind::CalculateAvg,
                IntentKind::CalculateMax,
                IntentKind::CalculateMin,
                IntentKind::OrderBy,
                IntentKind::Limit,
            ]
        );
    }

    #[test]
    fn test_pattern_counts() {
        let counts: Vec<usize> = PatternTable::global()
            .entries()
            .iter()
            .map(|(_, regexes)| regexes.len())
            .collect();
        assert_eq!(counts, vec![3, 3, 3, 3, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_first_match_is_earliest_intent() {
        let first = PatternTable::global()
            .matches("show all sales total")
            .next()
            .unwrap();
        assert_eq!(first.kind, IntentKind::ShowAll);
        assert_eq!(first.pattern, 0);
        assert_eq!(first.groups, vec!["sales"]);
    }

    #[test]
    fn test_all_matches_in_order() {
        let kinds: Vec<IntentKind> = PatternTable::global()
            .matches("show all sales total")
            .map(|m| m.kind)
            .collect();
        assert_eq!(kinds, vec![IntentKind::ShowAll, IntentKind::CalculateSum]);
    }

    #[test]
    fn test_group_arity_per_pattern() {
        let m = PatternTable::global()
            .matches("users from london city")
            .find(|m| m.kind == IntentKind::FilterByColumn)
            .unwrap();
        assert_eq!(m.pattern, 1);
        assert_eq!(m.groups, vec!["users", "london"]);
    }

    #[test]
    fn test_case_insensitive() {
        let m = PatternTable::global().matches("TOP 5 Orders").next().unwrap();
        assert_eq!(m.kind, IntentKind::Limit);
        assert_eq!(m.groups, vec!["5", "Orders"]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(PatternTable::global().matches("hello there").count(), 0);
        assert_eq!(PatternTable::global().matches("").count(), 0);
    }
}
