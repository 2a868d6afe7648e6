//! Relevance filter — narrows the lookup table to records plausibly
//! present in the input text.
//!
//! The filter is a pure textual heuristic. A false positive only adds an
//! extra context line to the prompt; a false negative degrades to the
//! generic "no specific deprecations" notice downstream.

use super::store::{DeprecationRecord, LookupTable};

/// How a deprecated identifier must occur in the input to count as relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The bare identifier occurs anywhere in the text.
    Substring,
    /// The identifier occurs as a modifier call (`.ident(`), falling back
    /// to a looser `.ident` occurrence.
    ModifierCall,
}

/// Returns the records whose normalized identifier occurs in `text`.
///
/// The result is an order-preserving subsequence of `table`. Records whose
/// `deprecated` field normalizes to an empty identifier are dropped
/// unconditionally.
#[must_use]
pub fn filter<'a>(
    text: &str,
    table: &'a LookupTable,
    strategy: MatchStrategy,
) -> Vec<&'a DeprecationRecord> {
    table
        .iter()
        .filter(|record| {
            let ident = normalize(&record.deprecated);
            !ident.is_empty() && matches(text, ident, strategy)
        })
        .collect()
}

/// Reduces a `deprecated` field to a bare identifier: strips a leading
/// `func ` token, then truncates at the first `(`.
#[must_use]
pub fn normalize(deprecated: &str) -> &str {
    let stripped = deprecated.trim().strip_prefix("func ").unwrap_or(deprecated.trim());
    let ident = stripped.split('(').next().unwrap_or(stripped);
    ident.trim()
}

fn matches(text: &str, ident: &str, strategy: MatchStrategy) -> bool {
    match strategy {
        MatchStrategy::Substring => text.contains(ident),
        MatchStrategy::ModifierCall => {
            text.contains(&format!(".{ident}(")) || text.contains(&format!(".{ident}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::store::fallback_table;

    fn record(deprecated: &str) -> DeprecationRecord {
        DeprecationRecord {
            deprecated: deprecated.to_string(),
            replacement: "replacement".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn normalize_strips_func_prefix_and_params() {
        assert_eq!(normalize("func foregroundColor(_ color: Color?)"), "foregroundColor");
        assert_eq!(normalize("foregroundColor(_:)"), "foregroundColor");
        assert_eq!(normalize("foregroundColor"), "foregroundColor");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("(broken"), "");
    }

    #[test]
    fn matching_record_is_returned() {
        let table = vec![record("foregroundColor(_:)")];
        let text = "Rectangle().foregroundColor(Color.blue)";
        let relevant = filter(text, &table, MatchStrategy::Substring);
        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant[0].deprecated, "foregroundColor(_:)");
    }

    #[test]
    fn non_matching_text_returns_empty() {
        let table = vec![record("foregroundColor(_:)")];
        let text = "Rectangle().frame(width:100)";
        assert!(filter(text, &table, MatchStrategy::Substring).is_empty());
        assert!(filter(text, &table, MatchStrategy::ModifierCall).is_empty());
    }

    #[test]
    fn empty_text_returns_empty_for_any_table() {
        let table = fallback_table();
        assert!(filter("", &table, MatchStrategy::Substring).is_empty());
        assert!(filter("", &table, MatchStrategy::ModifierCall).is_empty());
    }

    #[test]
    fn empty_identifier_records_are_dropped() {
        let table = vec![record(""), record("()"), record("frame(width:)")];
        let relevant = filter("anything .frame(width: 10)", &table, MatchStrategy::Substring);
        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant[0].deprecated, "frame(width:)");
    }

    #[test]
    fn result_preserves_table_order() {
        let table = vec![record("alpha(_:)"), record("beta(_:)"), record("gamma(_:)")];
        let text = "x.gamma(1).alpha(2)";
        let relevant = filter(text, &table, MatchStrategy::Substring);
        let names: Vec<&str> = relevant.iter().map(|r| r.deprecated.as_str()).collect();
        assert_eq!(names, vec!["alpha(_:)", "gamma(_:)"]);
    }

    #[test]
    fn modifier_call_requires_leading_dot() {
        let table = vec![record("foregroundColor(_:)")];
        // Bare identifier without a dot: substring matches, modifier-call does not.
        let text = "let foregroundColor = pick()";
        assert_eq!(filter(text, &table, MatchStrategy::Substring).len(), 1);
        assert!(filter(text, &table, MatchStrategy::ModifierCall).is_empty());
    }

    #[test]
    fn modifier_call_falls_back_to_loose_dotted_occurrence() {
        let table = vec![record("foregroundColor(_:)")];
        // Dotted but not a call; the loose fallback still counts it.
        let text = "let f = view.foregroundColor";
        assert_eq!(filter(text, &table, MatchStrategy::ModifierCall).len(), 1);
    }

    #[test]
    fn modifier_call_matches_full_call_pattern() {
        let table = vec![record("edgesIgnoringSafeArea(_:)")];
        let text = "Rectangle().edgesIgnoringSafeArea(.all)";
        assert_eq!(filter(text, &table, MatchStrategy::ModifierCall).len(), 1);
    }
}
