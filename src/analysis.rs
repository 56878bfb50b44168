//! Local replica of the store-side analysis chain for `user_id` fields.
//!
//! The index is created with a char filter that strips `-` followed by a
//! lowercase filter, applied identically at index time and query time. Any
//! code that reasons about what a query *should* match has to apply the same
//! two steps; this module is the single place that does.

/// Apply the `user_id` analysis chain: strip `-`, then lowercase.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Whether `phrase` phrase-prefix-matches `value` under the `user_id`
/// analysis chain.
///
/// `user_id` values contain no whitespace, so the standard tokenizer emits a
/// single token per value and phrase-prefix matching collapses to a prefix
/// test on the normalized strings. A phrase that normalizes to the empty
/// string produces no tokens and matches nothing.
pub fn phrase_prefix_matches(phrase: &str, value: &str) -> bool {
    let needle = normalize(phrase);
    if needle.is_empty() {
        return false;
    }
    normalize(value).starts_with(&needle)
}
