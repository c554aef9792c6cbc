//! Approximate keyword matching for search result titles.

use std::collections::HashSet;

/// Check whether enough `keywords` loosely appear in `text`.
///
/// The text is lower-cased and split on whitespace. A keyword counts as
/// matched when any token contains it, or it contains any token. At least
/// half of the keywords (rounded down, minimum one) must match, so an empty
/// keyword list never matches.
pub fn approximately_present<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let text = text.to_lowercase();
    let tokens: HashSet<&str> = text.split_whitespace().collect();

    let matched = keywords
        .iter()
        .map(|kw| kw.as_ref().to_lowercase())
        .filter(|kw| {
            tokens
                .iter()
                .any(|token| token.contains(kw.as_str()) || kw.contains(token))
        })
        .count();

    matched >= (keywords.len() / 2).max(1)
}
