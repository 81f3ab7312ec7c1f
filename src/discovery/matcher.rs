//! Best-effort language and genre matching.
//!
//! The sparse provider exposes language and genre as unstructured free text
//! ("English, Spanish", "Dramatic Comedy"), so exact enum matching is
//! infeasible. Matching is substring containment against a fixed variant
//! table. The imprecision is deliberate: a genre text of "Dramatic Comedy"
//! matching category "drama" is accepted noise, not a bug.

use crate::discovery::tables::{CATEGORY_KEYWORDS, LANGUAGE_VARIANTS};

/// Match a short language code against provider-reported free-text language.
///
/// The special code "all" always matches, including against empty text.
/// Otherwise the code maps to one or more lowercase variants (falling back
/// to the code itself when the table has no entry) and the match succeeds
/// if the lowercased text contains any variant as a substring.
pub fn matches_language(code: &str, text: &str) -> bool {
    if code.is_empty() || code == "all" {
        return true;
    }
    if text.is_empty() {
        return false;
    }

    let normalized = text.to_lowercase();
    match LANGUAGE_VARIANTS.get(code) {
        Some(variants) => variants.iter().any(|v| normalized.contains(v)),
        None => normalized.contains(&code.to_lowercase()),
    }
}

/// Match a category keyword against provider-reported free-text genres.
/// Identical policy to [`matches_language`], over the genre keyword table.
pub fn matches_category(category: &str, genres: &str) -> bool {
    if category.is_empty() || category == "all" {
        return true;
    }
    if genres.is_empty() {
        return false;
    }

    let normalized = genres.to_lowercase();
    match CATEGORY_KEYWORDS.get(category) {
        Some(keywords) => keywords.iter().any(|kw| normalized.contains(kw)),
        None => normalized.contains(&category.to_lowercase()),
    }
}

/// Keyword variants for a category, used by the sparse adapter's free-text
/// search path. Empty for "all" (nothing to search on); an uncatalogued
/// category becomes its own sole keyword.
pub fn category_keywords(category: &str) -> Vec<String> {
    if category.is_empty() || category == "all" {
        return Vec::new();
    }
    match CATEGORY_KEYWORDS.get(category) {
        Some(keywords) => keywords.iter().map(|kw| (*kw).to_string()).collect(),
        None => vec![category.to_lowercase()],
    }
}
