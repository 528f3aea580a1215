//! # Matcher
//!
//! Substring containment primitive shared by keyword filtering and weighted
//! scoring. Callers lowercase the haystack once; keywords are already
//! lowercase.

/// Whether `keyword` occurs anywhere in `haystack`
///
/// Empty keywords never match.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    !keyword.is_empty() && haystack.contains(keyword)
}

/// Number of `keywords` occurring in `haystack`
pub fn count_matches<'a, I>(haystack: &str, keywords: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    keywords
        .into_iter()
        .filter(|keyword| contains_keyword(haystack, keyword))
        .count()
}

/// Lowercased whitespace-separated words of a query, at least `min_len`
/// chars long
pub fn query_words(query: &str, min_len: usize) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_len)
        .map(str::to_lowercase)
        .collect()
}
