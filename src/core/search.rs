use regex::Regex;

/// Splits a free-text skill query into candidate fragments on commas
/// and semicolons, trimming surrounding whitespace. Fragments keep
/// their inner spacing so multi-word names ("Apache Spark") and names
/// with arbitrary characters ("C++", "Scikit-Learn", "Café") survive
/// intact; the resolver falls back to word-by-word lookup for loose
/// word lists. Deduplicates case-insensitively and preserves first-seen
/// order. Malformed input degrades to fewer fragments; this never
/// fails.
pub fn parse_search_request(raw: &str) -> Vec<String> {
    let re = Regex::new(r"[,;]+").unwrap();

    let mut seen = std::collections::HashSet::new();
    let mut fragments = Vec::new();
    for fragment in re.split(raw) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if seen.insert(fragment.to_lowercase()) {
            fragments.push(fragment.to_string());
        }
    }
    fragments
}
