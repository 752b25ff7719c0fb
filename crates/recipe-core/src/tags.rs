//! Tag parsing and matching.
//!
//! Tags are kept as a single comma-separated string on each recipe. Matching
//! splits on commas, trims each element and compares case-insensitively, so
//! `"Dessert , vegetarian"` matches a filter of `"dessert"` but a filter of
//! `"dess"` matches nothing.

use std::collections::BTreeSet;

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Normalize a tag filter: trimmed, `None` when blank.
pub fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|tag| !tag.is_empty())
}

/// Whether `raw` contains a tag equal to `tag`, ignoring case.
pub fn contains_tag(raw: &str, tag: &str) -> bool {
    let wanted = tag.trim().to_lowercase();
    if wanted.is_empty() {
        return false;
    }
    split_tags(raw)
        .into_iter()
        .any(|candidate| candidate.to_lowercase() == wanted)
}

/// Join individual tags into the stored comma-separated form.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref().trim())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Distinct lowercase tags across several tag strings, sorted.
pub fn distinct_tags<'a, I>(raws: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = BTreeSet::new();
    for raw in raws {
        for tag in split_tags(raw) {
            set.insert(tag.to_lowercase());
        }
    }
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_skips_empty() {
        assert_eq!(split_tags(" soup , vegetarian,,"), vec!["soup", "vegetarian"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert!(contains_tag("dessert,vegetarian", "dessert"));
        assert!(contains_tag("Dessert,vegetarian", "DESSERT"));
        assert!(contains_tag("salad, meat", " meat "));
    }

    #[test]
    fn test_contains_requires_whole_tag() {
        assert!(!contains_tag("desserts", "dessert"));
        assert!(!contains_tag("dessert", "dess"));
        assert!(!contains_tag("salad,meat", "dessert"));
        assert!(!contains_tag("salad,meat", "  "));
    }

    #[test]
    fn test_normalize_filter() {
        assert_eq!(normalize_filter(None), None);
        assert_eq!(normalize_filter(Some("   ")), None);
        assert_eq!(normalize_filter(Some(" soup ")), Some("soup"));
    }

    #[test]
    fn test_join_tags() {
        assert_eq!(join_tags(&["soup", " vegetarian ", ""]), "soup,vegetarian");
        assert_eq!(join_tags::<&str>(&[]), "");
    }

    #[test]
    fn test_distinct_tags() {
        let tags = distinct_tags(["soup,Vegetarian", "vegetarian, meat", ""]);
        assert_eq!(tags, vec!["meat", "soup", "vegetarian"]);
    }
}
