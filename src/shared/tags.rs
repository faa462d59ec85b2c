//! Conversion between a tag list and the comma-separated text edited in forms.
//!
//! Every tag-bearing entity uses the same rule: split on commas, trim each
//! segment, drop empty segments. Joining uses `", "`.

pub const TAG_SEPARATOR: &str = ", ";

pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
