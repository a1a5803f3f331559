//! Identifier helpers shared by the generators.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Lower-cases `label` and strips every whitespace run: `"User Name"` → `"username"`.
pub fn field_name(label: &str) -> String {
    WHITESPACE.replace_all(&label.to_lowercase(), "").into_owned()
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
