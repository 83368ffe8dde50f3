//! Title normalization for lookup keys.
//!
//! Commercial track titles frequently carry edition annotations appended by
//! retailers and streaming platforms ("Song - Radio Edit", "Song (Explicit)")
//! that are not part of the recording's canonical title and sabotage exact
//! matching. [`clean_title`] strips the known annotations before a title is
//! used as a lookup key.

/// Known noise substrings, checked in this order.
///
/// Order is load-bearing: several entries are supersets of later ones
/// (`" - Album Version (Edited)"` must be tried before `" - Album Version"`),
/// and the parenthesized forms are distinct entries from the dashed forms.
const NOISE_PATTERNS: [&str; 12] = [
    " - Album Version (Edited)",
    " - Album Version (Explicit)",
    " - Album Version",
    " (Album Version (Edited))",
    " (Album Version (Explicit))",
    " (Album Version)",
    " - Edited",
    " - Explicit",
    " - Radio Edit",
    " (Edited)",
    " (Explicit)",
    " (Radio Edit)",
];

/// Remove known edition/version annotations from a track title.
///
/// Every occurrence of each pattern is removed, anywhere in the string, not
/// just at the end. Matching is exact-case: a lowercase `(explicit)` is left
/// alone. The result is trimmed of leading and trailing whitespace.
pub fn clean_title(title: &str) -> String {
    let mut title = title.to_string();
    for pattern in NOISE_PATTERNS {
        if title.contains(pattern) {
            title = title.replace(pattern, "");
        }
    }
    title.trim().to_string()
}
