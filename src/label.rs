//! Chart labels from common substrings of file names.
//!
//! Traces that were run by several algorithms end up in differently named log
//! files (`msr_web_olken.log`, `msr_web_emap.log`, ...). The x-axis label for
//! such a group is the longest run of characters the names share, folded left
//! to right across the group:
//!
//! ```text
//! reduce(a, b, c) == lcs(lcs(a, b), c)
//! ```
//!
//! This is greedy and can be shorter than a true N-way common substring. Chart
//! labels depend on it, so it stays this way.

use std::path::Path;

/// Characters trimmed from both ends of a derived label.
const LABEL_TRIM: &[char] = &['_', '-', '.', '/'];

/// Longest contiguous run of characters common to `a` and `b`.
///
/// Ties go to the match starting earliest in `a`, then earliest in `b`.
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // prev[j + 1] is the length of the common suffix of a[..i] and b[..=j].
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best_len = 0;
    let mut best_start = 0;

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            if curr[j + 1] > best_len {
                best_len = curr[j + 1];
                best_start = i + 1 - best_len;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    a[best_start..best_start + best_len].iter().collect()
}

/// Fold [`longest_common_substring`] over `strings` from the left.
///
/// No strings give `""`; a single string is returned unchanged.
pub fn reduce_to_common_label<S: AsRef<str>>(strings: &[S]) -> String {
    let mut iter = strings.iter();
    let first = match iter.next() {
        Some(first) => first.as_ref().to_string(),
        None => return String::new(),
    };
    iter.fold(first, |acc, next| {
        longest_common_substring(&acc, next.as_ref())
    })
}

/// Strip whitespace and path punctuation from both ends of a label.
pub fn clean_label(label: &str) -> &str {
    label.trim_matches(|c: char| c.is_whitespace() || LABEL_TRIM.contains(&c))
}

/// File name without its final extension (`a/b/trace.v2.log` -> `trace.v2`).
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reduce and clean one group of file stems.
pub fn group_label<S: AsRef<str>>(stems: &[S]) -> String {
    clean_label(&reduce_to_common_label(stems)).to_string()
}
