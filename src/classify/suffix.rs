//! Suffix-list classification (public-suffix style).
//!
//! The richer registries mix suffix rules with comments, wildcard rules and
//! exception rules. Only two line shapes yield a top-level token: a single
//! bare label, and (when the capability is enabled) a `//` comment that
//! embeds the punycode transliteration of an internationalized TLD.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a `//` comment whose first word is a punycode token, e.g.
/// `// xn--p1ai : https://...`. The token runs to the next whitespace.
const IDN_COMMENT_PATTERN: &str = r"^// (xn--\S+)(?:\s|$)";

static IDN_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IDN_COMMENT_PATTERN, "IDN_COMMENT_RE"));

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Classifies one suffix-list line, returning the candidate token if any.
///
/// Accepted shapes:
/// - a single bare label: no dot, no slash, not a wildcard (`*`) rule, not
///   an exception (`!`) rule — interpreted as a top-level entry;
/// - a `//` comment embedding a punycode token, when
///   `extract_idn_comments` is set.
///
/// Everything else (dotted suffix rules, wildcard rules, exception rules,
/// blank lines, ordinary comments) is rejected.
pub(super) fn classify_line(line: &str, extract_idn_comments: bool) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("//") {
        if !extract_idn_comments {
            return None;
        }
        return IDN_COMMENT_RE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
    }

    if trimmed.contains('.') || trimmed.contains('/') {
        return None;
    }
    if trimmed.starts_with('!') || trimmed.contains('*') {
        return None;
    }

    Some(trimmed)
}
