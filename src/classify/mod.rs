//! Line classification and token normalization.
//!
//! Converts one source's raw text into the set of valid TLD tokens it
//! publishes. Each [`SourceFormat`] carries the rule for its own line
//! syntax; dispatch is over the closed variant set so every source format is
//! handled exhaustively.
//!
//! This module is pure: no I/O, and identical input text always yields the
//! identical token set.

use std::collections::BTreeSet;

use crate::error_handling::ParseError;
use crate::sources::SourceFormat;

mod flat;
mod suffix;


/// Extracts the set of normalized TLD tokens from one source's text.
///
/// Lines are classified under the source's format rule; surviving candidates
/// are normalized (trimmed, lowercased) and validated against the token
/// invariants. Duplicates within a source collapse naturally since the
/// output is a set.
///
/// # Errors
///
/// Returns `ParseError::MalformedLine` if a line carries a Unicode
/// replacement character, which indicates the source text was mangled
/// upstream of classification.
pub fn extract_tokens(
    text: &str,
    format: &SourceFormat,
) -> Result<BTreeSet<String>, ParseError> {
    let mut tokens = BTreeSet::new();

    for (idx, line) in text.lines().enumerate() {
        if line.contains('\u{FFFD}') {
            return Err(ParseError::MalformedLine { line: idx + 1 });
        }

        let candidate = match format {
            SourceFormat::FlatList => flat::classify_line(line),
            SourceFormat::SuffixList {
                extract_idn_comments,
            } => suffix::classify_line(line, *extract_idn_comments),
        };

        if let Some(candidate) = candidate {
            if let Some(token) = normalize(candidate) {
                tokens.insert(token);
            }
        }
    }

    Ok(tokens)
}

/// Canonicalizes one candidate and checks the TLD token invariants.
///
/// A token is non-empty, lowercase, contains no comment marker, no path
/// separator, no embedded whitespace, and no leading or trailing dot.
/// Candidates failing any constraint are rejected, including candidates that
/// are empty after trimming.
fn normalize(candidate: &str) -> Option<String> {
    let token = candidate.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }
    if token.contains('#') || token.contains('/') {
        return None;
    }
    if token.chars().any(char::is_whitespace) {
        return None;
    }
    if token.starts_with('.') || token.ends_with('.') {
        return None;
    }
    Some(token)
}
