//! Artifact rendering and output.
//!
//! The artifact is a Go source file declaring the ordered list as a
//! `[]string` literal. The full text is rendered in memory and written via a
//! temporary file renamed over the destination, so a failed run never leaves
//! a half-written artifact and a previous artifact survives any failure.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error_handling::WriteError;

/// Fixed attribution header written at the top of the artifact.
pub const ARTIFACT_HEADER: &str = "\
// Code generated by tldgen. DO NOT EDIT.
// Sources: IANA TLD registry, Mozilla Public Suffix List.
";

/// Go package the artifact belongs to.
pub const PACKAGE_IDENTIFIER: &str = "tlds";

/// Name of the declared list variable.
pub const VARIABLE_IDENTIFIER: &str = "TLDs";

/// Renders the full artifact text for an ordered token list.
///
/// Entries appear in list order, one per line, each individually quoted and
/// escaped per Go string-literal syntax, tab-indented and comma-terminated.
pub fn render_artifact(tokens: &[String]) -> String {
    // Rough per-entry cost: tab, quotes, comma, newline + the token itself
    let mut out = String::with_capacity(
        ARTIFACT_HEADER.len() + 64 + tokens.iter().map(|t| t.len() + 5).sum::<usize>(),
    );
    out.push_str(ARTIFACT_HEADER);
    out.push('\n');
    out.push_str("package ");
    out.push_str(PACKAGE_IDENTIFIER);
    out.push_str("\n\n");
    out.push_str("var ");
    out.push_str(VARIABLE_IDENTIFIER);
    out.push_str(" = []string{\n");
    for token in tokens {
        out.push_str("\t\"");
        out.push_str(&escape_string_literal(token));
        out.push_str("\",\n");
    }
    out.push_str("}\n");
    out
}

/// Escapes a token for inclusion in a double-quoted Go string literal.
///
/// Valid tokens contain neither character, but the emitter escapes rather
/// than trusting its callers.
fn escape_string_literal(token: &str) -> String {
    token.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes the rendered artifact to `path`.
///
/// The contents go to a temporary file in the destination directory first
/// and are renamed into place, fully overwriting any prior artifact only on
/// success.
///
/// # Errors
///
/// Returns `WriteError::Io` if the temporary file cannot be created or
/// written, and `WriteError::Persist` if the rename fails.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path)?;
    Ok(())
}
