//! Input and output adapters around the compactor.

use crate::error::Result;
use crate::token::OutputToken;

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Remove every literal comma from a raw input token.
pub fn strip_commas(raw: &str) -> String {
    raw.replace(',', "")
}

/// Turn raw input tokens (e.g. command-line words) into accessions.
///
/// Tokens that are empty once their commas are gone are dropped.
pub fn collect_accessions<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|r| strip_commas(r.as_ref()))
        .filter(|a| !a.is_empty())
        .collect()
}

/// Join tokens with `separator`, no enclosing brackets.
pub fn render_text(tokens: &[OutputToken], separator: &str) -> String {
    tokens.iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn render_json(tokens: &[OutputToken]) -> Result<String> {
    Ok(serde_json::to_string(tokens)?)
}
