//! Handling of the document returned when fetching a template.
//!
//! The service answers with the template encoded as a JSON string literal,
//! so the body has to be unescaped before it can be re-indented.

use jsonformat::Indentation;
use serde::de::IgnoredAny;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to unquote response body: {0}")]
    Unquote(serde_json::Error),
    #[error("Unable to indent template: {0}")]
    Indent(serde_json::Error),
}

/// Decodes a JSON string literal into the string it holds.
pub fn unquote(body: &str) -> Result<String, Error> {
    serde_json::from_str::<String>(body.trim()).map_err(Error::Unquote)
}

/// Re-indents a JSON document with two spaces. Only whitespace between tokens changes.
pub fn prettify(json: &str) -> Result<String, Error> {
    serde_json::from_str::<IgnoredAny>(json).map_err(Error::Indent)?;
    let formatted = jsonformat::format(json, Indentation::TwoSpace);
    Ok(formatted.trim_end().to_owned())
}

pub fn decode(body: &str) -> Result<String, Error> {
    let unquoted = unquote(body)?;
    prettify(&unquoted)
}
