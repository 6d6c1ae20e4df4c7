//! Extraction of the announcer/color pair from a free-text model reply.
//!
//! Models like to wrap the requested JSON in prose or markdown fences, so
//! everything before the first `{` and after the last `}` is dropped before
//! parsing. This is a forgiving trim, not a JSON scanner: braces inside the
//! surrounding prose are not balanced or skipped.

use serde::Deserialize;

/// One play-by-play line and one color line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commentary {
    pub announcer: String,
    pub color: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CommentaryError {
    #[error("no JSON object in response")]
    NoObject,

    #[error("invalid commentary JSON: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Trim `raw` to the span from its first `{` to its last `}`.
///
/// Returns an empty string when no such span exists.
pub fn sanitize(raw: &str) -> &str {
    let Some(start) = raw.find('{') else {
        return "";
    };
    let rest = &raw[start..];
    match rest.rfind('}') {
        Some(end) => &rest[..=end],
        None => "",
    }
}

/// Sanitize `raw` and parse it into a [`Commentary`].
///
/// Both `announcer` and `color` must be present and be strings; extra
/// fields are ignored.
pub fn parse_commentary(raw: &str) -> Result<Commentary, CommentaryError> {
    let json = sanitize(raw);
    if json.is_empty() {
        return Err(CommentaryError::NoObject);
    }
    Ok(serde_json::from_str(json)?)
}
