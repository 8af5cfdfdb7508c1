//! # Literal Escaping
//!
//! Best-effort escaping of raw text for embedding inside a quoted C# literal.

/// The quote character delimiting the target literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `'...'`
    Single,
    /// `"..."`
    Double,
}

impl QuoteStyle {
    /// The delimiting quote character.
    pub fn quote(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Escapes `raw` for the literal context given by `style`.
///
/// Backslashes are doubled first, then every `\n` sequence of the result is
/// escaped again, then the context's quote character. Nothing else is touched,
/// so control characters pass through as-is.
pub fn escape_literal(raw: &str, style: QuoteStyle) -> String {
    let escaped = raw.replace('\\', r"\\").replace(r"\n", r"\\n");
    match style {
        QuoteStyle::Single => escaped.replace('\'', r"\'"),
        QuoteStyle::Double => escaped.replace('"', r#"\""#),
    }
}
