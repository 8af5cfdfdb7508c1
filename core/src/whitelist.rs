use crate::escape::{escape_literal, QuoteStyle};

/// The characters to allow, with both escaped forms precomputed.
///
/// The raw text is taken as-is; nothing is validated or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    raw: String,
    single: String,
    double: String,
}

impl Whitelist {
    /// Builds the whitelist and its escaped variants.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let single = escape_literal(&raw, QuoteStyle::Single);
        let double = escape_literal(&raw, QuoteStyle::Double);
        Self {
            raw,
            single,
            double,
        }
    }

    /// The text exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text escaped for a literal delimited by `style`.
    pub fn escaped(&self, style: QuoteStyle) -> &str {
        match style {
            QuoteStyle::Single => &self.single,
            QuoteStyle::Double => &self.double,
        }
    }

    /// True when nothing was entered.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
