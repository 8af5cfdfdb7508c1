use crate::error::AppResult;
use crate::escape::QuoteStyle;
use crate::whitelist::Whitelist;
use regex::{NoExpand, Regex};

/// The parameter declaration whose default value gets replaced.
pub const DECLARATION: &str = "string allowSpecialChars";

/// How far past the declaration the replaced span reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenMatch {
    /// Up to the last `)` on the line. Swallows any code between the
    /// parameter list and a later `)` on the same line.
    #[default]
    Greedy,
    /// Up to the first `)` after the declaration.
    First,
}

impl ParenMatch {
    fn source(self) -> String {
        let decl = regex::escape(DECLARATION);
        match self {
            ParenMatch::Greedy => format!(r"{decl}.*\)"),
            ParenMatch::First => format!(r"{decl}[^)\n]*\)"),
        }
    }
}

/// Rewrites the `allowSpecialChars` default value to the whitelist.
#[derive(Debug, Clone)]
pub struct TargetedRewrite {
    regex: Regex,
    replacement: String,
}

impl TargetedRewrite {
    /// Prepares the fixed declaration text for `whitelist`.
    pub fn new(whitelist: &Whitelist, parens: ParenMatch) -> AppResult<Self> {
        let regex = Regex::new(&parens.source())?;
        let replacement = format!(
            "{} = \"{}\")",
            DECLARATION,
            whitelist.escaped(QuoteStyle::Double)
        );
        Ok(Self { regex, replacement })
    }

    /// Replaces every matching span, returning the new text and match count.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let hits = self.regex.find_iter(content).count();
        if hits == 0 {
            return (content.to_string(), 0);
        }
        let out = self
            .regex
            .replace_all(content, NoExpand(&self.replacement))
            .into_owned();
        (out, hits)
    }
}
