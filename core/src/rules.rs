//! # Substitution Rules
//!
//! The two generic rules that splice the whitelist into quoted literals.
//!
//! Each hit is split into three parts: the literal up to "the letter", the
//! letter itself, and the rest up to the closing quote. The whitelist is
//! emitted right after the letter.

use crate::error::AppResult;
use crate::escape::QuoteStyle;
use crate::whitelist::Whitelist;
use regex::{Captures, Regex};

/// What counts as "the letter" inside a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterPattern {
    /// Any ASCII letter outside an escape sequence; the first one in each
    /// literal wins.
    #[default]
    Letter,
    /// The text `a-zA-Z` or `A-Za-z`, i.e. a character-class range written
    /// inside a string. The prefix is greedy so the last range on the line wins.
    Range,
}

impl LetterPattern {
    /// Regex source for a literal delimited by `quote`.
    ///
    /// `Letter` matches one whole single-line literal (escapes included) so
    /// consecutive matches never start on a closing quote. `Range` captures
    /// the three parts directly.
    pub fn source(self, quote: char) -> String {
        match self {
            LetterPattern::Letter => format!(r"{quote}(?:[^{quote}\\\n]|\\.)*{quote}"),
            LetterPattern::Range => format!(r"({quote}[^\n]*)(a-zA-Z|A-Za-z)([^\n]*{quote})"),
        }
    }
}

/// Splits a quoted literal around its first ASCII letter that is not part of
/// an escape sequence.
pub fn split_at_letter(literal: &str) -> Option<(&str, &str, &str)> {
    let mut escaped = false;
    for (i, c) in literal.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c.is_ascii_alphabetic() {
            return Some((&literal[..i], &literal[i..i + 1], &literal[i + 1..]));
        }
    }
    None
}

/// One compiled pattern plus the escaped text it inserts.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    style: QuoteStyle,
    letters: LetterPattern,
    regex: Regex,
    insert: String,
}

impl SubstitutionRule {
    /// Compiles the rule for `style` literals.
    pub fn new(
        style: QuoteStyle,
        letters: LetterPattern,
        whitelist: &Whitelist,
    ) -> AppResult<Self> {
        let regex = Regex::new(&letters.source(style.quote()))?;
        Ok(Self {
            style,
            letters,
            regex,
            insert: whitelist.escaped(style).to_string(),
        })
    }

    /// Quote style this rule targets.
    pub fn style(&self) -> QuoteStyle {
        self.style
    }

    /// Replaces every match in `content`, returning the new text and the
    /// number of literals that received the whitelist.
    ///
    /// The inserted text is literal; `$` in the whitelist is not a group
    /// reference.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut hits = 0;
        let out = self
            .regex
            .replace_all(content, |caps: &Captures| match self.letters {
                LetterPattern::Letter => match split_at_letter(&caps[0]) {
                    Some((prefix, letter, rest)) => {
                        hits += 1;
                        format!("{}{}{}{}", prefix, letter, self.insert, rest)
                    }
                    None => caps[0].to_string(),
                },
                LetterPattern::Range => {
                    hits += 1;
                    format!("{}{}{}{}", &caps[1], &caps[2], self.insert, &caps[3])
                }
            });
        (out.into_owned(), hits)
    }
}

/// The ordered rule list: double-quote rule, then single-quote rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    /// Builds both rules from the whitelist.
    pub fn build(whitelist: &Whitelist, letters: LetterPattern) -> AppResult<Self> {
        let rules = [QuoteStyle::Double, QuoteStyle::Single]
            .into_iter()
            .map(|style| SubstitutionRule::new(style, letters, whitelist))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Applies every rule in order; each sees the previous rule's output.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut current = content.to_string();
        let mut total = 0;
        for rule in &self.rules {
            let (next, hits) = rule.apply(&current);
            if hits > 0 {
                log::debug!("{:?} rule matched {} literal(s)", rule.style(), hits);
            }
            current = next;
            total += hits;
        }
        (current, total)
    }
}
