use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::table::{LetterTable, letters};

// A negated class over ~700 ranges compiles to a large UTF-8 automaton.
const SIZE_LIMIT: usize = 64 * (1 << 20);

static NON_LETTERS: Lazy<LetterPattern> = Lazy::new(|| compile_shared(StripMode::StripNonLetters));
static EDGES: Lazy<LetterPattern> = Lazy::new(|| compile_shared(StripMode::StripNonLetterDigitAtEdges));

/// What a [`LetterPattern`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StripMode {
    /// Every code point that is not a letter, anywhere in the text.
    StripNonLetters,
    /// Runs of code points that are neither letters nor ASCII digits, but
    /// only at the very start or the very end of the text.
    StripNonLetterDigitAtEdges,
}

impl StripMode {
    pub const ALL: [StripMode; 2] = [StripMode::StripNonLetters, StripMode::StripNonLetterDigitAtEdges];

    /// ASCII digits are kept alongside letters only in the edge mode.
    pub fn keeps_digits(self) -> bool {
        matches!(self, StripMode::StripNonLetterDigitAtEdges)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StripMode::StripNonLetters => "strip-non-letters",
            StripMode::StripNonLetterDigitAtEdges => "strip-non-letter-digit-at-edges",
        }
    }
}

impl fmt::Display for StripMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strip mode {:?} (expected `letters` or `edges`)", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for StripMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letters" | "strip-non-letters" => Ok(StripMode::StripNonLetters),
            "edges" | "strip-non-letter-digit-at-edges" => Ok(StripMode::StripNonLetterDigitAtEdges),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Render the table as the body of a regex character class, e.g.
/// `0-9\x{41}-\x{5A}\x{AA}` with `keep_digits`.
pub fn class_body(table: &LetterTable, keep_digits: bool) -> String {
    let mut body = String::with_capacity(table.ranges().len() * 20 + 3);
    if keep_digits {
        body.push_str("0-9");
    }
    for r in table.ranges() {
        if r.low == r.high {
            body.push_str(&format!("\\x{{{:X}}}", r.low));
        } else {
            body.push_str(&format!("\\x{{{:X}}}-\\x{{{:X}}}", r.low, r.high));
        }
    }
    body
}

/// Full pattern source for `mode` over `table`.
pub fn pattern_source(table: &LetterTable, mode: StripMode) -> String {
    let strip_class = format!("[^{}]", class_body(table, mode.keeps_digits()));
    match mode {
        StripMode::StripNonLetters => format!("{}+", strip_class),
        StripMode::StripNonLetterDigitAtEdges => format!("^{0}+|{0}+$", strip_class),
    }
}

/// A compiled, immutable matcher for one [`StripMode`].
#[derive(Debug, Clone)]
pub struct LetterPattern {
    mode: StripMode,
    regex: Regex,
}

impl LetterPattern {
    /// Compile a fresh pattern over the shared letter table. Prefer
    /// [`pattern`], which compiles each mode once.
    pub fn build(mode: StripMode) -> Result<Self, regex::Error> {
        Self::build_with(letters(), mode)
    }

    pub fn build_with(table: &LetterTable, mode: StripMode) -> Result<Self, regex::Error> {
        let source = pattern_source(table, mode);
        let regex = RegexBuilder::new(&source)
            .size_limit(SIZE_LIMIT)
            .dfa_size_limit(SIZE_LIMIT)
            .build()?;
        debug!(%mode, ranges = table.ranges().len(), source_len = source.len(), "letter pattern compiled");
        Ok(LetterPattern { mode, regex })
    }

    pub fn mode(&self) -> StripMode {
        self.mode
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Replace every match with nothing in a single left-to-right pass.
    /// Text with nothing to strip is returned borrowed.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, NoExpand(""))
    }

    /// Byte ranges [`strip`](Self::strip) would remove, in order.
    pub fn removed(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|m| m.range()).collect()
    }
}

fn compile_shared(mode: StripMode) -> LetterPattern {
    LetterPattern::build(mode)
        .unwrap_or_else(|e| panic!("letter pattern for {} does not compile: {}", mode, e))
}

/// Shared compiled pattern for `mode`.
pub fn pattern(mode: StripMode) -> &'static LetterPattern {
    match mode {
        StripMode::StripNonLetters => &*NON_LETTERS,
        StripMode::StripNonLetterDigitAtEdges => &*EDGES,
    }
}

pub fn strip(text: &str, mode: StripMode) -> String {
    pattern(mode).strip(text).into_owned()
}
