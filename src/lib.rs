//! A Unicode letter class covering every script, and regex patterns built
//! from it that strip non-letters out of text.
//!
//! ```
//! use letterclass::{strip, StripMode};
//!
//! assert_eq!(strip("1dabcZYX2", StripMode::StripNonLetters), "dabcZYX");
//! assert_eq!(strip("#!한글%조선글^@", StripMode::StripNonLetterDigitAtEdges), "한글%조선글");
//! ```

mod export;
mod pattern;
mod table;

#[cfg(test)]
mod samples;

pub use export::{js_class_body, js_source, ranges_json};
pub use pattern::{LetterPattern, StripMode, UnknownMode, class_body, pattern, pattern_source, strip};
pub use table::{CodePointRange, LetterTable, MAX_CODE_POINT, TableError, is_letter, is_letter_char, letters};
