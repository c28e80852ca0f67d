//! The letter class rendered for other regex hosts. JavaScript consumers
//! build `new RegExp('[^' + body + ']', 'gu')`; the `u` flag is required
//! for the `\u{...}` escapes and for astral ranges to match code points
//! instead of UTF-16 halves.

use crate::pattern::StripMode;
use crate::table::{LetterTable, letters};

/// Class body in JavaScript `u`-mode syntax, with `\d` in front when
/// digits are kept. Under the `u` flag `\d` is still ASCII-only.
pub fn js_class_body(table: &LetterTable, keep_digits: bool) -> String {
    let mut body = String::with_capacity(table.ranges().len() * 20 + 2);
    if keep_digits {
        body.push_str("\\d");
    }
    for r in table.ranges() {
        if r.low == r.high {
            body.push_str(&format!("\\u{{{:X}}}", r.low));
        } else {
            body.push_str(&format!("\\u{{{:X}}}-\\u{{{:X}}}", r.low, r.high));
        }
    }
    body
}

/// JavaScript pattern source for `mode` over the shared table, to be used
/// with the `gu` flags.
pub fn js_source(mode: StripMode) -> String {
    let strip_class = format!("[^{}]", js_class_body(letters(), mode.keeps_digits()));
    match mode {
        StripMode::StripNonLetters => strip_class,
        StripMode::StripNonLetterDigitAtEdges => format!("{0}+$|^{0}+", strip_class),
    }
}

/// The shared table as a JSON array of `[low, high]` pairs.
pub fn ranges_json() -> String {
    let pairs: Vec<(u32, u32)> = letters().ranges().iter().map(|r| (r.low, r.high)).collect();
    serde_json::to_string(&pairs).unwrap_or_else(|_| "[]".to_string())
}
