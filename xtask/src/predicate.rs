use unicode_normalization::char::is_combining_mark;

/// A test over a single scalar value, used to decide which code points
/// end up in the letter table.
pub type Predicate = fn(char) -> bool;

/// Alphabetic property: letters, letter numbers and `Other_Alphabetic`.
pub fn alpha(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Combining marks (Mn, Mc, Me) that are not already alphabetic.
/// Viramas and most tone marks land here, e.g. Tamil ் (U+0BCD).
pub fn marks(ch: char) -> bool {
    is_combining_mark(ch) && !ch.is_alphabetic()
}

/// ZWNJ and ZWJ: format characters that sit inside words in Persian and
/// Indic orthographies.
pub fn joiners(ch: char) -> bool {
    matches!(ch, '\u{200C}' | '\u{200D}')
}

pub fn digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// The letter class: anything that should survive stripping.
pub fn letter(ch: char) -> bool {
    alpha(ch) || marks(ch) || joiners(ch)
}

/// True if any of `preds` accepts `ch`.
pub fn any_of(preds: &[Predicate], ch: char) -> bool {
    preds.iter().any(|p| p(ch))
}

/// True if `pred` rejects `ch`.
pub fn not(pred: Predicate, ch: char) -> bool {
    !pred(ch)
}

/// Coalesce every scalar value accepted by `pred` into maximal inclusive
/// `(low, high)` runs, in ascending order. Surrogates are skipped, so a run
/// never spans U+D800..U+DFFF.
pub fn collect_ranges(pred: impl Fn(char) -> bool) -> Vec<(u32, u32)> {
    let mut ranges: Vec<(u32, u32)> = Vec::new();
    let mut open: Option<(u32, u32)> = None;

    for cp in 0..=0x10FFFF_u32 {
        let hit = char::from_u32(cp).is_some_and(&pred);
        match (hit, open) {
            (true, Some((low, _))) => open = Some((low, cp)),
            (true, None) => open = Some((cp, cp)),
            (false, Some(run)) => {
                ranges.push(run);
                open = None;
            }
            (false, None) => {}
        }
    }
    if let Some(run) = open {
        ranges.push(run);
    }
    ranges
}
