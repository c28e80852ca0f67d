//! Build-time helpers for the letter table: parse `data/letters.tsv`,
//! validate it, and pack it into the compressed blob embedded by the
//! library. The `xtask` binary also regenerates the TSV from predicates.

pub mod predicate;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Highest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// zstd level used for the embedded table.
const ZSTD_LEVEL: i32 = 19;

/// One inclusive range as stored in the packed blob. The library decodes
/// the same postcard layout (two varint `u32`s per range) into its own
/// `CodePointRange`; keep the two field-for-field identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub low: u32,
    pub high: u32,
}

/// Parse `low<TAB>high[<TAB>name]` lines. `#` comments and blank lines are
/// skipped. The result is validated with [`validate`].
pub fn parse_ranges(tsv: &str) -> Result<Vec<RangeRecord>, String> {
    let mut ranges = Vec::new();

    for (idx, line) in tsv.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split('\t');
        let (Some(low), Some(high)) = (parts.next(), parts.next()) else {
            return Err(format!("line {}: expected `low<TAB>high`", idx + 1));
        };
        let low = parse_hex(low).ok_or_else(|| format!("line {}: bad low {:?}", idx + 1, low))?;
        let high = parse_hex(high).ok_or_else(|| format!("line {}: bad high {:?}", idx + 1, high))?;
        ranges.push(RangeRecord { low, high });
    }

    validate(&ranges)?;
    Ok(ranges)
}

// 4 to 6 hex digits, as in the UCD files
fn parse_hex(s: &str) -> Option<u32> {
    let s = s.trim();
    if !(4..=6).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

/// Reject inverted, out-of-range, surrogate, unsorted or overlapping ranges.
/// Same rules as `LetterTable::new` in the library, which re-checks the
/// decoded blob; a change here must be made there too.
pub fn validate(ranges: &[RangeRecord]) -> Result<(), String> {
    for r in ranges {
        if r.low > r.high {
            return Err(format!("inverted range {:04X}..{:04X}", r.low, r.high));
        }
        if r.high > MAX_CODE_POINT {
            return Err(format!("range {:04X}..{:04X} exceeds U+10FFFF", r.low, r.high));
        }
        if r.low <= 0xDFFF && r.high >= 0xD800 {
            return Err(format!("range {:04X}..{:04X} covers surrogates", r.low, r.high));
        }
    }
    for pair in ranges.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b.low <= a.high {
            return Err(format!(
                "range {:04X}..{:04X} overlaps or precedes {:04X}..{:04X}",
                b.low, b.high, a.low, a.high
            ));
        }
    }
    Ok(())
}

/// Binary search over validated ranges.
pub fn contains(ranges: &[RangeRecord], cp: u32) -> bool {
    let idx = ranges.partition_point(|r| r.high < cp);
    ranges.get(idx).is_some_and(|r| r.low <= cp)
}

/// Collect the name column of an existing TSV, keyed by range start.
pub fn parse_names(tsv: &str) -> HashMap<u32, String> {
    tsv.lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| {
            let mut parts = line.splitn(3, '\t');
            let low = parse_hex(parts.next()?)?;
            let _high = parts.next()?;
            let name = parts.next()?.trim();
            (!name.is_empty()).then(|| (low, name.to_string()))
        })
        .collect()
}

/// Render ranges back into the TSV layout. Each range keeps its name from
/// `names` when its start is unchanged, otherwise falls back to the escaped
/// first code point.
pub fn render_tsv(ranges: &[(u32, u32)], header: &str, names: &HashMap<u32, String>) -> String {
    let mut out = String::from(header);
    for &(low, high) in ranges {
        let name = match names.get(&low) {
            Some(name) => name.clone(),
            None => char::from_u32(low)
                .map(|ch| ch.escape_unicode().to_string())
                .unwrap_or_default(),
        };
        out.push_str(&format!("{:04X}\t{:04X}\t{}\n", low, high, name));
    }
    out
}

/// postcard-encode and zstd-compress the ranges.
pub fn pack_ranges(ranges: &[RangeRecord]) -> Result<Vec<u8>, String> {
    let raw = postcard::to_stdvec(ranges).map_err(|e| format!("postcard: {}", e))?;
    zstd::encode_all(raw.as_slice(), ZSTD_LEVEL).map_err(|e| format!("zstd: {}", e))
}

/// Inverse of [`pack_ranges`].
pub fn unpack_ranges(blob: &[u8]) -> Result<Vec<RangeRecord>, String> {
    let raw = zstd::decode_all(blob).map_err(|e| format!("zstd: {}", e))?;
    postcard::from_bytes(&raw).map_err(|e| format!("postcard: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ranges() {
        let tsv = "# comment\n\n0041\t005A\tLATIN CAPITAL LETTER A\n0061\t007A\n10000\t1000B\tLINEAR B\n";
        let ranges = parse_ranges(tsv).unwrap();
        assert_eq!(
            ranges,
            vec![
                RangeRecord { low: 0x41, high: 0x5A },
                RangeRecord { low: 0x61, high: 0x7A },
                RangeRecord { low: 0x10000, high: 0x1000B },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_bad_tables() {
        let cases: Vec<(&str, &str)> = vec![
            ("005A\t0041\n",             "inverted"),
            ("0041\t110000\n",           "exceeds"),
            ("D000\tE000\n",             "surrogates"),
            ("0041\t005A\n0050\t0060\n", "overlaps"),
            ("0061\t007A\n0041\t005A\n", "precedes"),
            ("0041\n",                   "expected"),
            ("zz\t005A\n",               "bad low"),
            ("0041\t1234567\n",          "bad high"),
            ("41\t5A\n",                 "bad low"),
            ("+041\t005A\n",             "bad low"),
            ("0041\t-05A\n",             "bad high"),
        ];
        for (tsv, needle) in cases {
            let err = parse_ranges(tsv).unwrap_err();
            assert!(err.contains(needle), "{:?}: got {:?}", tsv, err);
        }
    }

    #[test]
    fn test_pack_unpack() {
        let ranges = vec![
            RangeRecord { low: 0x41, high: 0x5A },
            RangeRecord { low: 0x4E00, high: 0x9FFF },
            RangeRecord { low: 0xE0100, high: 0xE01EF },
        ];
        let blob = pack_ranges(&ranges).unwrap();
        assert_eq!(unpack_ranges(&blob).unwrap(), ranges);
    }

    #[test]
    fn test_checked_in_table_is_valid() {
        let tsv = include_str!("../../data/letters.tsv");
        let ranges = parse_ranges(tsv).unwrap();
        assert!(ranges.len() > 500, "only {} ranges", ranges.len());
    }

    #[test]
    fn test_checked_in_table_matches_generator() {
        // fails after a toolchain Unicode bump until `gen-letters` is rerun
        let tsv = include_str!("../../data/letters.tsv");
        let checked_in: Vec<(u32, u32)> = parse_ranges(tsv)
            .unwrap()
            .iter()
            .map(|r| (r.low, r.high))
            .collect();
        let generated = predicate::collect_ranges(predicate::letter);
        assert_eq!(
            checked_in, generated,
            "data/letters.tsv is stale for Unicode {:?}",
            char::UNICODE_VERSION
        );

        let ranges = parse_ranges(tsv).unwrap();
        for cp in [0x31350, 0x2EBF0, 0x088F] {
            assert!(contains(&ranges, cp), "U+{:04X} missing", cp);
        }
    }

    #[test]
    fn test_contains() {
        let ranges = vec![
            RangeRecord { low: 0x41, high: 0x5A },
            RangeRecord { low: 0x61, high: 0x7A },
        ];
        let cases: Vec<(u32, bool)> = vec![
            (0x40, false),
            (0x41, true),
            (0x5A, true),
            (0x5B, false),
            (0x7A, true),
            (0x7B, false),
        ];
        for (cp, expected) in cases {
            assert_eq!(contains(&ranges, cp), expected, "U+{:04X}", cp);
        }
        assert!(!contains(&[], 0x41));
    }

    #[test]
    fn test_render_tsv() {
        let names = parse_names("# x\t y\n0041\t005A\tLATIN CAPITAL LETTER A\n0061\t007A\n");
        assert_eq!(names.len(), 1);

        let out = render_tsv(&[(0x41, 0x5A), (0x4E00, 0x9FFF)], "# header\n", &names);
        assert_eq!(out, "# header\n0041\t005A\tLATIN CAPITAL LETTER A\n4E00\t9FFF\t\\u{4e00}\n");
        let parsed = parse_ranges(&out).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
