use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

const SURROGATES: CodePointRange = CodePointRange { low: 0xD800, high: 0xDFFF };

// postcard + zstd, written by build.rs from data/letters.tsv
const PACKED: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/letters.bin"));

static LETTERS: Lazy<LetterTable> = Lazy::new(|| {
    // build.rs already validated the same data; a failure here is a bug
    LetterTable::from_packed(PACKED)
        .unwrap_or_else(|e| panic!("embedded letter table rejected: {}", e))
});

/// Inclusive range of code points, `low..=high`. Decoded from the same
/// postcard layout as `xtask::RangeRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodePointRange {
    pub low: u32,
    pub high: u32,
}

impl CodePointRange {
    pub const fn new(low: u32, high: u32) -> Self {
        CodePointRange { low, high }
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.low <= cp && cp <= self.high
    }

    /// Number of code points covered.
    pub fn count(&self) -> u32 {
        self.high - self.low + 1
    }

    fn intersects(&self, other: &CodePointRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}..U+{:04X}", self.low, self.high)
    }
}

/// Why a set of ranges was rejected as a letter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// `low > high`
    Inverted(CodePointRange),
    /// `high` is past U+10FFFF
    OutOfRange(CodePointRange),
    /// Covers part of U+D800..U+DFFF, which are not scalar values.
    Surrogate(CodePointRange),
    /// Second range starts at or before the end of the first.
    Overlap(CodePointRange, CodePointRange),
    /// The embedded blob could not be decompressed or deserialized.
    Decode(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Inverted(r) => write!(f, "inverted range {}", r),
            TableError::OutOfRange(r) => write!(f, "range {} exceeds U+10FFFF", r),
            TableError::Surrogate(r) => write!(f, "range {} covers surrogates", r),
            TableError::Overlap(a, b) => write!(f, "range {} overlaps or precedes {}", b, a),
            TableError::Decode(msg) => write!(f, "cannot decode letter table: {}", msg),
        }
    }
}

impl std::error::Error for TableError {}

/// Sorted, pairwise disjoint ranges of letter code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTable {
    ranges: Vec<CodePointRange>,
}

impl LetterTable {
    /// Validate and wrap `ranges`. They must already be sorted by `low`;
    /// adjacent ranges are allowed, overlapping ones are not. The build
    /// applies the same rules through `xtask::validate`.
    pub fn new(ranges: Vec<CodePointRange>) -> Result<Self, TableError> {
        for r in &ranges {
            if r.low > r.high {
                return Err(TableError::Inverted(*r));
            }
            if r.high > MAX_CODE_POINT {
                return Err(TableError::OutOfRange(*r));
            }
            if r.intersects(&SURROGATES) {
                return Err(TableError::Surrogate(*r));
            }
        }
        for pair in ranges.windows(2) {
            if pair[1].low <= pair[0].high {
                return Err(TableError::Overlap(pair[0], pair[1]));
            }
        }
        Ok(LetterTable { ranges })
    }

    /// Decode the build-time blob: zstd over a postcard `Vec<CodePointRange>`.
    pub fn from_packed(blob: &[u8]) -> Result<Self, TableError> {
        let raw = zstd::decode_all(blob).map_err(|e| TableError::Decode(e.to_string()))?;
        let ranges: Vec<CodePointRange> =
            postcard::from_bytes(&raw).map_err(|e| TableError::Decode(e.to_string()))?;
        let table = LetterTable::new(ranges)?;
        debug!(
            ranges = table.ranges.len(),
            packed_bytes = blob.len(),
            "letter table loaded"
        );
        Ok(table)
    }

    /// True iff `cp` falls inside one of the ranges. Anything that is not a
    /// scalar value is simply not a letter.
    pub fn contains(&self, cp: u32) -> bool {
        if cp > MAX_CODE_POINT {
            return false;
        }
        self.ranges
            .binary_search_by(|r| {
                if r.high < cp {
                    Ordering::Less
                } else if r.low > cp {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Total number of code points in the table.
    pub fn code_points(&self) -> u64 {
        self.ranges.iter().map(|r| r.count() as u64).sum()
    }
}

/// The process-wide letter table, decoded on first use.
pub fn letters() -> &'static LetterTable {
    &*LETTERS
}

/// Membership test against the shared table.
pub fn is_letter(cp: u32) -> bool {
    LETTERS.contains(cp)
}

pub fn is_letter_char(ch: char) -> bool {
    is_letter(ch as u32)
}
