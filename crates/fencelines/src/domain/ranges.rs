//! Line range value types and their textual grammar.
//!
//! A range expression is a comma-separated list of items, each one of
//! `N`, `N:`, `:M`, or `N:M`, where `N` and `M` are 1-indexed line
//! numbers and both bounds are inclusive. A missing start means "from
//! the first line"; a missing end means "to the last line". Whitespace
//! around items and around the colon-delimited parts is ignored.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{ItemError, RangeError};

/// An inclusive, 1-indexed, possibly half-open interval of line numbers.
///
/// Immutable once constructed; the constructor rejects bounds below 1
/// and a start greater than the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinesRange {
    start: Option<usize>,
    end: Option<usize>,
}

impl LinesRange {
    /// Build a range from optional bounds.
    ///
    /// Bounds are taken as `i64` so out-of-domain values fail here with
    /// a stable message rather than at integer conversion.
    pub fn new(start: Option<i64>, end: Option<i64>) -> Result<Self, RangeError> {
        if start.is_none() && end.is_none() {
            return Err(RangeError::MissingBounds);
        }
        if start.is_some_and(|start| start < 1) {
            return Err(RangeError::StartTooSmall);
        }
        if end.is_some_and(|end| end < 1) {
            return Err(RangeError::EndTooSmall);
        }
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(RangeError::StartAfterEnd);
        }
        Ok(Self {
            start: start.map(|start| start as usize),
            end: end.map(|end| end as usize),
        })
    }

    /// First line of the range, `None` meaning the beginning of the text.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Last line of the range, `None` meaning the end of the text.
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Whether the 1-indexed `line` falls inside this range.
    pub fn contains(&self, line: usize) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= line && line <= end,
            (Some(start), None) => start <= line,
            (None, Some(end)) => line <= end,
            // Ruled out by the constructor.
            (None, None) => false,
        }
    }
}

impl FromStr for LinesRange {
    type Err = RangeError;

    /// Parse one range item: `N`, `N:`, `:M`, or `N:M`.
    ///
    /// The item is split on the first `:`; anything after it is one
    /// "end" token, so `1:2:3` fails as the non-numeric token `2:3`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.split_once(':') {
            None => {
                let token = text.trim();
                if token.is_empty() {
                    return Err(RangeError::EmptyStart);
                }
                let line = parse_bound(token)?;
                Self::new(Some(line), Some(line))
            }
            Some((start, end)) => {
                let start = start.trim();
                let end = end.trim();
                match (start.is_empty(), end.is_empty()) {
                    (true, true) => Err(RangeError::EmptyBounds),
                    (false, true) => Self::new(Some(parse_bound(start)?), None),
                    (true, false) => Self::new(None, Some(parse_bound(end)?)),
                    (false, false) => {
                        Self::new(Some(parse_bound(start)?), Some(parse_bound(end)?))
                    }
                }
            }
        }
    }
}

impl fmt::Display for LinesRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, "{start}:{end}"),
            (Some(start), None) => write!(f, "{start}:"),
            (None, Some(end)) => write!(f, ":{end}"),
            (None, None) => f.write_str(":"),
        }
    }
}

fn parse_bound(token: &str) -> Result<i64, RangeError> {
    token.parse().map_err(|source| RangeError::InvalidNumber {
        token: token.to_owned(),
        source,
    })
}

/// A non-empty union of [`LinesRange`] values.
///
/// Duplicates collapse; a line is contained when any member contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinesRanges {
    ranges: BTreeSet<LinesRange>,
}

impl LinesRanges {
    /// Build a set from the given ranges, rejecting an empty collection.
    pub fn new(ranges: impl IntoIterator<Item = LinesRange>) -> Result<Self, RangeError> {
        let ranges: BTreeSet<LinesRange> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(RangeError::EmptyRanges);
        }
        Ok(Self { ranges })
    }

    /// Whether the 1-indexed `line` falls inside any member range.
    pub fn contains(&self, line: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(line))
    }

    /// Iterate over the member ranges in their stable order.
    pub fn iter(&self) -> impl Iterator<Item = &LinesRange> {
        self.ranges.iter()
    }

    /// Parse a comma-separated range expression with partial-failure
    /// semantics.
    ///
    /// Every item is attempted; a malformed item is reported as an
    /// [`ItemError`] (1-indexed, quoting the raw item) and skipped. The
    /// set is `None` when no item survived, which callers treat as "no
    /// filtering requested" rather than a failure.
    pub fn parse(text: &str) -> (Option<Self>, Vec<ItemError>) {
        let mut ranges = BTreeSet::new();
        let mut errors = Vec::new();
        for (n, item) in text.split(',').enumerate() {
            match item.trim().parse::<LinesRange>() {
                Ok(range) => {
                    ranges.insert(range);
                }
                Err(source) => errors.push(ItemError {
                    index: n + 1,
                    item: item.to_owned(),
                    source,
                }),
            }
        }
        let parsed = (!ranges.is_empty()).then_some(Self { ranges });
        (parsed, errors)
    }
}

impl fmt::Display for LinesRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}
