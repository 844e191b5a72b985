//! Line filtering for fenced code listings.

use crate::domain::ranges::LinesRanges;

/// Keep only the lines whose 1-indexed number falls inside `ranges`.
///
/// Each line keeps its original terminator (`\r\n` stays intact inside
/// the slice), so concatenating the kept lines reproduces the original
/// formatting exactly, including a missing terminator on the last line.
/// Lines are never re-ordered or duplicated: each line number is tested
/// once against the whole union.
pub fn filter_lines(src: &str, ranges: &LinesRanges) -> String {
    let mut kept = String::with_capacity(src.len());
    for (n, line) in src.split_inclusive('\n').enumerate() {
        if ranges.contains(n + 1) {
            kept.push_str(line);
        }
    }
    kept
}
