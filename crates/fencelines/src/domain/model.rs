//! Option-bag types shared between the validation and format stages.
//!
//! The bags are caller-owned scratch state: the validation stage reads
//! the raw expression out of [`Inputs`] and writes the parsed set into
//! [`Options`], which the format stage later reads.

use std::collections::BTreeMap;

use crate::domain::ranges::LinesRanges;

/// Raw fence options as written by the author, keyed by option name.
pub type Inputs = BTreeMap<String, String>;

/// Free-form fence attributes passed through to the host unchanged.
pub type Attrs = BTreeMap<String, String>;

/// Validated options produced by the validation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Lines to keep when rendering the block. `None` disables filtering.
    pub show_lines: Option<LinesRanges>,
}

/// Opaque rendered output returned by the host highlighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered(pub String);
