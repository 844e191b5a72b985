//! Format stage: filter the source lines, then hand everything to the
//! host highlighter unchanged.

use std::borrow::Cow;

use crate::app::filter::filter_lines;
use crate::domain::model::{Attrs, Options, Rendered};

/// Everything the host highlighter receives for one fenced block.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRequest<'a> {
    /// Source text, already filtered when a range set was configured.
    pub src: &'a str,
    /// Language tag from the fence info string.
    pub language: &'a str,
    /// Style/class tag applied to the rendered block.
    pub class_name: &'a str,
    /// The full validated options bag.
    pub options: &'a Options,
    /// Arbitrary pass-through attributes.
    pub attrs: &'a Attrs,
}

/// Host-provided renderer consuming the (possibly filtered) source.
pub trait Highlight {
    fn highlight(&self, request: HighlightRequest<'_>) -> Rendered;
}

/// Apply the configured line filter and delegate to the highlighter.
///
/// Without a range set the source passes through byte-for-byte; the
/// highlighter's result is returned verbatim either way.
pub fn do_format(
    src: &str,
    language: &str,
    class_name: &str,
    options: &Options,
    attrs: &Attrs,
    highlighter: &dyn Highlight,
) -> Rendered {
    let src = match &options.show_lines {
        Some(ranges) => Cow::Owned(filter_lines(src, ranges)),
        None => Cow::Borrowed(src),
    };
    highlighter.highlight(HighlightRequest {
        src: &src,
        language,
        class_name,
        options,
        attrs,
    })
}
