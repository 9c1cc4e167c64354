//! Layout hints for hosts: display width and grapheme counts.
//!
//! The clipping decision itself belongs to the presentation layer; these
//! helpers only measure.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::segment::Segment;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Display columns of a segment sequence.
///
/// Text runs are measured in terminal columns; every emote counts as
/// `emote_width` columns, since hosts render emotes as fixed-width inline
/// images.
#[must_use]
pub fn display_width(segments: &[Segment], emote_width: usize, method: WidthMethod) -> usize {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(value) => match method {
                WidthMethod::WcWidth => UnicodeWidthStr::width(value.as_str()),
                WidthMethod::Unicode => UnicodeWidthStr::width_cjk(value.as_str()),
            },
            Segment::Emote(_) => emote_width,
        })
        .sum()
}

/// Grapheme clusters across a segment sequence; each emote counts as one.
#[must_use]
pub fn grapheme_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(value) => value.graphemes(true).count(),
            Segment::Emote(_) => 1,
        })
        .sum()
}
