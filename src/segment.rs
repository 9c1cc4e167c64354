//! Typed inline-content segments.

use crate::emote::EmoteToken;

/// One atomic unit of renderable inline content.
///
/// Ordering within a sequence is significant: segments reconstruct the
/// source string's reading order exactly. Adjacent text segments are not
/// merged by the segmenter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A literal run of characters, length >= 1.
    Text(String),
    /// A resolved emote reference.
    Emote(EmoteToken),
}

impl Segment {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        debug_assert!(!value.is_empty(), "text segment must be non-empty");
        Self::Text(value)
    }

    #[must_use]
    pub fn emote(token: EmoteToken) -> Self {
        Self::Emote(token)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Emote(_) => None,
        }
    }

    #[must_use]
    pub fn as_emote(&self) -> Option<&EmoteToken> {
        match self {
            Self::Text(_) => None,
            Self::Emote(token) => Some(token),
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub fn is_emote(&self) -> bool {
        matches!(self, Self::Emote(_))
    }

    /// The literal source form of this segment: a text run verbatim, an
    /// emote as its original marker key.
    #[must_use]
    pub fn source_text(&self) -> &str {
        match self {
            Self::Text(value) => value,
            Self::Emote(token) => &token.key,
        }
    }
}

/// Reassemble the source string from a segment sequence.
///
/// Text runs are concatenated verbatim; emote segments contribute their
/// original marker key. For sequences produced by
/// [`segment`](crate::segmenter::segment), the result equals the input
/// string byte for byte.
#[must_use]
pub fn reconstruct(segments: &[Segment]) -> String {
    let capacity = segments.iter().map(|s| s.source_text().len()).sum();
    let mut out = String::with_capacity(capacity);
    for segment in segments {
        out.push_str(segment.source_text());
    }
    out
}
