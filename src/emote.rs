//! Emote tokens, feed descriptors, and the lookup seam.

use std::collections::HashMap;

/// A named emote: the bracketed marker text and its resolved image location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmoteToken {
    /// Marker text as it appears inline, brackets included (e.g. `"[doge]"`).
    pub key: String,
    /// Image location. Never fetched or validated here.
    pub uri: String,
}

impl EmoteToken {
    #[must_use]
    pub fn new(key: impl Into<String>, uri: impl Into<String>) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "emote key must be non-empty");
        Self {
            key,
            uri: uri.into(),
        }
    }
}

/// One entry of a dynamic-feed description.
///
/// The feed declares its description as an ordered run of typed entries;
/// only the emote entries participate in marker resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Descriptor {
    /// A literal run of the description text.
    Plain { text: String },
    /// An emote marker with its image location.
    Emote { text: String, uri: String },
}

impl Descriptor {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    #[must_use]
    pub fn emote(text: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::Emote {
            text: text.into(),
            uri: uri.into(),
        }
    }

    /// The declared text of this entry, whatever its type.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::Emote { text, .. } => text,
        }
    }

    #[must_use]
    pub fn is_emote(&self) -> bool {
        matches!(self, Self::Emote { .. })
    }
}

/// Resolution seam between the segmenter and whatever owns the emotes.
///
/// The two source shapes keep their distinct strategies behind this one
/// interface: replies resolve by exact map key, dynamic feeds by a linear
/// scan over their descriptors. They are not unified into one structure.
pub trait EmoteLookup {
    /// Resolve a scanned marker piece (brackets included) to its token.
    fn resolve(&self, candidate: &str) -> Option<EmoteToken>;

    /// Whether this lookup holds any emote entries at all.
    ///
    /// When this is false the segmenter skips marker scanning entirely
    /// and emits the input as a single literal segment.
    fn has_emotes(&self) -> bool;
}

impl EmoteLookup for HashMap<String, EmoteToken> {
    fn resolve(&self, candidate: &str) -> Option<EmoteToken> {
        self.get(candidate).cloned()
    }

    fn has_emotes(&self) -> bool {
        !self.is_empty()
    }
}
