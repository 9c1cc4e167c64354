//! The two mutually-exclusive input sources and their lookup strategies.

use std::collections::HashMap;

use crate::emote::{Descriptor, EmoteLookup, EmoteToken};
use crate::event::SourceKind;

/// A reply comment body with its emote dictionary.
///
/// Duplicate tokens with the same key collapse to one entry (the last one
/// wins), matching the map semantics of the upstream payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reply {
    message: String,
    emotes: HashMap<String, EmoteToken>,
}

impl Reply {
    #[must_use]
    pub fn new(message: impl Into<String>, emotes: impl IntoIterator<Item = EmoteToken>) -> Self {
        let emotes = emotes
            .into_iter()
            .map(|token| (token.key.clone(), token))
            .collect();
        Self {
            message: message.into(),
            emotes,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn emotes(&self) -> &HashMap<String, EmoteToken> {
        &self.emotes
    }
}

impl EmoteLookup for Reply {
    /// Exact dictionary lookup over the reply's emote map.
    fn resolve(&self, candidate: &str) -> Option<EmoteToken> {
        self.emotes.get(candidate).cloned()
    }

    fn has_emotes(&self) -> bool {
        !self.emotes.is_empty()
    }
}

/// A dynamic-feed description with its ordered descriptor run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicFeed {
    text: String,
    descriptors: Vec<Descriptor>,
}

impl DynamicFeed {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        descriptors: impl IntoIterator<Item = Descriptor>,
    ) -> Self {
        Self {
            text: text.into(),
            descriptors: descriptors.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
}

impl EmoteLookup for DynamicFeed {
    /// Linear scan for the first emote descriptor whose text equals the
    /// candidate. Plain descriptors never match, whatever their text.
    fn resolve(&self, candidate: &str) -> Option<EmoteToken> {
        self.descriptors.iter().find_map(|descriptor| match descriptor {
            Descriptor::Emote { text, uri } if text == candidate => {
                Some(EmoteToken::new(text.clone(), uri.clone()))
            }
            _ => None,
        })
    }

    fn has_emotes(&self) -> bool {
        self.descriptors.iter().any(Descriptor::is_emote)
    }
}

/// The active text body: exactly one of the two source shapes.
///
/// The controller stores an `Option<Source>`, so the invalid "both set"
/// state is unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    Reply(Reply),
    Dynamic(DynamicFeed),
}

impl Source {
    /// The raw text body this source carries.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(reply) => reply.message(),
            Self::Dynamic(feed) => feed.text(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Reply(_) => SourceKind::Reply,
            Self::Dynamic(_) => SourceKind::Dynamic,
        }
    }
}

impl EmoteLookup for Source {
    fn resolve(&self, candidate: &str) -> Option<EmoteToken> {
        match self {
            Self::Reply(reply) => reply.resolve(candidate),
            Self::Dynamic(feed) => feed.resolve(candidate),
        }
    }

    fn has_emotes(&self) -> bool {
        match self {
            Self::Reply(reply) => reply.has_emotes(),
            Self::Dynamic(feed) => feed.has_emotes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_collapses_duplicate_keys() {
        let reply = Reply::new(
            "hi",
            vec![
                EmoteToken::new("[doge]", "http://x/first.png"),
                EmoteToken::new("[doge]", "http://x/second.png"),
            ],
        );
        assert_eq!(reply.emotes().len(), 1);
        assert_eq!(reply.resolve("[doge]").unwrap().uri, "http://x/second.png");
    }

    #[test]
    fn reply_without_emotes_reports_none() {
        let reply = Reply::new("hi", vec![]);
        assert!(!reply.has_emotes());
        assert!(reply.resolve("[doge]").is_none());
    }

    #[test]
    fn dynamic_resolve_takes_first_matching_emote() {
        let feed = DynamicFeed::new(
            "x",
            vec![
                Descriptor::emote("[a]", "http://x/1.png"),
                Descriptor::emote("[a]", "http://x/2.png"),
            ],
        );
        assert_eq!(feed.resolve("[a]").unwrap().uri, "http://x/1.png");
    }

    #[test]
    fn dynamic_plain_descriptor_never_matches() {
        let feed = DynamicFeed::new(
            "x",
            vec![
                Descriptor::plain("[a]"),
                Descriptor::emote("[a]", "http://x/real.png"),
            ],
        );
        // The plain entry with the same text is skipped.
        assert_eq!(feed.resolve("[a]").unwrap().uri, "http://x/real.png");
    }

    #[test]
    fn dynamic_has_emotes_ignores_plain_entries() {
        let plain_only = DynamicFeed::new("x", vec![Descriptor::plain("hello")]);
        assert!(!plain_only.has_emotes());

        let mixed = DynamicFeed::new(
            "x",
            vec![
                Descriptor::plain("hello"),
                Descriptor::emote("[a]", "http://x/a.png"),
            ],
        );
        assert!(mixed.has_emotes());
    }

    #[test]
    fn source_dispatches_to_active_shape() {
        let reply = Source::Reply(Reply::new(
            "reply text",
            vec![EmoteToken::new("[r]", "http://x/r.png")],
        ));
        assert_eq!(reply.text(), "reply text");
        assert_eq!(reply.kind(), SourceKind::Reply);
        assert!(reply.resolve("[r]").is_some());

        let feed = Source::Dynamic(DynamicFeed::new("feed text", vec![]));
        assert_eq!(feed.text(), "feed text");
        assert_eq!(feed.kind(), SourceKind::Dynamic);
        assert!(!feed.has_emotes());
    }
}
