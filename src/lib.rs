//! `emotext` - inline emote tokenization for chat and feed text
//!
//! Chat replies and feed descriptions carry inline emote markers
//! (`"look [doge]"`) next to a set of named emote tokens. This crate turns
//! that raw text into an ordered sequence of typed segments — literal runs
//! and resolved emote references — that any presentation layer can render,
//! and tracks which of the two mutually-exclusive input sources is
//! authoritative for the current render.
//!
//! The crate never renders text, fetches images, or measures clipping;
//! those belong to the host. It produces the primary segment sequence
//! eagerly on every source change and a secondary full ("overflow")
//! sequence on demand when the host reports that the primary view is
//! clipped.
//!
//! # Examples
//!
//! ```
//! use emotext::{reconstruct, ContentController, Descriptor, DynamicFeed};
//!
//! let mut controller = ContentController::new();
//! controller.set_dynamic(DynamicFeed::new(
//!     "nice [doge]",
//!     vec![Descriptor::emote("[doge]", "http://x/doge.png")],
//! ));
//!
//! let segments = controller.primary_segments();
//! assert_eq!(segments.len(), 2);
//! assert_eq!(reconstruct(segments), "nice [doge]");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow EmoteToken, ControllerOptions etc
#![allow(clippy::missing_const_for_fn)] // Many accessors could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod controller;
pub mod emote;
pub mod error;
pub mod event;
pub mod measure;
pub mod segment;
pub mod segmenter;
pub mod source;

// Re-export core types at crate root
pub use controller::{ContentController, ControllerOptions, ControllerState};
pub use emote::{Descriptor, EmoteLookup, EmoteToken};
pub use error::{Error, Result};
pub use event::{ControllerEvent, LogLevel, SourceKind};
pub use measure::{WidthMethod, display_width, grapheme_count};
pub use segment::{Segment, reconstruct};
pub use segmenter::{MarkerScanner, Piece, segment};
pub use source::{DynamicFeed, Reply, Source};
