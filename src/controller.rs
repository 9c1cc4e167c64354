//! Source-tracking state machine and render-state cache.
//!
//! [`ContentController`] owns the active input source, recomputes the
//! primary segment sequence on every source change, and materializes the
//! overflow sequence lazily, once per activation, when the host reports
//! that the primary view is clipped.
//!
//! # Examples
//!
//! ```
//! use emotext::{ContentController, ControllerState, EmoteToken, Reply};
//!
//! let mut controller = ContentController::new();
//! assert_eq!(controller.state(), ControllerState::Empty);
//!
//! let reply = Reply::new(
//!     "Hello [smile] world",
//!     vec![EmoteToken::new("[smile]", "http://x/s.png")],
//! );
//! controller.set_reply(reply);
//!
//! assert_eq!(controller.state(), ControllerState::ReplyActive);
//! assert_eq!(controller.primary_segments().len(), 3);
//!
//! // The host detected clipping; populate the full secondary view.
//! let overflow = controller.request_overflow().unwrap();
//! assert_eq!(overflow.len(), 3);
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::event::{ControllerEvent, EventHook, LogHook, LogLevel};
use crate::segment::Segment;
use crate::segmenter::segment;
use crate::source::{DynamicFeed, Reply, Source};

/// Controller configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Line budget the host should apply to the primary view before
    /// clipping kicks in. Must be at least 1.
    pub max_lines: u32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self { max_lines: 4 }
    }
}

/// Observable state of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Empty,
    ReplyActive,
    DynamicActive,
}

/// State holder for the two alternate input sources and their rendered
/// segment sequences.
///
/// Single-threaded by contract: every operation runs to completion on the
/// calling thread, and callers serialize access externally if shared.
#[derive(Default)]
pub struct ContentController {
    source: Option<Source>,
    primary: Vec<Segment>,
    overflow: Vec<Segment>,
    overflow_computed: bool,
    options: ControllerOptions,
    event_hook: Option<EventHook>,
    log_hook: Option<LogHook>,
}

impl ContentController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxLines`] when `options.max_lines` is 0.
    pub fn with_options(options: ControllerOptions) -> Result<Self> {
        if options.max_lines == 0 {
            return Err(Error::InvalidMaxLines { max_lines: 0 });
        }
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    /// Subscribe to transition notifications.
    ///
    /// The hook fires synchronously after every completed transition,
    /// replacing any previously installed hook.
    pub fn set_event_hook<F>(&mut self, hook: F)
    where
        F: Fn(ControllerEvent) + 'static,
    {
        self.event_hook = Some(Box::new(hook));
    }

    /// Subscribe to controller log output.
    pub fn set_log_hook<F>(&mut self, hook: F)
    where
        F: Fn(LogLevel, &str) + 'static,
    {
        self.log_hook = Some(Box::new(hook));
    }

    /// Activate a reply source, clearing any dynamic source.
    ///
    /// Always re-runs the full transition, even when a reply is already
    /// active: the payload may have changed.
    pub fn set_reply(&mut self, reply: Reply) {
        self.activate(Source::Reply(reply));
    }

    /// Activate a dynamic-feed source, clearing any reply source.
    pub fn set_dynamic(&mut self, feed: DynamicFeed) {
        self.activate(Source::Dynamic(feed));
    }

    /// Clear both sources and the primary segments, returning to
    /// [`ControllerState::Empty`].
    ///
    /// Any previously computed overflow segments go stale but are left in
    /// place; they are unreachable through a fresh render, and the next
    /// activation clears them.
    pub fn reset(&mut self) {
        self.source = None;
        self.primary.clear();
        self.emit(ControllerEvent::Reset);
    }

    /// Materialize the overflow segment sequence for the active source.
    ///
    /// The first call per activation re-runs the segmenter over the live
    /// source — an independent computation, not a copy of the primary
    /// sequence. Subsequent calls return the cached sequence unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveSource`] in the empty state. Nothing is
    /// computed; ignoring the error is the documented no-op.
    pub fn request_overflow(&mut self) -> Result<&[Segment]> {
        let Some(source) = &self.source else {
            self.log(LogLevel::Warn, "overflow requested with no active source");
            return Err(Error::NoActiveSource);
        };
        if !self.overflow_computed {
            self.overflow = segment(source.text(), source);
            self.overflow_computed = true;
            self.emit(ControllerEvent::OverflowComputed);
        }
        Ok(&self.overflow)
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        match &self.source {
            None => ControllerState::Empty,
            Some(Source::Reply(_)) => ControllerState::ReplyActive,
            Some(Source::Dynamic(_)) => ControllerState::DynamicActive,
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// The active reply source, if one is active.
    #[must_use]
    pub fn reply(&self) -> Option<&Reply> {
        match &self.source {
            Some(Source::Reply(reply)) => Some(reply),
            _ => None,
        }
    }

    /// The active dynamic-feed source, if one is active.
    #[must_use]
    pub fn dynamic(&self) -> Option<&DynamicFeed> {
        match &self.source {
            Some(Source::Dynamic(feed)) => Some(feed),
            _ => None,
        }
    }

    /// Segments for the primary (possibly clipped) view.
    #[must_use]
    pub fn primary_segments(&self) -> &[Segment] {
        &self.primary
    }

    /// Segments for the overflow view; empty until
    /// [`request_overflow`](Self::request_overflow) succeeds.
    #[must_use]
    pub fn overflow_segments(&self) -> &[Segment] {
        &self.overflow
    }

    #[must_use]
    pub fn overflow_computed(&self) -> bool {
        self.overflow_computed
    }

    #[must_use]
    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    fn activate(&mut self, source: Source) {
        let kind = source.kind();
        self.primary = segment(source.text(), &source);
        self.source = Some(source);
        self.overflow.clear();
        self.overflow_computed = false;
        self.log(
            LogLevel::Debug,
            &format!(
                "{kind:?} source activated ({} primary segments)",
                self.primary.len()
            ),
        );
        self.emit(ControllerEvent::SourceChanged(kind));
    }

    fn emit(&self, event: ControllerEvent) {
        if let Some(hook) = &self.event_hook {
            hook(event);
        }
    }

    fn log(&self, level: LogLevel, message: &str) {
        if let Some(hook) = &self.log_hook {
            hook(level, message);
        }
    }
}

impl fmt::Debug for ContentController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentController")
            .field("state", &self.state())
            .field("primary", &self.primary)
            .field("overflow", &self.overflow)
            .field("overflow_computed", &self.overflow_computed)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
