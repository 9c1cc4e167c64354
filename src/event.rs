//! Controller event and log hook types.
//!
//! The controller is single-threaded by contract, so hooks live on the
//! controller instance rather than in a process-global registry. Hosts
//! subscribe with [`ContentController::set_event_hook`] and
//! [`ContentController::set_log_hook`].
//!
//! [`ContentController::set_event_hook`]: crate::ContentController::set_event_hook
//! [`ContentController::set_log_hook`]: crate::ContentController::set_log_hook

/// Log level for controller log hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Which source shape a transition activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Reply,
    Dynamic,
}

/// Notification emitted by the controller after a completed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A source was activated and the primary segments were recomputed.
    ///
    /// Also fires when the same source shape is re-assigned; the payload
    /// may have changed even though the discriminant did not.
    SourceChanged(SourceKind),
    /// Overflow segments were materialized for the active source.
    OverflowComputed,
    /// The controller returned to the empty state.
    Reset,
}

pub(crate) type EventHook = Box<dyn Fn(ControllerEvent)>;
pub(crate) type LogHook = Box<dyn Fn(LogLevel, &str)>;
