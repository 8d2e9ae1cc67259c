//! Frame scheduling.
//!
//! The host's display-refresh primitive is modelled as [`scheduler::FrameScheduler`]: request a
//! callback for the next refresh, get back a handle that can be cancelled before it fires.

pub(crate) mod scheduler;
pub(crate) mod step;
