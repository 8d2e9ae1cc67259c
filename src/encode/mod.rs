//! Frame sinks.
//!
//! Sinks consume rendered frames in order and are driven by
//! [`crate::RenderSession::render_all`].

/// `ffmpeg`-based MP4 output.
pub(crate) mod ffmpeg;
/// PNG image sequence output.
pub(crate) mod png;
/// Sink trait and the in-memory sink.
pub(crate) mod sink;
