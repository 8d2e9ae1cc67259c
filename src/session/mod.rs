//! Offline driver: runs a bouquet against a CPU surface at a fixed frame rate.

pub(crate) mod render_session;
