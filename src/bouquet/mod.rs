//! The bouquet itself: configuration, per-flower animation and the run orchestrator.

pub(crate) mod budget;
pub(crate) mod config;
pub(crate) mod flower;
pub(crate) mod orchestrator;
