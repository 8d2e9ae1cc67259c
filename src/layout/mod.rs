pub(crate) mod envelope;
pub(crate) mod placement;
pub(crate) mod preset;
