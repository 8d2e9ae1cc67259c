pub(crate) mod primitives;
pub(crate) mod record;
pub(crate) mod surface;
