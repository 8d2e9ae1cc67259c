//! Raster output for the drawing surface.

pub(crate) mod backend;
pub(crate) mod cpu;
