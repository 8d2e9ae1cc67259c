use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Circle, Point, Size, Vec2};

/// Two-stop radial gradient: `inner` at the focus disc, `outer` at the filled disc's rim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub focus: Point,
    pub focus_radius: f64,
    pub inner: Color,
    pub outer: Color,
}

/// 2D drawing surface supplied by the host.
///
/// Mirrors an immediate-mode canvas: paths are built with `kurbo`, painted with the current
/// transform, and the transform stack is managed with `save`/`restore`. Sizes are in device
/// pixels; the core never applies its own pixel-ratio scaling.
pub trait Surface {
    /// Drawable size in device pixels.
    fn size(&self) -> Size;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching `save` (no-op when the stack is empty).
    fn restore(&mut self);

    /// Post-multiply the current transform by `affine`.
    fn transform(&mut self, affine: Affine);

    fn fill_path(&mut self, path: &BezPath, color: Color);

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    fn fill_radial(&mut self, disc: Circle, gradient: &RadialGradient);

    fn translate(&mut self, offset: Vec2) {
        self.transform(Affine::translate(offset));
    }

    fn rotate(&mut self, radians: f64) {
        self.transform(Affine::rotate(radians));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform(Affine::scale_non_uniform(sx, sy));
    }
}

/// Canvas-style transform stack shared by the surface implementations.
#[derive(Clone, Debug, Default)]
pub(crate) struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    pub(crate) fn current(&self) -> Affine {
        self.current
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) {
        if let Some(prev) = self.saved.pop() {
            self.current = prev;
        }
    }

    pub(crate) fn concat(&mut self, affine: Affine) {
        self.current = self.current * affine;
    }

    pub(crate) fn reset(&mut self) {
        self.current = Affine::IDENTITY;
        self.saved.clear();
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}
