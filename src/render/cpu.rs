use kurbo::{PathEl, Shape, Stroke, StrokeOpts};

use crate::draw::surface::{RadialGradient, Surface, TransformStack};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Circle, Rect, Size};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::foundation::math::lerp;
use crate::render::backend::FrameRGBA;

const TOLERANCE: f64 = 0.1;

/// Concentric discs used to approximate a two-stop radial gradient.
const RADIAL_STEPS: usize = 8;

/// [`Surface`] rasterized on the CPU with `vello_cpu`.
///
/// Draw calls accumulate in a render context; [`CpuSurface::snapshot`] rasterizes everything
/// since the last [`Surface::clear`] into a premultiplied frame.
pub struct CpuSurface {
    size: Size,
    raster_w: u16,
    raster_h: u16,
    ctx: vello_cpu::RenderContext,
    stack: TransformStack,
    background: Option<Color>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("size", &self.size)
            .field("raster", &(self.raster_w, self.raster_h))
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Create a surface reporting `width`×`height` device pixels.
    ///
    /// Zero sizes are accepted (layout collapses, the raster stays 1×1); sizes beyond `u16` are
    /// rejected.
    pub fn new(width: u32, height: u32) -> BouquetResult<Self> {
        let (raster_w, raster_h) = raster_dims(width, height)?;
        Ok(Self {
            size: Size::new(f64::from(width), f64::from(height)),
            raster_w,
            raster_h,
            ctx: vello_cpu::RenderContext::new(raster_w, raster_h),
            stack: TransformStack::default(),
            background: None,
        })
    }

    /// Fill painted on every clear.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self.clear();
        self
    }

    /// Host resize: reallocates the raster and drops everything drawn so far.
    pub fn resize(&mut self, width: u32, height: u32) -> BouquetResult<()> {
        let (raster_w, raster_h) = raster_dims(width, height)?;
        if (raster_w, raster_h) != (self.raster_w, self.raster_h) {
            self.ctx = vello_cpu::RenderContext::new(raster_w, raster_h);
            self.raster_w = raster_w;
            self.raster_h = raster_h;
        }
        self.size = Size::new(f64::from(width), f64::from(height));
        self.stack.reset();
        self.clear();
        Ok(())
    }

    pub fn raster_size(&self) -> (u32, u32) {
        (u32::from(self.raster_w), u32::from(self.raster_h))
    }

    /// Rasterize the current frame.
    pub fn snapshot(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.raster_w, self.raster_h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.raster_w),
            height: u32::from(self.raster_h),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn paint(&mut self, path: &BezPath, color: Color) {
        self.ctx.set_transform(affine_to_cpu(self.stack.current()));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.ctx.reset();
        if let Some(bg) = self.background {
            let full = Rect::new(0.0, 0.0, f64::from(self.raster_w), f64::from(self.raster_h));
            self.paint(&full.to_path(TOLERANCE), bg);
        }
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn transform(&mut self, affine: Affine) {
        self.stack.concat(affine);
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.paint(path, color);
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            return;
        }
        let outline = kurbo::stroke(
            path.iter(),
            &Stroke::new(width),
            &StrokeOpts::default(),
            TOLERANCE,
        );
        self.paint(&outline, color);
    }

    fn fill_radial(&mut self, disc: Circle, gradient: &RadialGradient) {
        for step in 0..RADIAL_STEPS {
            let t = step as f64 / (RADIAL_STEPS - 1) as f64;
            let ring = Circle::new(
                disc.center.lerp(gradient.focus, t),
                lerp(disc.radius, gradient.focus_radius, t),
            );
            self.paint(
                &ring.to_path(TOLERANCE),
                gradient.outer.lerp(gradient.inner, t),
            );
        }
    }
}

fn raster_dims(width: u32, height: u32) -> BouquetResult<(u16, u16)> {
    let w = u16::try_from(width.max(1))
        .map_err(|_| BouquetError::render(format!("surface width {width} exceeds {}", u16::MAX)))?;
    let h = u16::try_from(height.max(1)).map_err(|_| {
        BouquetError::render(format!("surface height {height} exceeds {}", u16::MAX))
    })?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
