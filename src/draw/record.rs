use crate::draw::surface::{RadialGradient, Surface, TransformStack};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Circle, Size};

/// One painted operation captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// The surface was cleared.
    Clear,
    /// A path fill under `transform`.
    Fill {
        path: BezPath,
        color: Color,
        transform: Affine,
    },
    /// A path stroke under `transform`.
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
        transform: Affine,
    },
    /// A radial-gradient disc under `transform`.
    Radial {
        disc: Circle,
        gradient: RadialGradient,
        transform: Affine,
    },
}

/// Surface that records draw commands instead of rasterizing them.
///
/// Lets callers observe exactly what a frame paints, and how many clears happen per tick.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    stack: TransformStack,
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            stack: TransformStack::default(),
            commands: Vec::new(),
        }
    }

    /// Simulate a host resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Clear))
            .count()
    }

    /// Painted commands, i.e. everything except clears.
    pub fn paint_count(&self) -> usize {
        self.commands.len() - self.clear_count()
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.depth()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
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
        self.commands.push(DrawCmd::Fill {
            path: path.clone(),
            color,
            transform: self.stack.current(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.commands.push(DrawCmd::Stroke {
            path: path.clone(),
            color,
            width,
            transform: self.stack.current(),
        });
    }

    fn fill_radial(&mut self, disc: Circle, gradient: &RadialGradient) {
        self.commands.push(DrawCmd::Radial {
            disc,
            gradient: *gradient,
            transform: self.stack.current(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/record.rs"]
mod tests;
