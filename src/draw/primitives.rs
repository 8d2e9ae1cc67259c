//! Stateless drawing primitives for one flower and the bouquet decoration.
//!
//! Every primitive leaves the surface transform as it found it.

use std::f64::consts::{PI, TAU};

use kurbo::{Ellipse, RoundedRect, Shape};

use crate::draw::surface::{RadialGradient, Surface};
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Circle, Point, Vec2};
use crate::foundation::math::clamp01;

/// Angular resolution of a fully open petal.
pub const PETAL_STEPS: usize = 100;

const PATH_TOLERANCE: f64 = 0.1;
const OUTLINE_WIDTH: f64 = 1.0;

pub const STEM_COLOR: Color = Color::rgb(0x0f, 0x3b, 0x12);
pub const LEAF_COLOR: Color = Color::rgb(0x2e, 0xcc, 0x71);

const LEAF_RADIUS: f64 = 14.0;
const LEAF_SCALE_Y: f64 = 2.0;
const LEAF_DRIFT: f64 = 18.0;
const LEAF_NEAR: f64 = 0.4;
const LEAF_FAR: f64 = 0.65;

const CENTER_RADIUS: f64 = 12.0;
const CENTER_FOCUS_OFFSET: f64 = 3.0;
const CENTER_FOCUS_RADIUS: f64 = 2.0;
const CENTER_LIGHT: Color = Color::rgb(0xff, 0xfb, 0xe9);
const CENTER_RIM: Color = Color::rgb(0xff, 0xe2, 0x7a);
const CENTER_OUTLINE: Color = Color::rgba(0xff, 0xe2, 0x7a, 217);

const SHADOW_COLOR: Color = Color::rgba(0x6f, 0x58, 0xff, 64);
const SHADOW_DROP: f64 = 8.0;
const SHADOW_RADII: (f64, f64) = (48.0, 12.0);

const BOW_FILL: Color = Color::rgba(0xa2, 0x76, 0xff, 230);
const BOW_OUTLINE: Color = Color::rgba(0x7a, 0x56, 0xd9, 230);
const BOW_LINE_WIDTH: f64 = 2.0;
const BOW_HALF_WIDTH: f64 = 36.0;
const BOW_HALF_HEIGHT: f64 = 8.0;
const BOW_CORNER: f64 = 8.0;

/// One petal (or leaf) lobe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalSpec {
    /// Pivot the lobe rotates around.
    pub at: Point,
    pub radius_x: f64,
    /// Local y-axis scale; values above 1 elongate the lobe.
    pub y_scale: f64,
    pub rotation: f64,
    pub color: Color,
    /// Angular reveal in `[0, 1]`.
    pub progress: f64,
    /// Shift along the rotated x-axis, away from the pivot.
    pub radial_offset: f64,
}

/// Lobe outline `r(θ) = sin(θ)·radius_x`, swept from 0 to `progress·2π` in local space.
///
/// At `progress == 0` the path degenerates to a single point.
pub fn petal_path(radius_x: f64, progress: f64) -> BezPath {
    let until = ((PETAL_STEPS as f64) * clamp01(progress)).floor() as usize;
    let step = TAU / PETAL_STEPS as f64;

    let mut path = BezPath::new();
    for i in 0..=until {
        let angle = (i as f64) * step;
        let r = angle.sin() * radius_x;
        let p = Point::new(angle.cos() * r, angle.sin() * r);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

pub fn draw_petal<S: Surface + ?Sized>(surface: &mut S, petal: &PetalSpec) {
    let path = petal_path(petal.radius_x, petal.progress);

    surface.save();
    surface.translate(petal.at.to_vec2());
    surface.rotate(petal.rotation);
    surface.translate(Vec2::new(petal.radial_offset, 0.0));
    surface.scale(1.0, petal.y_scale);
    surface.fill_path(&path, petal.color);
    surface.stroke_path(&path, petal.color, OUTLINE_WIDTH);
    surface.restore();
}

/// Straight stem from `from` toward `target`, revealed up to `progress`. Returns the tip.
pub fn draw_stem_segment<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    target: Point,
    progress: f64,
    thickness: f64,
    color: Color,
) -> Point {
    let tip = from.lerp(target, progress);

    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(tip);
    surface.stroke_path(&path, color, thickness);
    tip
}

/// Mirrored leaves at 40% and 65% along the stem from `base` to `tip`.
pub fn draw_leaf_pair<S: Surface + ?Sized>(surface: &mut S, base: Point, tip: Point, growth: f64) {
    let near = base.lerp(tip, LEAF_NEAR);
    let far = base.lerp(tip, LEAF_FAR);
    let drift = LEAF_DRIFT * growth;

    let leaf = |at: Point, rotation: f64| PetalSpec {
        at,
        radius_x: LEAF_RADIUS,
        y_scale: LEAF_SCALE_Y,
        rotation,
        color: LEAF_COLOR,
        progress: growth,
        radial_offset: 0.0,
    };
    draw_petal(surface, &leaf(Point::new(near.x + drift, near.y), PI * 1.05));
    draw_petal(surface, &leaf(Point::new(far.x - drift, far.y), PI * 0.05));
}

/// Flower core: warm rim with a light, slightly off-center focus.
pub fn draw_center<S: Surface + ?Sized>(surface: &mut S, at: Point) {
    let disc = Circle::new(at, CENTER_RADIUS);
    let gradient = RadialGradient {
        focus: at - Vec2::new(CENTER_FOCUS_OFFSET, CENTER_FOCUS_OFFSET),
        focus_radius: CENTER_FOCUS_RADIUS,
        inner: CENTER_LIGHT,
        outer: CENTER_RIM,
    };
    surface.fill_radial(disc, &gradient);
    surface.stroke_path(&disc.to_path(PATH_TOLERANCE), CENTER_OUTLINE, OUTLINE_WIDTH);
}

pub fn draw_ground_shadow<S: Surface + ?Sized>(surface: &mut S, binding: Point) {
    let shadow = Ellipse::new(
        Point::new(binding.x, binding.y + SHADOW_DROP),
        SHADOW_RADII,
        0.0,
    );
    surface.fill_path(&shadow.to_path(PATH_TOLERANCE), SHADOW_COLOR);
}

/// Ribbon band plus two looped wings at the binding point.
pub fn draw_binding_bow<S: Surface + ?Sized>(surface: &mut S, binding: Point) {
    let (x, y) = (binding.x, binding.y);

    let band = RoundedRect::new(
        x - BOW_HALF_WIDTH,
        y - BOW_HALF_HEIGHT,
        x + BOW_HALF_WIDTH,
        y + BOW_HALF_HEIGHT,
        BOW_CORNER,
    )
    .to_path(PATH_TOLERANCE);
    surface.fill_path(&band, BOW_FILL);
    surface.stroke_path(&band, BOW_OUTLINE, BOW_LINE_WIDTH);

    let mut wings = BezPath::new();
    for side in [-1.0, 1.0] {
        wings.move_to(binding);
        wings.quad_to(
            Point::new(x + side * 22.0, y - 20.0),
            Point::new(x + side * 46.0, y - 2.0),
        );
        wings.quad_to(Point::new(x + side * 22.0, y + 10.0), binding);
    }
    surface.fill_path(&wings, BOW_FILL);
    surface.stroke_path(&wings, BOW_OUTLINE, BOW_LINE_WIDTH);
}

#[cfg(test)]
#[path = "../../tests/unit/draw/primitives.rs"]
mod tests;
