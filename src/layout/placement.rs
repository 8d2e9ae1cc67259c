use crate::foundation::core::{Point, Vec2};
use crate::foundation::random::RandomSource;
use crate::layout::envelope::PlacementEnvelope;

/// Pairwise repulsion rounds per layer.
pub const RELAX_ROUNDS: usize = 10;

/// Offset kept for samples below the envelope center (flattens the lower half).
const LOWER_HALF_KEEP: f64 = 0.6;

/// One depth layer of the bouquet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerSpec {
    /// Share of the total flower count.
    pub fraction: f64,
    pub size_multiplier: f64,
    /// Distance relaxation tries to keep between anchors of this layer.
    pub min_separation: f64,
    pub depth_index: u32,
}

/// Back, mid and front layers.
pub const DEFAULT_LAYERS: [LayerSpec; 3] = [
    LayerSpec {
        fraction: 0.35,
        size_multiplier: 0.85,
        min_separation: 48.0,
        depth_index: 0,
    },
    LayerSpec {
        fraction: 0.40,
        size_multiplier: 1.00,
        min_separation: 54.0,
        depth_index: 1,
    },
    LayerSpec {
        fraction: 0.25,
        size_multiplier: 1.15,
        min_separation: 60.0,
        depth_index: 2,
    },
];

/// A placed flower head.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub depth_index: u32,
    pub size_multiplier: f64,
}

impl Anchor {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Integer per-layer counts summing exactly to `count`.
///
/// Each layer starts at `max(1, round(count * fraction))`. Any excess is taken from the first layer
/// (then the next one once it is empty); any shortfall goes to the last layer.
pub fn layer_counts(count: usize, layers: &[LayerSpec]) -> Vec<usize> {
    let mut counts: Vec<usize> = layers
        .iter()
        .map(|l| ((count as f64) * l.fraction).round().max(1.0) as usize)
        .collect();
    if counts.is_empty() {
        return counts;
    }

    let mut total: usize = counts.iter().sum();
    while total > count {
        let Some(slot) = counts.iter_mut().find(|c| **c > 0) else {
            break;
        };
        *slot -= 1;
        total -= 1;
    }
    if let Some(last) = counts.last_mut() {
        *last += count - total;
    }
    counts
}

/// Place `count` anchors inside `envelope`, layer by layer, in back-to-front, top-to-bottom order.
#[tracing::instrument(skip(envelope, layers, rng))]
pub fn place_bouquet<R: RandomSource + ?Sized>(
    count: usize,
    envelope: &PlacementEnvelope,
    layers: &[LayerSpec],
    rng: &mut R,
) -> Vec<Anchor> {
    let counts = layer_counts(count, layers);

    let mut anchors = Vec::with_capacity(count);
    for (layer, &n) in layers.iter().zip(&counts) {
        let mut points: Vec<Point> = (0..n).map(|_| sample_point(envelope, rng)).collect();
        relax(&mut points, layer.min_separation, envelope, RELAX_ROUNDS);
        anchors.extend(points.into_iter().map(|p| Anchor {
            x: p.x,
            y: p.y,
            depth_index: layer.depth_index,
            size_multiplier: layer.size_multiplier,
        }));
    }

    anchors.sort_by(|a, b| {
        a.depth_index
            .cmp(&b.depth_index)
            .then_with(|| a.y.total_cmp(&b.y))
    });
    tracing::debug!(layers = ?counts, placed = anchors.len(), "bouquet placed");
    anchors
}

/// Radially uniform disk sample scaled to the envelope, lower half flattened, then nudged toward
/// the binding point.
fn sample_point<R: RandomSource + ?Sized>(envelope: &PlacementEnvelope, rng: &mut R) -> Point {
    let a = rng.next_signed();
    let b = rng.next_signed();
    let r = rng.next_f64().sqrt();

    let half = envelope.half_extent();
    let x0 = envelope.center_x + a * r * half.x;
    let mut y0 = envelope.center_y + b * r * half.y;
    if y0 > envelope.center_y {
        y0 = envelope.center_y + (y0 - envelope.center_y) * LOWER_HALF_KEEP;
    }

    let pull = envelope.binding() - Point::new(x0, y0);
    let mag = match pull.hypot() {
        m if m > 0.0 => m,
        _ => 1.0,
    };
    let dir = pull / mag;
    Point::new(
        x0 + dir.x * half.x * envelope.gravity_tilt,
        y0 + dir.y * half.y * envelope.gravity_tilt,
    )
}

/// Push pairs closer than `min_separation` apart, clamping back into the envelope after each round.
pub fn relax(
    points: &mut [Point],
    min_separation: f64,
    envelope: &PlacementEnvelope,
    rounds: usize,
) {
    for _ in 0..rounds {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let delta = points[j] - points[i];
                let d = match delta.hypot() {
                    d if d > 0.0 => d,
                    _ => 1e-6,
                };
                if d < min_separation {
                    let push = (min_separation - d) * 0.5;
                    let axis: Vec2 = delta / d;
                    points[i] -= axis * push;
                    points[j] += axis * push;
                }
            }
        }
        for p in points.iter_mut() {
            *p = envelope.clamp(*p);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
