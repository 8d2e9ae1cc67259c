use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::animation::timeline::{FlowerTimeline, LEAF_THRESHOLD};
use crate::bouquet::budget::LeafBudget;
use crate::bouquet::config::BouquetConfig;
use crate::draw::primitives::{
    PetalSpec, STEM_COLOR, draw_center, draw_leaf_pair, draw_petal, draw_stem_segment,
};
use crate::draw::surface::Surface;
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::foundation::random::RandomSource;
use crate::layout::placement::Anchor;

/// Fixed parameters of one flower, drawn once at spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowerParams {
    /// Flower head position.
    pub head: Point,
    /// Where the stem converges.
    pub binding: Point,
    pub depth_index: u32,
    pub petal_count: usize,
    pub radius: f64,
    pub color: Color,
    pub stroke_width: f64,
    pub petal_offset: f64,
    pub petal_scale_y: f64,
    /// One rotation offset per petal, in radians.
    pub rotation_jitter: Vec<f64>,
    pub start_delay_ms: f64,
    pub petal_ease: Ease,
}

/// A flower that redraws itself from elapsed run time.
///
/// Everything except the leaf flag is immutable after construction, so a frame is a pure function
/// of `(params, elapsed, has_leaves)`.
#[derive(Clone, Debug)]
pub struct FlowerEntity {
    params: FlowerParams,
    timeline: FlowerTimeline,
    has_leaves: bool,
}

impl FlowerEntity {
    pub fn new(
        params: FlowerParams,
        stem_ms: f64,
        petal_ms: f64,
        settle_ms: f64,
    ) -> BouquetResult<Self> {
        if params.rotation_jitter.len() != params.petal_count {
            return Err(BouquetError::validation(format!(
                "flower has {} petals but {} rotation offsets",
                params.petal_count,
                params.rotation_jitter.len()
            )));
        }
        if !params.start_delay_ms.is_finite() {
            return Err(BouquetError::validation("flower start delay must be finite"));
        }
        let timeline = FlowerTimeline::new(stem_ms, petal_ms, settle_ms, params.petal_count)?;
        Ok(Self {
            params,
            timeline,
            has_leaves: false,
        })
    }

    /// Draw random parameters for the `index`-th flower of a bouquet.
    pub fn spawn<R: RandomSource + ?Sized>(
        index: usize,
        anchor: &Anchor,
        binding: Point,
        config: &BouquetConfig,
        rng: &mut R,
    ) -> BouquetResult<Self> {
        let style = &config.flower;
        let timing = &config.timing;
        if config.palette.is_empty() {
            return Err(BouquetError::validation("palette must not be empty"));
        }

        let petal_span = style.petal_count_max.saturating_sub(style.petal_count_min) + 1;
        let petal_count = style.petal_count_min + rng.next_index(petal_span);
        let radius = rng.next_span(style.base_radius, style.radius_jitter) * anchor.size_multiplier;
        let color = config.palette[rng.next_index(config.palette.len())];
        let start_delay_ms = rng
            .next_span((index as f64) * timing.stagger_ms, timing.stagger_jitter_ms)
            .floor();
        let stroke_width = rng.next_span(style.stroke_min, style.stroke_jitter);
        let rotation_jitter = (0..petal_count)
            .map(|_| (rng.next_f64() - 0.5) * style.jitter_rad)
            .collect();

        let params = FlowerParams {
            head: anchor.position(),
            binding,
            depth_index: anchor.depth_index,
            petal_count,
            radius,
            color,
            stroke_width,
            petal_offset: radius * style.petal_offset_mul,
            petal_scale_y: style.petal_scale_y,
            rotation_jitter,
            start_delay_ms,
            petal_ease: style.petal_ease,
        };
        Self::new(params, timing.stem_ms, timing.petal_ms, timing.settle_ms)
    }

    /// Paint the flower as it looks `elapsed_ms` after the run started. Returns `true` once the
    /// bloom (plus settle margin) is complete.
    pub fn update<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        elapsed_ms: f64,
        budget: &mut LeafBudget,
    ) -> bool {
        let local = self.local_ms(elapsed_ms);
        let p = &self.params;

        let growth = self.timeline.stem_growth(local);
        if growth > 0.0 {
            let tip = draw_stem_segment(
                surface,
                p.head,
                p.binding,
                growth,
                p.stroke_width,
                STEM_COLOR,
            );
            if growth > LEAF_THRESHOLD && !self.has_leaves && budget.try_claim() {
                self.has_leaves = true;
                tracing::debug!(remaining = budget.remaining(), "leaf pair claimed");
            }
            if self.has_leaves {
                draw_leaf_pair(surface, p.head, tip, FlowerTimeline::leaf_growth(growth));
            }
        }

        let step = TAU / p.petal_count as f64;
        for (i, jitter) in p.rotation_jitter.iter().enumerate() {
            let Some(progress) = self.timeline.petal_progress(i, local) else {
                continue;
            };
            draw_petal(
                surface,
                &PetalSpec {
                    at: p.head,
                    radius_x: p.radius,
                    y_scale: p.petal_scale_y,
                    rotation: step * i as f64 + jitter,
                    color: p.color,
                    progress: p.petal_ease.apply(progress),
                    radial_offset: p.petal_offset,
                },
            );
        }

        if local >= 0.0 {
            draw_center(surface, p.head);
        }
        self.timeline.is_done(local)
    }

    pub fn local_ms(&self, elapsed_ms: f64) -> f64 {
        elapsed_ms - self.params.start_delay_ms
    }

    pub fn is_done_at(&self, elapsed_ms: f64) -> bool {
        self.timeline.is_done(self.local_ms(elapsed_ms))
    }

    pub fn params(&self) -> &FlowerParams {
        &self.params
    }

    pub fn timeline(&self) -> &FlowerTimeline {
        &self.timeline
    }

    pub fn has_leaves(&self) -> bool {
        self.has_leaves
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bouquet/flower.rs"]
mod tests;
