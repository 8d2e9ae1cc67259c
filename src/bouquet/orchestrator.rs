use crate::bouquet::budget::LeafBudget;
use crate::bouquet::config::BouquetConfig;
use crate::bouquet::flower::FlowerEntity;
use crate::draw::primitives::{draw_binding_bow, draw_ground_shadow};
use crate::draw::surface::Surface;
use crate::foundation::error::BouquetResult;
use crate::foundation::random::RandomSource;
use crate::layout::envelope::PlacementEnvelope;
use crate::layout::placement::place_bouquet;
use crate::layout::preset::{DeviceClass, LayoutPreset};
use crate::schedule::scheduler::{FrameHandle, FrameScheduler};
use crate::schedule::step::StepScheduler;

/// Result of delivering a frame callback to the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The handle was not the pending one; nothing was drawn.
    Stale,
    /// A frame was drawn and another one requested.
    Continue,
    /// A frame was drawn and every flower is done; no further frame was requested.
    Finished,
}

/// State of one bouquet generation.
#[derive(Clone, Debug)]
struct BouquetRun {
    t0_ms: f64,
    envelope: PlacementEnvelope,
    flowers: Vec<FlowerEntity>,
    budget: LeafBudget,
}

/// Owns the current bouquet run and its frame loop.
///
/// At most one frame request is outstanding at any time. Restarting cancels it, and callbacks
/// carrying any other handle are ignored, so two quick restarts never produce two interleaved
/// loops painting the same surface.
pub struct Orchestrator<S: FrameScheduler, R: RandomSource> {
    config: BouquetConfig,
    device_class: DeviceClass,
    preset_override: Option<LayoutPreset>,
    scheduler: S,
    rng: R,
    started: bool,
    pending: Option<FrameHandle>,
    run: Option<BouquetRun>,
}

impl<S: FrameScheduler, R: RandomSource> Orchestrator<S, R> {
    pub fn new(config: BouquetConfig, scheduler: S, rng: R) -> BouquetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            device_class: DeviceClass::default(),
            preset_override: None,
            scheduler,
            rng,
            started: false,
            pending: None,
            run: None,
        })
    }

    pub fn config(&self) -> &BouquetConfig {
        &self.config
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// Takes effect on the next start or relayout.
    pub fn set_device_class(&mut self, class: DeviceClass) {
        self.device_class = class;
    }

    /// Takes effect on the next start or relayout.
    pub fn set_preset_override(&mut self, preset: Option<LayoutPreset>) {
        self.preset_override = preset;
    }

    /// Preset used for the next layout: explicit override, then the configured one, then the
    /// device-class default.
    pub fn preset(&self) -> LayoutPreset {
        self.preset_override
            .or(self.config.preset)
            .unwrap_or_else(|| LayoutPreset::for_class(self.device_class))
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// First user gesture. Starts the bouquet once; later calls are no-ops returning `false`.
    pub fn begin<Sf: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut Sf,
    ) -> BouquetResult<bool> {
        if self.started {
            return Ok(false);
        }
        self.start_bouquet(now_ms, surface)?;
        Ok(true)
    }

    /// Unconditionally (re)start: new layout from the current surface size, fresh leaf budget,
    /// time origin at `now_ms`.
    #[tracing::instrument(skip(self, surface))]
    pub fn start_bouquet<Sf: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut Sf,
    ) -> BouquetResult<()> {
        self.cancel();
        self.started = true;

        let size = surface.size();
        let preset = self.preset();
        let envelope = preset.envelope(size);
        if !(size.width >= 1.0 && size.height >= 1.0) || envelope.is_degenerate() {
            tracing::warn!(
                width = size.width,
                height = size.height,
                "degenerate surface; bouquet layout collapses"
            );
        }

        let anchors = place_bouquet(preset.count, &envelope, &self.config.layers, &mut self.rng);
        let binding = envelope.binding();
        let flowers = anchors
            .iter()
            .enumerate()
            .map(|(i, anchor)| {
                FlowerEntity::spawn(i, anchor, binding, &self.config, &mut self.rng)
            })
            .collect::<BouquetResult<Vec<_>>>()?;

        tracing::debug!(flowers = flowers.len(), "bouquet started");
        self.run = Some(BouquetRun {
            t0_ms: now_ms,
            envelope,
            flowers,
            budget: LeafBudget::new(self.config.leaf_quota),
        });
        self.pending = Some(self.scheduler.request_frame());
        Ok(())
    }

    /// React to a surface size change: restart from zero if started, otherwise just clear.
    pub fn relayout<Sf: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut Sf,
    ) -> BouquetResult<()> {
        if self.started {
            self.start_bouquet(now_ms, surface)
        } else {
            surface.clear();
            Ok(())
        }
    }

    /// Stop the frame loop, keeping the current run for inspection.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Frame callback. Draws the whole bouquet at `now_ms` if `handle` is the pending request.
    pub fn on_frame<Sf: Surface + ?Sized>(
        &mut self,
        handle: FrameHandle,
        now_ms: f64,
        surface: &mut Sf,
    ) -> FrameOutcome {
        if self.pending != Some(handle) {
            tracing::warn!(?handle, pending = ?self.pending, "ignoring stale frame callback");
            return FrameOutcome::Stale;
        }
        self.pending = None;
        let Some(run) = self.run.as_mut() else {
            return FrameOutcome::Finished;
        };

        surface.clear();
        let binding = run.envelope.binding();
        draw_ground_shadow(surface, binding);
        draw_binding_bow(surface, binding);

        let elapsed = now_ms - run.t0_ms;
        let mut done = 0;
        for flower in &mut run.flowers {
            if flower.update(surface, elapsed, &mut run.budget) {
                done += 1;
            }
        }

        if done < run.flowers.len() {
            self.pending = Some(self.scheduler.request_frame());
            FrameOutcome::Continue
        } else {
            tracing::debug!(elapsed_ms = elapsed, "bouquet complete");
            FrameOutcome::Finished
        }
    }

    /// Whether a frame request is outstanding.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn flowers(&self) -> &[FlowerEntity] {
        self.run
            .as_ref()
            .map(|r| r.flowers.as_slice())
            .unwrap_or_default()
    }

    pub fn envelope(&self) -> Option<&PlacementEnvelope> {
        self.run.as_ref().map(|r| &r.envelope)
    }

    pub fn leaf_budget(&self) -> Option<LeafBudget> {
        self.run.as_ref().map(|r| r.budget)
    }

    pub fn run_origin_ms(&self) -> Option<f64> {
        self.run.as_ref().map(|r| r.t0_ms)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<R: RandomSource> Orchestrator<StepScheduler, R> {
    /// Advance the simulated display one refresh and deliver every due callback.
    ///
    /// Returns the outcome of the last delivered callback, or `None` if nothing was due.
    pub fn tick<Sf: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut Sf,
    ) -> Option<FrameOutcome> {
        let due = self.scheduler.tick();
        due.into_iter()
            .map(|handle| self.on_frame(handle, now_ms, surface))
            .last()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bouquet/orchestrator.rs"]
mod tests;
