use std::str::FromStr;

use crate::bouquet::config::BouquetConfig;
use crate::bouquet::orchestrator::{FrameOutcome, Orchestrator};
use crate::encode::sink::{FrameSink, MusicInput, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::foundation::random::Rng64;
use crate::layout::preset::{DeviceClass, LayoutPreset};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::schedule::step::StepScheduler;

/// Length of the longest clip [`RenderSession::render_all`] renders when no frame cap is given.
pub const DEFAULT_MAX_SECS: f64 = 60.0;

/// Scripted host resize, applied just before frame `at_frame` is drawn.
///
/// Parses from `FRAME:WIDTHxHEIGHT`, e.g. `90:720x1280`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    pub at_frame: u64,
    pub width: u32,
    pub height: u32,
}

impl FromStr for ResizeEvent {
    type Err = BouquetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BouquetError::validation(format!("resize '{s}' is not FRAME:WIDTHxHEIGHT"));
        let (frame, dims) = s.split_once(':').ok_or_else(bad)?;
        let (w, h) = dims.split_once(['x', 'X']).ok_or_else(bad)?;
        Ok(Self {
            at_frame: frame.trim().parse().map_err(|_| bad())?,
            width: w.trim().parse().map_err(|_| bad())?,
            height: h.trim().parse().map_err(|_| bad())?,
        })
    }
}

/// Options for a [`RenderSession`].
#[derive(Clone, Debug)]
pub struct RenderSessionOpts {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    /// Device pixels per CSS pixel; only used to pick the device class.
    pub device_pixel_ratio: f64,
    /// Forces a device class instead of classifying the viewport.
    pub device_class: Option<DeviceClass>,
    /// Replaces the device-class preset.
    pub preset: Option<LayoutPreset>,
    /// Seed for the random source; entropy-seeded when unset.
    pub seed: Option<u64>,
    /// Stop `render_all` after this many frames even if the bouquet is still animating.
    pub max_frames: Option<u64>,
    pub resizes: Vec<ResizeEvent>,
    pub music: Option<MusicInput>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: Fps { num: 60, den: 1 },
            device_pixel_ratio: 1.0,
            device_class: None,
            preset: None,
            seed: None,
            max_frames: None,
            resizes: Vec::new(),
            music: None,
        }
    }
}

/// Summary of a [`RenderSession::render_all`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Scripted resizes that triggered a relayout.
    pub relayouts: u32,
    /// Whether the bouquet finished before the frame cap.
    pub completed: bool,
}

/// Drives an [`Orchestrator`] over a [`CpuSurface`] on a simulated display at a fixed frame rate.
///
/// Frame `i` is presented at `i * 1000 / fps` ms; the bouquet starts at frame 0.
pub struct RenderSession {
    orchestrator: Orchestrator<StepScheduler, Rng64>,
    surface: CpuSurface,
    opts: RenderSessionOpts,
}

impl RenderSession {
    pub fn new(config: BouquetConfig, opts: RenderSessionOpts) -> BouquetResult<Self> {
        if opts.fps.num == 0 || opts.fps.den == 0 {
            return Err(BouquetError::validation("fps must have num>0 and den>0"));
        }
        if !opts.device_pixel_ratio.is_finite() || opts.device_pixel_ratio <= 0.0 {
            return Err(BouquetError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }

        let rng = opts.seed.map_or_else(Rng64::from_entropy, Rng64::new);
        let surface = CpuSurface::new(opts.width, opts.height)?.with_background(config.background);
        let mut orchestrator = Orchestrator::new(config, StepScheduler::new(), rng)?;
        orchestrator.set_preset_override(opts.preset);

        let mut session = Self {
            orchestrator,
            surface,
            opts,
        };
        session.classify();
        Ok(session)
    }

    pub fn orchestrator(&self) -> &Orchestrator<StepScheduler, Rng64> {
        &self.orchestrator
    }

    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    /// Deliver the user gesture at `now_ms`; later calls are no-ops.
    pub fn begin(&mut self, now_ms: f64) -> BouquetResult<bool> {
        self.orchestrator.begin(now_ms, &mut self.surface)
    }

    /// Apply a host resize at `now_ms` and relayout.
    pub fn resize(&mut self, width: u32, height: u32, now_ms: f64) -> BouquetResult<()> {
        self.surface.resize(width, height)?;
        self.opts.width = width;
        self.opts.height = height;
        self.classify();
        self.orchestrator.relayout(now_ms, &mut self.surface)
    }

    /// Run one display refresh at `now_ms` and read back the surface.
    ///
    /// Starts the bouquet at time 0 if it has not started yet. Once the bouquet is finished the
    /// last drawn frame is returned unchanged.
    pub fn render_frame_at(&mut self, now_ms: f64) -> BouquetResult<FrameRGBA> {
        self.begin(0.0)?;
        self.orchestrator.tick(now_ms, &mut self.surface);
        Ok(self.surface.snapshot())
    }

    /// Render from frame 0 until the bouquet completes (or the frame cap), pushing every frame
    /// into `sink`.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_all(&mut self, sink: &mut dyn FrameSink) -> BouquetResult<RenderStats> {
        if !self.opts.resizes.is_empty() && !sink.accepts_resize() {
            return Err(BouquetError::validation(
                "this sink needs a fixed frame size; drop the resize events",
            ));
        }
        let fps = self.opts.fps;
        let max_frames = self
            .opts
            .max_frames
            .unwrap_or_else(|| fps.secs_to_frames_floor(DEFAULT_MAX_SECS));
        if max_frames == 0 {
            return Err(BouquetError::validation("max_frames must be > 0"));
        }

        let (width, height) = self.surface.raster_size();
        sink.begin(SinkConfig {
            width,
            height,
            fps,
            music: self.opts.music.clone(),
        })?;

        let mut resizes = self.opts.resizes.clone();
        resizes.sort_by_key(|r| r.at_frame);
        let mut resizes = resizes.into_iter().peekable();

        let mut stats = RenderStats::default();
        self.begin(0.0)?;
        for idx in 0..max_frames {
            let now_ms = fps.frame_to_ms(FrameIndex(idx));
            while let Some(r) = resizes.next_if(|r| r.at_frame <= idx) {
                self.resize(r.width, r.height, now_ms)?;
                stats.relayouts += 1;
            }

            let outcome = self.orchestrator.tick(now_ms, &mut self.surface);
            sink.push_frame(FrameIndex(idx), &self.surface.snapshot())?;
            stats.frames += 1;

            if outcome == Some(FrameOutcome::Finished) && resizes.peek().is_none() {
                stats.completed = true;
                break;
            }
        }
        sink.end()?;

        tracing::info!(
            frames = stats.frames,
            relayouts = stats.relayouts,
            completed = stats.completed,
            "render finished"
        );
        Ok(stats)
    }

    fn classify(&mut self) {
        let dpr = self.opts.device_pixel_ratio;
        let class = self.opts.device_class.unwrap_or_else(|| {
            DeviceClass::classify(
                f64::from(self.opts.width) / dpr,
                f64::from(self.opts.height) / dpr,
            )
        });
        self.orchestrator.set_device_class(class);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
