//! Procedural flower bouquets that bloom over time.
//!
//! A bouquet is laid out once per start (depth layers of anchors relaxed inside an envelope),
//! then every display refresh redraws all flowers from the elapsed time: stems grow toward a
//! shared binding point, a few flowers sprout leaves, petals open one after another.
//!
//! The core only needs three host capabilities:
//!
//! - a [`Surface`] to paint on ([`CpuSurface`] rasterizes with `vello_cpu`, [`RecordingSurface`]
//!   records commands)
//! - a [`FrameScheduler`] for refresh callbacks ([`StepScheduler`] simulates one)
//! - a [`RandomSource`] ([`Rng64`])
//!
//! [`Orchestrator`] ties them together; [`RenderSession`] drives it offline into a [`FrameSink`].
#![forbid(unsafe_code)]

mod animation;
mod bouquet;
mod draw;
mod encode;
mod foundation;
mod layout;
mod render;
mod schedule;
mod session;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Circle, Fps, FrameIndex, Point, Rect, Size, Vec2,
};
pub use crate::foundation::error::{BouquetError, BouquetResult};
pub use crate::foundation::random::{RandomSource, Rng64};

pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{FlowerTimeline, LEAF_THRESHOLD};

pub use crate::draw::primitives::{
    LEAF_COLOR, PETAL_STEPS, PetalSpec, STEM_COLOR, draw_binding_bow, draw_center,
    draw_ground_shadow, draw_leaf_pair, draw_petal, draw_stem_segment, petal_path,
};
pub use crate::draw::record::{DrawCmd, RecordingSurface};
pub use crate::draw::surface::{RadialGradient, Surface};

pub use crate::layout::envelope::PlacementEnvelope;
pub use crate::layout::placement::{
    Anchor, DEFAULT_LAYERS, LayerSpec, RELAX_ROUNDS, layer_counts, place_bouquet, relax,
};
pub use crate::layout::preset::{DeviceClass, LayoutPreset, NARROW_BREAKPOINT_CSS_PX};

pub use crate::bouquet::budget::LeafBudget;
pub use crate::bouquet::config::{BouquetConfig, FlowerStyle, TimingConfig, default_palette};
pub use crate::bouquet::flower::{FlowerEntity, FlowerParams};
pub use crate::bouquet::orchestrator::{FrameOutcome, Orchestrator};

pub use crate::schedule::scheduler::{FrameHandle, FrameScheduler};
pub use crate::schedule::step::StepScheduler;

pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuSurface;

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{DEFAULT_VOLUME, FrameSink, InMemorySink, MusicInput, SinkConfig};

pub use crate::session::render_session::{
    DEFAULT_MAX_SECS, RenderSession, RenderSessionOpts, RenderStats, ResizeEvent,
};
