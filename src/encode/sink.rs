use std::path::PathBuf;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::render::backend::FrameRGBA;

/// Default music volume, matching the page's slider default.
pub const DEFAULT_VOLUME: f64 = 0.7;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    /// Optional soundtrack for sinks that can mux audio.
    pub music: Option<MusicInput>,
}

/// Background music for the rendered clip.
#[derive(Debug, Clone)]
pub struct MusicInput {
    /// Any audio file `ffmpeg` can decode.
    pub path: PathBuf,
    volume: f64,
}

impl MusicInput {
    /// Volume is clamped to `[0, 1]`; non-finite values fall back to [`DEFAULT_VOLUME`].
    pub fn new(path: impl Into<PathBuf>, volume: f64) -> Self {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        Self {
            path: path.into(),
            volume,
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing frame indices between `begin` and `end`.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> BouquetResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BouquetResult<()>;
    fn end(&mut self) -> BouquetResult<()>;

    /// Whether frames may change size mid-stream (host resizes).
    fn accepts_resize(&self) -> bool {
        false
    }
}

/// Sink that keeps every frame, for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BouquetResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BouquetResult<()> {
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> BouquetResult<()> {
        self.ended = true;
        Ok(())
    }

    fn accepts_resize(&self) -> bool {
        true
    }
}

pub(crate) fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> BouquetResult<()> {
    match last {
        Some(last) if idx <= last => Err(BouquetError::encode(format!(
            "out-of-order frame index {} after {}",
            idx.0, last.0
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
