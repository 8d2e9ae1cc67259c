//! Per-flower timing.
//!
//! A flower's visual state is a pure function of its local time (`elapsed - start_delay`):
//!
//! ```text
//! 0            stem_ms       stem_ms + petal_ms       ...        total_ms
//! |--- stem ---|-- petal 0 --|-- petal 1 --| ... |-- petal n-1 --|-- settle --|
//!        ^ leaves grow over the last 40% of the stem
//! ```

use crate::foundation::error::{BouquetError, BouquetResult};
use crate::foundation::math::clamp01;

/// Stem growth fraction past which a flower may claim a leaf pair.
pub const LEAF_THRESHOLD: f64 = 0.6;

/// Durations (milliseconds) for one flower's bloom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerTimeline {
    stem_ms: f64,
    petal_ms: f64,
    settle_ms: f64,
    petal_count: usize,
}

impl FlowerTimeline {
    pub fn new(
        stem_ms: f64,
        petal_ms: f64,
        settle_ms: f64,
        petal_count: usize,
    ) -> BouquetResult<Self> {
        if !(stem_ms.is_finite() && stem_ms > 0.0) {
            return Err(BouquetError::validation("stem duration must be > 0 ms"));
        }
        if !(petal_ms.is_finite() && petal_ms > 0.0) {
            return Err(BouquetError::validation("petal duration must be > 0 ms"));
        }
        if !(settle_ms.is_finite() && settle_ms >= 0.0) {
            return Err(BouquetError::validation("settle margin must be >= 0 ms"));
        }
        if petal_count == 0 {
            return Err(BouquetError::validation("flower needs at least one petal"));
        }
        Ok(Self {
            stem_ms,
            petal_ms,
            settle_ms,
            petal_count,
        })
    }

    pub fn stem_ms(&self) -> f64 {
        self.stem_ms
    }

    pub fn petal_ms(&self) -> f64 {
        self.petal_ms
    }

    pub fn settle_ms(&self) -> f64 {
        self.settle_ms
    }

    pub fn petal_count(&self) -> usize {
        self.petal_count
    }

    pub fn stem_growth(&self, local_ms: f64) -> f64 {
        clamp01(local_ms / self.stem_ms)
    }

    /// Leaf growth derived from stem growth; zero until the stem passes [`LEAF_THRESHOLD`].
    pub fn leaf_growth(stem_growth: f64) -> f64 {
        if stem_growth > LEAF_THRESHOLD {
            ((stem_growth - LEAF_THRESHOLD) / (1.0 - LEAF_THRESHOLD)).min(1.0)
        } else {
            0.0
        }
    }

    pub fn petal_start_ms(&self, petal: usize) -> f64 {
        self.stem_ms + (petal as f64) * self.petal_ms
    }

    /// Opening progress of `petal`, or `None` before that petal starts.
    pub fn petal_progress(&self, petal: usize, local_ms: f64) -> Option<f64> {
        let since = local_ms - self.petal_start_ms(petal);
        (since >= 0.0).then(|| clamp01(since / self.petal_ms))
    }

    /// Local time at which the flower reports done.
    pub fn total_ms(&self) -> f64 {
        self.petal_start_ms(self.petal_count) + self.settle_ms
    }

    pub fn is_done(&self, local_ms: f64) -> bool {
        local_ms >= self.total_ms()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
