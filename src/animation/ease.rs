//! Opening curves for petal progress.

/// Shape of a petal's opening over its own time slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant sweep speed.
    #[default]
    Linear,
    /// Slow start, quadratic.
    EaseIn,
    /// Fast start that settles into the closed lobe, cubic.
    EaseOut,
    /// Smoothstep `t²(3 − 2t)`.
    Smooth,
}

impl Ease {
    /// Map progress in `[0, 1]` (clamped) onto the curve; endpoints are fixed.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
