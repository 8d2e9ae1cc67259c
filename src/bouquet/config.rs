use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::color::Color;
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::layout::placement::{DEFAULT_LAYERS, LayerSpec};
use crate::layout::preset::LayoutPreset;

const LAYER_FRACTION_EPS: f64 = 1e-6;

/// Bloom timing, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub stem_ms: f64,
    pub petal_ms: f64,
    /// Extra time after the last petal before a flower reports done.
    pub settle_ms: f64,
    /// Start delay added per flower index.
    pub stagger_ms: f64,
    /// Upper bound of the random part of each start delay.
    pub stagger_jitter_ms: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stem_ms: 1200.0,
            petal_ms: 700.0,
            settle_ms: 200.0,
            stagger_ms: 130.0,
            stagger_jitter_ms: 100.0,
        }
    }
}

/// Ranges the per-flower random parameters are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowerStyle {
    pub petal_count_min: usize,
    pub petal_count_max: usize,
    pub base_radius: f64,
    pub radius_jitter: f64,
    pub stroke_min: f64,
    pub stroke_jitter: f64,
    /// Petal pivot offset as a multiple of the radius.
    pub petal_offset_mul: f64,
    pub petal_scale_y: f64,
    /// Full width of the per-petal rotation jitter, in radians.
    pub jitter_rad: f64,
    pub petal_ease: Ease,
}

impl Default for FlowerStyle {
    fn default() -> Self {
        Self {
            petal_count_min: 6,
            petal_count_max: 10,
            base_radius: 16.0,
            radius_jitter: 10.0,
            stroke_min: 2.0,
            stroke_jitter: 2.0,
            petal_offset_mul: 0.58,
            petal_scale_y: 1.9,
            jitter_rad: 0.25,
            petal_ease: Ease::Linear,
        }
    }
}

pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0xff, 0xdb, 0x27),
        Color::rgb(0xff, 0xd0, 0x00),
        Color::rgb(0xff, 0xe2, 0x7a),
        Color::rgb(0xf7, 0xc9, 0x48),
        Color::rgb(0xf4, 0xd3, 0x5e),
    ]
}

fn default_leaf_quota() -> u32 {
    4
}

fn default_layers() -> Vec<LayerSpec> {
    DEFAULT_LAYERS.to_vec()
}

/// Everything that shapes a bouquet run.
///
/// Every field has a default, so `{}` is a valid configuration file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BouquetConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub flower: FlowerStyle,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_leaf_quota")]
    pub leaf_quota: u32,
    #[serde(default = "default_layers")]
    pub layers: Vec<LayerSpec>,
    /// Replaces the device-class preset when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<LayoutPreset>,
    /// Fill behind the bouquet in rendered output; transparent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl Default for BouquetConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            flower: FlowerStyle::default(),
            palette: default_palette(),
            leaf_quota: default_leaf_quota(),
            layers: default_layers(),
            preset: None,
            background: None,
        }
    }
}

impl BouquetConfig {
    /// Parse and validate a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BouquetResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BouquetError::serde(format!("parse bouquet config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a configuration file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BouquetResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BouquetError::validation(format!("open bouquet config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> BouquetResult<()> {
        let t = &self.timing;
        for (name, value) in [("stem_ms", t.stem_ms), ("petal_ms", t.petal_ms)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BouquetError::validation(format!(
                    "timing.{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("settle_ms", t.settle_ms),
            ("stagger_ms", t.stagger_ms),
            ("stagger_jitter_ms", t.stagger_jitter_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BouquetError::validation(format!(
                    "timing.{name} must be finite and >= 0"
                )));
            }
        }

        let f = &self.flower;
        if f.petal_count_min == 0 || f.petal_count_min > f.petal_count_max {
            return Err(BouquetError::validation(
                "flower petal count range must satisfy 0 < min <= max",
            ));
        }
        if !f.base_radius.is_finite() || f.base_radius <= 0.0 {
            return Err(BouquetError::validation(
                "flower.base_radius must be finite and > 0",
            ));
        }
        for (name, value) in [
            ("radius_jitter", f.radius_jitter),
            ("stroke_min", f.stroke_min),
            ("stroke_jitter", f.stroke_jitter),
            ("petal_offset_mul", f.petal_offset_mul),
            ("petal_scale_y", f.petal_scale_y),
            ("jitter_rad", f.jitter_rad),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BouquetError::validation(format!(
                    "flower.{name} must be finite and >= 0"
                )));
            }
        }

        if self.palette.is_empty() {
            return Err(BouquetError::validation("palette must not be empty"));
        }

        if self.layers.is_empty() {
            return Err(BouquetError::validation("at least one layer is required"));
        }
        let mut fraction_sum = 0.0;
        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.fraction.is_finite() || layer.fraction < 0.0 {
                return Err(BouquetError::validation(format!(
                    "layers[{i}].fraction must be finite and >= 0"
                )));
            }
            if !layer.size_multiplier.is_finite() || layer.size_multiplier <= 0.0 {
                return Err(BouquetError::validation(format!(
                    "layers[{i}].size_multiplier must be finite and > 0"
                )));
            }
            if !layer.min_separation.is_finite() || layer.min_separation < 0.0 {
                return Err(BouquetError::validation(format!(
                    "layers[{i}].min_separation must be finite and >= 0"
                )));
            }
            fraction_sum += layer.fraction;
        }
        if (fraction_sum - 1.0).abs() > LAYER_FRACTION_EPS {
            return Err(BouquetError::validation(format!(
                "layer fractions must sum to 1 (got {fraction_sum})"
            )));
        }

        if let Some(p) = &self.preset {
            if p.count == 0 {
                return Err(BouquetError::validation("preset.count must be > 0"));
            }
            let fractions = [
                p.center_x_fraction,
                p.center_y_fraction,
                p.spread_x_fraction,
                p.spread_y_fraction,
                p.binding_x_fraction,
                p.binding_y_fraction,
                p.gravity_tilt,
                p.min_spread,
            ];
            if fractions.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(BouquetError::validation(
                    "preset fractions must be finite and >= 0",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bouquet/config.rs"]
mod tests;
