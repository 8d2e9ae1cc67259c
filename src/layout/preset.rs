use crate::foundation::core::Size;
use crate::foundation::math::clamp_lo_wins;
use crate::layout::envelope::PlacementEnvelope;

/// Viewports at or below this CSS width use the narrow presets.
pub const NARROW_BREAKPOINT_CSS_PX: f64 = 768.0;

/// Device classes the host chooses between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Narrow,
    LandscapeNarrow,
}

impl DeviceClass {
    /// Classify a viewport by its CSS (not device-pixel) size.
    pub fn classify(css_width: f64, css_height: f64) -> Self {
        if css_width > NARROW_BREAKPOINT_CSS_PX {
            Self::Desktop
        } else if css_width > css_height {
            Self::LandscapeNarrow
        } else {
            Self::Narrow
        }
    }
}

/// Bouquet placement expressed as fractions of the surface size.
///
/// Center and binding fractions are relative to width/height; spread fractions are relative to
/// `min(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPreset {
    pub count: usize,
    pub center_x_fraction: f64,
    pub center_y_fraction: f64,
    pub spread_x_fraction: f64,
    pub spread_y_fraction: f64,
    pub binding_x_fraction: f64,
    pub binding_y_fraction: f64,
    #[serde(default = "default_tilt")]
    pub gravity_tilt: f64,
    /// Edge margins `[x, y]` in device pixels; when set, spreads are kept inside the surface.
    #[serde(default)]
    pub margins: Option<[f64; 2]>,
    #[serde(default = "default_min_spread")]
    pub min_spread: f64,
}

fn default_tilt() -> f64 {
    0.03
}

fn default_min_spread() -> f64 {
    8.0
}

impl LayoutPreset {
    pub fn desktop() -> Self {
        Self {
            count: 12,
            center_x_fraction: 0.40,
            center_y_fraction: 0.32,
            spread_x_fraction: 0.25,
            spread_y_fraction: 0.22 * 0.80,
            binding_x_fraction: 0.40,
            binding_y_fraction: 0.60,
            gravity_tilt: 0.03,
            margins: None,
            min_spread: default_min_spread(),
        }
    }

    pub fn narrow() -> Self {
        Self {
            count: 12,
            center_x_fraction: 0.15,
            center_y_fraction: 0.15,
            spread_x_fraction: 0.13,
            spread_y_fraction: 0.14,
            binding_x_fraction: 0.15,
            binding_y_fraction: 0.35,
            gravity_tilt: 0.008,
            margins: Some([60.0, 20.0]),
            min_spread: default_min_spread(),
        }
    }

    pub fn landscape_narrow() -> Self {
        Self {
            count: 12,
            center_x_fraction: 0.30,
            center_y_fraction: 0.30,
            spread_x_fraction: 0.12,
            spread_y_fraction: 0.20,
            binding_x_fraction: 0.30,
            binding_y_fraction: 0.62,
            gravity_tilt: 0.008,
            margins: Some([60.0, 20.0]),
            min_spread: default_min_spread(),
        }
    }

    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Desktop => Self::desktop(),
            DeviceClass::Narrow => Self::narrow(),
            DeviceClass::LandscapeNarrow => Self::landscape_narrow(),
        }
    }

    /// Resolve the preset against a surface size in device pixels.
    ///
    /// A zero-sized surface yields a collapsed envelope rather than an error.
    pub fn envelope(&self, size: Size) -> PlacementEnvelope {
        let (w, h) = (size.width.max(0.0), size.height.max(0.0));
        let min = w.min(h);

        let center_x = w * self.center_x_fraction;
        let center_y = h * self.center_y_fraction;
        let mut half_width = min * self.spread_x_fraction;
        let mut half_height = min * self.spread_y_fraction;

        if let Some([margin_x, margin_y]) = self.margins {
            let max_x = (center_x - margin_x).min(w - center_x - margin_x);
            let max_y = (center_y - margin_y).min(h - center_y - margin_y);
            half_width = clamp_lo_wins(half_width, self.min_spread, max_x);
            half_height = clamp_lo_wins(half_height, self.min_spread, max_y);
        }

        PlacementEnvelope {
            center_x,
            center_y,
            half_width,
            half_height,
            binding_x: w * self.binding_x_fraction,
            binding_y: h * self.binding_y_fraction,
            gravity_tilt: self.gravity_tilt,
        }
    }
}

impl Default for LayoutPreset {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/preset.rs"]
mod tests;
