use super::*;

#[test]
fn classify_by_css_width_and_orientation() {
    assert_eq!(DeviceClass::classify(1280.0, 720.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::classify(390.0, 844.0), DeviceClass::Narrow);
    assert_eq!(DeviceClass::classify(768.0, 1024.0), DeviceClass::Narrow);
    assert_eq!(DeviceClass::classify(740.0, 360.0), DeviceClass::LandscapeNarrow);
}

#[test]
fn desktop_envelope_matches_fractions() {
    let env = LayoutPreset::desktop().envelope(Size::new(1000.0, 800.0));
    assert!((env.center_x - 400.0).abs() < 1e-9);
    assert!((env.center_y - 256.0).abs() < 1e-9);
    assert!((env.half_width - 200.0).abs() < 1e-9);
    assert!((env.half_height - 140.8).abs() < 1e-9);
    assert!((env.binding_x - 400.0).abs() < 1e-9);
    assert!((env.binding_y - 480.0).abs() < 1e-9);
    assert_eq!(env.gravity_tilt, 0.03);
}

#[test]
fn narrow_spread_is_kept_inside_margins() {
    let env = LayoutPreset::narrow().envelope(Size::new(1170.0, 2532.0));
    // center_x = 175.5 leaves 115.5 px of room after the 60 px margin.
    assert!(env.half_width <= 175.5 - 60.0 + 1e-9);
    assert!(env.half_width >= 8.0);
    assert!(env.half_height <= 2532.0 * 0.15 - 20.0 + 1e-9);
}

#[test]
fn tiny_narrow_surface_falls_back_to_min_spread() {
    let env = LayoutPreset::narrow().envelope(Size::new(100.0, 100.0));
    assert_eq!(env.half_width, 8.0);
    assert_eq!(env.half_height, 8.0);
}

#[test]
fn zero_surface_collapses_without_panicking() {
    let env = LayoutPreset::desktop().envelope(Size::ZERO);
    assert_eq!(env.half_width, 0.0);
    assert_eq!(env.half_height, 0.0);
    assert!(env.is_degenerate());
}

#[test]
fn preset_json_defaults_optional_fields() {
    let json = r#"{
        "count": 9,
        "center_x_fraction": 0.5,
        "center_y_fraction": 0.3,
        "spread_x_fraction": 0.2,
        "spread_y_fraction": 0.2,
        "binding_x_fraction": 0.5,
        "binding_y_fraction": 0.7
    }"#;
    let p: LayoutPreset = serde_json::from_str(json).unwrap();
    assert_eq!(p.count, 9);
    assert_eq!(p.gravity_tilt, 0.03);
    assert_eq!(p.margins, None);
    assert_eq!(p.min_spread, 8.0);
}
