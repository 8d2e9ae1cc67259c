use super::*;

fn reference() -> FlowerTimeline {
    FlowerTimeline::new(1200.0, 700.0, 200.0, 8).unwrap()
}

#[test]
fn stem_completes_when_first_petal_starts() {
    let t = reference();
    assert_eq!(t.stem_growth(1200.0), 1.0);
    assert_eq!(t.petal_progress(0, 1200.0), Some(0.0));
    assert_eq!(t.petal_progress(1, 1200.0), None);
    assert_eq!(t.petal_progress(0, 1550.0), Some(0.5));
}

#[test]
fn done_after_petals_and_settle_margin() {
    let t = reference();
    assert_eq!(t.total_ms(), 7000.0);
    assert!(!t.is_done(6999.0));
    assert!(t.is_done(7000.0));
    assert!(t.is_done(60_000.0));
}

#[test]
fn negative_local_time_is_not_started() {
    let t = reference();
    assert_eq!(t.stem_growth(-10.0), 0.0);
    assert_eq!(t.petal_progress(0, -10.0), None);
    assert!(!t.is_done(-10.0));
}

#[test]
fn leaf_growth_ramps_over_stem_tail() {
    assert_eq!(FlowerTimeline::leaf_growth(0.5), 0.0);
    assert_eq!(FlowerTimeline::leaf_growth(LEAF_THRESHOLD), 0.0);
    assert!((FlowerTimeline::leaf_growth(0.8) - 0.5).abs() < 1e-9);
    assert_eq!(FlowerTimeline::leaf_growth(1.0), 1.0);
}

#[test]
fn rejects_non_positive_durations() {
    assert!(FlowerTimeline::new(0.0, 700.0, 200.0, 8).is_err());
    assert!(FlowerTimeline::new(1200.0, -1.0, 200.0, 8).is_err());
    assert!(FlowerTimeline::new(1200.0, 700.0, -1.0, 8).is_err());
    assert!(FlowerTimeline::new(1200.0, 700.0, 200.0, 0).is_err());
    assert!(FlowerTimeline::new(f64::NAN, 700.0, 200.0, 8).is_err());
}
