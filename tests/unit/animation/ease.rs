use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::Smooth];

#[test]
fn every_curve_opens_fully() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        let (a, b, c) = (ease.apply(0.25), ease.apply(0.5), ease.apply(0.75));
        assert!(a < b && b < c, "{ease:?}");
    }
}

#[test]
fn halfway_points() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::EaseIn.apply(0.5), 0.25);
    assert_eq!(Ease::EaseOut.apply(0.5), 0.875);
    assert_eq!(Ease::Smooth.apply(0.5), 0.5);
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseIn.apply(7.0), 1.0);
}

#[test]
fn config_names() {
    let e: Ease = serde_json::from_str("\"ease_out\"").unwrap();
    assert_eq!(e, Ease::EaseOut);
    assert_eq!(Ease::default(), Ease::Linear);
}
