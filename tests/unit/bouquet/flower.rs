use super::*;
use crate::draw::record::{DrawCmd, RecordingSurface};
use crate::foundation::core::Size;
use crate::foundation::random::Rng64;

const PETAL_COLOR: Color = Color::rgb(1, 2, 3);

fn params(petal_count: usize, start_delay_ms: f64) -> FlowerParams {
    FlowerParams {
        head: Point::new(200.0, 150.0),
        binding: Point::new(200.0, 400.0),
        depth_index: 1,
        petal_count,
        radius: 20.0,
        color: PETAL_COLOR,
        stroke_width: 3.0,
        petal_offset: 20.0 * 0.58,
        petal_scale_y: 1.9,
        rotation_jitter: vec![0.0; petal_count],
        start_delay_ms,
        petal_ease: Ease::Linear,
    }
}

fn flower(start_delay_ms: f64) -> FlowerEntity {
    FlowerEntity::new(params(8, start_delay_ms), 1200.0, 700.0, 200.0).unwrap()
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(Size::new(800.0, 600.0))
}

fn petal_fills(s: &RecordingSurface) -> Vec<&DrawCmd> {
    s.commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::Fill { color, .. } if *color == PETAL_COLOR))
        .collect()
}

#[test]
fn rejects_mismatched_jitter() {
    let mut p = params(8, 0.0);
    p.rotation_jitter.pop();
    assert!(FlowerEntity::new(p, 1200.0, 700.0, 200.0).is_err());
}

#[test]
fn draws_nothing_before_its_start() {
    let mut f = flower(300.0);
    let mut s = surface();
    let mut budget = LeafBudget::new(4);
    assert!(!f.update(&mut s, 299.0, &mut budget));
    assert!(s.commands().is_empty());
    assert_eq!(budget.claimed(), 0);
}

#[test]
fn center_appears_at_local_zero() {
    let mut f = flower(300.0);
    let mut s = surface();
    let mut budget = LeafBudget::new(4);
    assert!(!f.update(&mut s, 300.0, &mut budget));
    assert!(matches!(s.commands()[0], DrawCmd::Radial { .. }));
    assert_eq!(s.commands().len(), 2);
}

#[test]
fn stem_completes_as_first_petal_begins() {
    let mut f = flower(0.0);
    let mut s = surface();
    let mut budget = LeafBudget::new(4);
    f.update(&mut s, 1200.0, &mut budget);

    let DrawCmd::Stroke { path, width, .. } = &s.commands()[0] else {
        panic!("expected stem stroke first");
    };
    assert_eq!(*width, 3.0);
    let end = path.elements().last().and_then(|el| el.end_point()).unwrap();
    assert!((end.y - 400.0).abs() < 1e-9);

    assert_eq!(petal_fills(&s).len(), 1);
    assert!(f.has_leaves());
    assert_eq!(budget.remaining(), 3);
}

#[test]
fn leaves_wait_for_the_threshold() {
    let mut f = flower(0.0);
    let mut budget = LeafBudget::new(4);
    f.update(&mut surface(), 720.0, &mut budget);
    assert!(!f.has_leaves());
    f.update(&mut surface(), 721.0, &mut budget);
    assert!(f.has_leaves());
}

#[test]
fn leaf_pair_claimed_once() {
    let mut f = flower(0.0);
    let mut budget = LeafBudget::new(4);
    for t in [800.0, 900.0, 1000.0, 5000.0] {
        f.update(&mut surface(), t, &mut budget);
    }
    assert_eq!(budget.claimed(), 1);
}

#[test]
fn exhausted_budget_means_no_leaves() {
    let mut f = flower(0.0);
    let mut budget = LeafBudget::new(0);
    let mut s = surface();
    f.update(&mut s, 1200.0, &mut budget);
    assert!(!f.has_leaves());
    let greens = s
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::Fill { color, .. } if *color == crate::draw::primitives::LEAF_COLOR))
        .count();
    assert_eq!(greens, 0);
}

#[test]
fn petals_open_in_sequence() {
    let mut f = flower(0.0);
    let mut budget = LeafBudget::new(0);

    let mut s = surface();
    f.update(&mut s, 1200.0 + 700.0 * 2.5, &mut budget);
    assert_eq!(petal_fills(&s).len(), 3);

    let mut s = surface();
    f.update(&mut s, 1200.0 + 700.0 * 8.0, &mut budget);
    assert_eq!(petal_fills(&s).len(), 8);
}

#[test]
fn easing_shapes_petal_reveal() {
    let mut p = params(8, 0.0);
    p.petal_ease = Ease::EaseIn;
    let mut eased = FlowerEntity::new(p, 1200.0, 700.0, 200.0).unwrap();
    let mut linear = flower(0.0);
    let mut budget = LeafBudget::new(0);

    let mut s_lin = surface();
    let mut s_eased = surface();
    linear.update(&mut s_lin, 1550.0, &mut budget);
    eased.update(&mut s_eased, 1550.0, &mut budget);

    let len = |s: &RecordingSurface| match petal_fills(s)[0] {
        DrawCmd::Fill { path, .. } => path.elements().len(),
        _ => unreachable!(),
    };
    assert_eq!(len(&s_lin), 51);
    assert_eq!(len(&s_eased), 26);
}

#[test]
fn done_exactly_at_total() {
    let mut f = flower(0.0);
    let mut budget = LeafBudget::new(4);
    assert_eq!(f.timeline().total_ms(), 7000.0);
    assert!(!f.update(&mut surface(), 6999.0, &mut budget));
    assert!(f.update(&mut surface(), 7000.0, &mut budget));
    assert!(f.is_done_at(7000.0));
}

#[test]
fn done_state_is_idempotent() {
    let mut f = flower(0.0);
    let mut budget = LeafBudget::new(4);
    let mut first = surface();
    let mut second = surface();
    assert!(f.update(&mut first, 9000.0, &mut budget));
    assert!(f.update(&mut second, 9000.0, &mut budget));
    assert_eq!(first.commands(), second.commands());
    assert_eq!(budget.claimed(), 1);
    assert_eq!(first.save_depth(), 0);
}

#[test]
fn spawn_draws_within_configured_ranges() {
    let config = BouquetConfig::default();
    let anchor = Anchor {
        x: 100.0,
        y: 80.0,
        depth_index: 2,
        size_multiplier: 1.15,
    };
    for seed in 0..64 {
        let mut rng = Rng64::new(seed);
        let f = FlowerEntity::spawn(3, &anchor, Point::new(100.0, 300.0), &config, &mut rng).unwrap();
        let p = f.params();
        assert!((6..=10).contains(&p.petal_count));
        assert!(p.radius >= 16.0 * 1.15 && p.radius < 26.0 * 1.15);
        assert!(config.palette.contains(&p.color));
        assert!(p.stroke_width >= 2.0 && p.stroke_width < 4.0);
        assert!((p.petal_offset - p.radius * 0.58).abs() < 1e-12);
        assert_eq!(p.start_delay_ms, p.start_delay_ms.floor());
        assert!(p.start_delay_ms >= 390.0 && p.start_delay_ms < 490.0);
        assert_eq!(p.rotation_jitter.len(), p.petal_count);
        assert!(p.rotation_jitter.iter().all(|j| j.abs() <= 0.125));
        assert_eq!(p.depth_index, 2);
        assert!(!f.has_leaves());
    }
}

#[test]
fn spawn_is_reproducible_for_a_seed() {
    let config = BouquetConfig::default();
    let anchor = Anchor {
        x: 10.0,
        y: 20.0,
        depth_index: 0,
        size_multiplier: 0.85,
    };
    let binding = Point::new(10.0, 90.0);
    let a = FlowerEntity::spawn(0, &anchor, binding, &config, &mut Rng64::new(7)).unwrap();
    let b = FlowerEntity::spawn(0, &anchor, binding, &config, &mut Rng64::new(7)).unwrap();
    assert_eq!(a.params(), b.params());
}
