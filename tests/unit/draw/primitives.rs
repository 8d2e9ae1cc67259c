use super::*;
use crate::draw::record::{DrawCmd, RecordingSurface};
use crate::foundation::core::{Affine, Size};

fn surface() -> RecordingSurface {
    RecordingSurface::new(Size::new(200.0, 200.0))
}

#[test]
fn petal_reveal_is_angular() {
    assert_eq!(petal_path(10.0, 0.0).elements().len(), 1);
    assert_eq!(petal_path(10.0, 0.5).elements().len(), 51);
    assert_eq!(petal_path(10.0, 1.0).elements().len(), PETAL_STEPS + 1);
    // Progress above one never over-draws.
    assert_eq!(petal_path(10.0, 3.0).elements().len(), PETAL_STEPS + 1);
}

#[test]
fn petal_lobe_stays_within_its_radius() {
    let path = petal_path(10.0, 1.0);
    for el in path.elements() {
        if let kurbo::PathEl::LineTo(p) | kurbo::PathEl::MoveTo(p) = el {
            assert!(p.to_vec2().hypot() <= 10.0 + 1e-9);
            assert!(p.y >= -1e-9);
        }
    }
}

#[test]
fn petal_is_filled_and_stroked_under_its_local_transform() {
    let mut s = surface();
    let spec = PetalSpec {
        at: Point::new(50.0, 60.0),
        radius_x: 20.0,
        y_scale: 1.9,
        rotation: 0.0,
        color: Color::rgb(0xff, 0xdb, 0x27),
        progress: 1.0,
        radial_offset: 11.6,
    };
    draw_petal(&mut s, &spec);

    let expected = Affine::translate(Vec2::new(50.0, 60.0))
        * Affine::rotate(0.0)
        * Affine::translate(Vec2::new(11.6, 0.0))
        * Affine::scale_non_uniform(1.0, 1.9);
    let cmds = s.commands();
    assert_eq!(cmds.len(), 2);
    assert!(matches!(&cmds[0], DrawCmd::Fill { transform, color, .. }
        if *transform == expected && *color == spec.color));
    assert!(matches!(&cmds[1], DrawCmd::Stroke { transform, .. } if *transform == expected));
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn stem_tip_interpolates_toward_target() {
    let mut s = surface();
    let tip = draw_stem_segment(
        &mut s,
        Point::new(0.0, 0.0),
        Point::new(100.0, 50.0),
        0.5,
        3.0,
        STEM_COLOR,
    );
    assert_eq!(tip, Point::new(50.0, 25.0));
    assert!(matches!(&s.commands()[0], DrawCmd::Stroke { width, .. } if *width == 3.0));
}

#[test]
fn leaf_pair_draws_two_green_lobes() {
    let mut s = surface();
    draw_leaf_pair(&mut s, Point::new(0.0, 0.0), Point::new(0.0, 100.0), 1.0);
    let fills: Vec<_> = s
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Fill {
                color, transform, ..
            } => Some((*color, *transform)),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 2);
    assert!(fills.iter().all(|(c, _)| *c == LEAF_COLOR));
    // Near leaf drifts right at 40%, far leaf drifts left at 65%.
    let near = fills[0].1.translation();
    let far = fills[1].1.translation();
    assert!((near.x - 18.0).abs() < 1e-9 && (near.y - 40.0).abs() < 1e-9);
    assert!((far.x + 18.0).abs() < 1e-9 && (far.y - 65.0).abs() < 1e-9);
}

#[test]
fn center_is_a_gradient_disc_with_outline() {
    let mut s = surface();
    draw_center(&mut s, Point::new(10.0, 10.0));
    let cmds = s.commands();
    assert_eq!(cmds.len(), 2);
    match &cmds[0] {
        DrawCmd::Radial { disc, gradient, .. } => {
            assert_eq!(disc.radius, 12.0);
            assert_eq!(gradient.focus, Point::new(7.0, 7.0));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn decorations_paint_around_binding_point() {
    let mut s = surface();
    draw_ground_shadow(&mut s, Point::new(100.0, 120.0));
    draw_binding_bow(&mut s, Point::new(100.0, 120.0));
    // Shadow fill, band fill + stroke, wings fill + stroke.
    assert_eq!(s.paint_count(), 5);
    assert_eq!(s.clear_count(), 0);
}

#[test]
fn bow_wings_loop_out_and_back_on_both_sides() {
    let mut s = surface();
    let binding = Point::new(100.0, 120.0);
    draw_binding_bow(&mut s, binding);

    let wings = match &s.commands()[2] {
        DrawCmd::Fill { path, .. } => path.clone(),
        other => panic!("unexpected {other:?}"),
    };
    let els = wings.elements();
    // Per side: move, out to the wing tip, back to the binding point.
    assert_eq!(els.len(), 6);
    assert_eq!(els[0], kurbo::PathEl::MoveTo(binding));
    assert_eq!(
        els[1],
        kurbo::PathEl::QuadTo(Point::new(78.0, 100.0), Point::new(54.0, 118.0))
    );
    assert_eq!(
        els[2],
        kurbo::PathEl::QuadTo(Point::new(78.0, 130.0), binding)
    );
    assert_eq!(
        els[4],
        kurbo::PathEl::QuadTo(Point::new(122.0, 100.0), Point::new(146.0, 118.0))
    );
    assert_eq!(
        els[5],
        kurbo::PathEl::QuadTo(Point::new(122.0, 130.0), binding)
    );
}
