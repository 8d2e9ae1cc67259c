use super::*;
use crate::foundation::core::{Point, Vec2};

fn unit_square() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((1.0, 0.0));
    p.line_to((1.0, 1.0));
    p
}

#[test]
fn records_paint_with_current_transform() {
    let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
    s.save();
    s.translate(Vec2::new(5.0, 2.0));
    s.fill_path(&unit_square(), Color::rgb(1, 2, 3));
    s.restore();
    s.stroke_path(&unit_square(), Color::rgb(4, 5, 6), 2.0);

    let cmds = s.commands();
    assert_eq!(cmds.len(), 2);
    match &cmds[0] {
        DrawCmd::Fill { transform, .. } => {
            assert_eq!(*transform, Affine::translate(Vec2::new(5.0, 2.0)))
        }
        other => panic!("unexpected {other:?}"),
    }
    match &cmds[1] {
        DrawCmd::Stroke {
            transform, width, ..
        } => {
            assert_eq!(*transform, Affine::IDENTITY);
            assert_eq!(*width, 2.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn unbalanced_restore_is_a_no_op() {
    let mut s = RecordingSurface::new(Size::new(1.0, 1.0));
    s.restore();
    s.rotate(0.5);
    s.fill_radial(
        Circle::new(Point::ORIGIN, 1.0),
        &RadialGradient {
            focus: Point::ORIGIN,
            focus_radius: 0.0,
            inner: Color::rgb(0, 0, 0),
            outer: Color::rgb(255, 255, 255),
        },
    );
    assert!(matches!(
        s.commands()[0],
        DrawCmd::Radial { transform, .. } if transform == Affine::rotate(0.5)
    ));
}

#[test]
fn counts_clears_separately_from_paint() {
    let mut s = RecordingSurface::new(Size::new(1.0, 1.0));
    s.clear();
    s.fill_path(&unit_square(), Color::rgb(0, 0, 0));
    s.clear();
    assert_eq!(s.clear_count(), 2);
    assert_eq!(s.paint_count(), 1);
    assert_eq!(s.take_commands().len(), 3);
    assert!(s.commands().is_empty());
}
