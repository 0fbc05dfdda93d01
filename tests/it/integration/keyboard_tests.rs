//! Drag toggle key during create and resize gestures.

use crate::helpers::{EventLog, TestBrushBuilder, assert_span, brush_x};
use multibrush::{Axis, BrushEventKind, BrushSettings, ChangeMode, DomainExtent, PointerEvent};

const SPACE: u32 = 32;

#[test]
fn test_toggle_translates_region_being_created() {
    let mut brush = brush_x();
    let log = EventLog::attach(&mut brush);

    brush.pointer_down(PointerEvent::at(20.0, 0.0)).unwrap();
    brush.pointer_move(PointerEvent::at(40.0, 0.0));
    assert_span(brush.regions()[1].pixels(Axis::X), 20.0, 40.0);

    brush.key_down(SPACE);
    log.clear();
    brush.pointer_move(PointerEvent::at(50.0, 0.0));
    assert_span(brush.regions()[1].pixels(Axis::X), 30.0, 50.0);
    assert_eq!(
        log.events()[0].kind,
        BrushEventKind::Change {
            mode: ChangeMode::Move
        }
    );

    // Releasing resumes resizing from the shifted anchor.
    brush.key_up(SPACE);
    brush.pointer_move(PointerEvent::at(60.0, 0.0));
    assert_span(brush.regions()[1].pixels(Axis::X), 30.0, 60.0);
}

#[test]
fn test_toggle_during_handle_resize() {
    let mut brush = TestBrushBuilder::new()
        .with_x()
        .with_extents(&[DomainExtent::X([2.0, 4.0])])
        .build();

    // West handle of [20, 40].
    brush.pointer_down(PointerEvent::at(20.0, 0.0)).unwrap();
    brush.pointer_move(PointerEvent::at(10.0, 0.0));
    assert_span(brush.regions()[0].pixels(Axis::X), 10.0, 40.0);

    brush.key_down(SPACE);
    brush.pointer_move(PointerEvent::at(15.0, 0.0));
    assert_span(brush.regions()[0].pixels(Axis::X), 15.0, 45.0);
    brush.key_up(SPACE);
    brush.pointer_up(PointerEvent::at(15.0, 0.0));

    assert!(brush.state().is_idle());
    assert_span(brush.regions()[0].pixels(Axis::X), 15.0, 45.0);
}

#[test]
fn test_other_keys_are_ignored() {
    let mut brush = brush_x();
    brush.pointer_down(PointerEvent::at(20.0, 0.0)).unwrap();
    brush.pointer_move(PointerEvent::at(40.0, 0.0));

    brush.key_down(13);
    brush.pointer_move(PointerEvent::at(50.0, 0.0));

    assert_span(brush.regions()[1].pixels(Axis::X), 20.0, 50.0);
}

#[test]
fn test_keys_outside_a_session_do_nothing() {
    let mut brush = brush_x();
    brush.key_down(SPACE);
    brush.key_up(SPACE);
    assert!(brush.state().is_idle());
    assert_eq!(brush.len(), 1);
}

#[test]
fn test_toggle_key_is_configurable() {
    let settings = BrushSettings {
        drag_toggle_key: 16,
        ..BrushSettings::default()
    };
    let mut brush = TestBrushBuilder::new().with_x().with_settings(settings).build();

    brush.pointer_down(PointerEvent::at(20.0, 0.0)).unwrap();
    brush.pointer_move(PointerEvent::at(40.0, 0.0));
    brush.key_down(SPACE);
    brush.pointer_move(PointerEvent::at(50.0, 0.0));
    assert_span(brush.regions()[1].pixels(Axis::X), 20.0, 50.0);

    brush.key_down(16);
    brush.pointer_move(PointerEvent::at(60.0, 0.0));
    assert_span(brush.regions()[1].pixels(Axis::X), 30.0, 60.0);
}

#[test]
fn test_body_drag_ignores_toggle() {
    let mut brush = TestBrushBuilder::new()
        .with_x()
        .with_extents(&[DomainExtent::X([2.0, 4.0])])
        .build();

    brush.pointer_down(PointerEvent::at(30.0, 0.0)).unwrap();
    brush.key_down(SPACE);
    brush.key_up(SPACE);
    brush.pointer_move(PointerEvent::at(35.0, 0.0));

    assert_span(brush.regions()[0].pixels(Axis::X), 25.0, 45.0);
}
