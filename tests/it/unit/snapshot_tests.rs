//! Snapshot tests using the insta crate.
//!
//! Inline JSON snapshots of the notification stream and wire names. To
//! update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{EventLog, TestBrushBuilder, brush_x, drag_gesture};
use multibrush::{AxisPair, BrushEvent, BrushEventKind, ChangeMode, DomainExtent, ResizeHandle};
use serde_json::{Value, json};

/// Event stream without pixel values.
fn summary(events: &[BrushEvent]) -> Vec<Value> {
    events
        .iter()
        .map(|e| {
            json!({
                "event": e.kind,
                "active": e.snapshot.active,
                "regions": e.snapshot.regions.len(),
            })
        })
        .collect()
}

#[test]
fn snapshot_create_gesture_events() {
    let mut brush = brush_x();
    let log = EventLog::attach(&mut brush);

    drag_gesture(&mut brush, (20.0, 0.0), (60.0, 0.0));

    insta::assert_json_snapshot!(summary(&log.events()), @r###"
    [
      {
        "active": 1,
        "event": {
          "type": "start"
        },
        "regions": 2
      },
      {
        "active": 1,
        "event": {
          "mode": "resize",
          "type": "change"
        },
        "regions": 2
      },
      {
        "active": 1,
        "event": {
          "mode": "resize",
          "type": "change"
        },
        "regions": 2
      },
      {
        "active": null,
        "event": {
          "type": "end"
        },
        "regions": 2
      }
    ]
    "###);
}

#[test]
fn snapshot_drag_gesture_events() {
    let mut brush = TestBrushBuilder::new()
        .with_x()
        .with_extents(&[DomainExtent::X([2.0, 6.0])])
        .build();
    let log = EventLog::attach(&mut brush);

    drag_gesture(&mut brush, (40.0, 0.0), (50.0, 0.0));

    insta::assert_json_snapshot!(summary(&log.events()), @r###"
    [
      {
        "active": 0,
        "event": {
          "type": "start"
        },
        "regions": 1
      },
      {
        "active": 0,
        "event": {
          "mode": "move",
          "type": "change"
        },
        "regions": 1
      },
      {
        "active": null,
        "event": {
          "type": "end"
        },
        "regions": 1
      }
    ]
    "###);
}

#[test]
fn snapshot_event_kind_wire_format() {
    let kinds = [
        BrushEventKind::Start,
        BrushEventKind::Change {
            mode: ChangeMode::Move,
        },
        BrushEventKind::End,
    ];
    insta::assert_json_snapshot!(kinds, @r###"
    [
      {
        "type": "start"
      },
      {
        "type": "change",
        "mode": "move"
      },
      {
        "type": "end"
      }
    ]
    "###);
}

#[test]
fn snapshot_handle_sets() {
    let sets = json!({
        "x": ResizeHandle::active_set(AxisPair::new(true, false)),
        "y": ResizeHandle::active_set(AxisPair::new(false, true)),
        "xy": ResizeHandle::active_set(AxisPair::new(true, true)),
    });
    insta::assert_json_snapshot!(sets, @r###"
    {
      "x": [
        "e",
        "w"
      ],
      "xy": [
        "n",
        "e",
        "s",
        "w",
        "nw",
        "ne",
        "se",
        "sw"
      ],
      "y": [
        "n",
        "s"
      ]
    }
    "###);
}
