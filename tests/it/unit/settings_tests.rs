//! Settings loading and how the brush picks them up.

use crate::helpers::TestBrushBuilder;
use multibrush::{Axis, AxisPair, BrushSettings};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("brush.json");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "clamp": {{ "x": false, "y": true }}, "drag_toggle_key": 18 }}"#).unwrap();
    }

    let settings = BrushSettings::load(&path).unwrap();

    assert_eq!(settings.clamp, AxisPair::new(false, true));
    assert_eq!(settings.drag_toggle_key, 18);
    assert_eq!(settings.handle_size, 6.0);
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = BrushSettings::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read brush settings"));
}

#[test]
fn test_brush_takes_initial_clamp_from_settings() {
    let settings = BrushSettings {
        clamp: AxisPair::new(false, true),
        ..BrushSettings::default()
    };
    let mut brush = TestBrushBuilder::new().with_x().with_settings(settings).build();
    assert_eq!(brush.clamp(), AxisPair::new(false, true));

    brush.set_clamp(Axis::X, true);
    assert_eq!(brush.clamp(), AxisPair::new(true, true));
}
