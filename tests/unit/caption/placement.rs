use super::*;

#[test]
fn default_is_centered_strip_at_unit_scale() {
    let p = CaptionPlacement::default();
    assert_eq!((p.x, p.y, p.scale), (0.5, 0.85, 1.0));
    assert!(!p.is_dragged());
}

#[test]
fn drag_clamps_to_the_drag_area() {
    let mut p = CaptionPlacement::default();
    p.drag_by(-2.0, -2.0);
    assert_eq!((p.x, p.y), (0.1, 0.05));
    p.drag_by(5.0, 5.0);
    assert_eq!((p.x, p.y), (0.9, 0.95));
    assert!(p.is_dragged());
}

#[test]
fn small_drags_accumulate() {
    let mut p = CaptionPlacement::default();
    p.drag_by(0.1, -0.25);
    p.drag_by(0.05, -0.1);
    assert!((p.x - 0.65).abs() < 1e-6);
    assert!((p.y - 0.5).abs() < 1e-6);
}

#[test]
fn non_finite_drag_deltas_are_ignored() {
    let mut p = CaptionPlacement::default();
    p.drag_by(f32::NAN, f32::INFINITY);
    assert_eq!((p.x, p.y), (0.5, 0.85));
}

#[test]
fn scale_is_kept_positive() {
    let mut p = CaptionPlacement::default();
    p.set_scale(0.0);
    assert_eq!(p.scale, MIN_CAPTION_SCALE);
    p.set_scale(-3.0);
    assert_eq!(p.scale, MIN_CAPTION_SCALE);
    p.set_scale(f32::NAN);
    assert_eq!(p.scale, 1.0);
    p.set_scale(2.5);
    assert_eq!(p.scale, 2.5);
}

#[test]
fn effective_scale_sanitizes_raw_fields() {
    let p = CaptionPlacement {
        x: 0.5,
        y: 0.5,
        scale: -1.0,
    };
    assert_eq!(p.effective_scale(), MIN_CAPTION_SCALE);
}

#[test]
fn partial_json_fills_defaults() {
    let p: CaptionPlacement = serde_json::from_str(r#"{"y":0.3}"#).unwrap();
    assert_eq!((p.x, p.y, p.scale), (0.5, 0.3, 1.0));
}

#[test]
fn explicit_positions_are_clamped_to_the_drag_area() {
    let p = CaptionPlacement::at(5.0, -1.0);
    assert_eq!((p.x, p.y), (0.9, 0.05));
    let p = CaptionPlacement::at(0.3, 0.4);
    assert_eq!((p.x, p.y), (0.3, 0.4));
    let p = CaptionPlacement::at(f32::NAN, f32::INFINITY);
    assert_eq!((p.x, p.y), DEFAULT_CAPTION_POS);
    assert!(!p.is_dragged());
}

#[test]
fn clamped_keeps_scale_and_the_default_anchor() {
    let p = CaptionPlacement {
        x: -0.4,
        y: 3.0,
        scale: 2.0,
    }
    .clamped();
    assert_eq!((p.x, p.y, p.scale), (0.1, 0.95, 2.0));
    assert_eq!(CaptionPlacement::default().clamped(), CaptionPlacement::default());
}
