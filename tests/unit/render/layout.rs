use super::*;

#[test]
fn photo_window_is_a_940_square_at_the_margin() {
    let r = photo_rect();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (70.0, 70.0, 1010.0, 1010.0));
    assert_eq!(PHOTO_SIDE, 940.0);
}

#[test]
fn date_anchor_is_inset_from_the_photo_corner() {
    assert_eq!(date_anchor(), Point::new(980.0, 980.0));
}

#[test]
fn default_caption_sits_in_the_strip_below_the_photo() {
    let p = caption_anchor(&CaptionPlacement::default());
    assert_eq!(p, Point::new(540.0, 1225.0));
}

#[test]
fn dragged_caption_maps_fractions_onto_the_canvas() {
    let p = caption_anchor(&CaptionPlacement::at(0.3, 0.3));
    assert!((p.x - 324.0).abs() < 1e-3);
    assert!((p.y - 432.0).abs() < 1e-3);
}

#[test]
fn default_y_with_moved_x_still_uses_the_strip() {
    let p = caption_anchor(&CaptionPlacement::at(0.2, 0.85));
    assert_eq!(p, Point::new(540.0, 1225.0));
}

#[test]
fn out_of_range_placement_stays_on_the_canvas() {
    let raw: CaptionPlacement = serde_json::from_str(r#"{"x":5.0,"y":-2.0}"#).unwrap();
    let p = caption_anchor(&raw);
    assert!((p.x - 0.9 * 1080.0).abs() < 1e-3);
    assert!((p.y - 0.05 * 1440.0).abs() < 1e-3);
}

#[test]
fn crop_is_square_and_centered() {
    assert_eq!(
        center_square_crop(2000, 1000),
        CropRect {
            x: 500,
            y: 0,
            side: 1000
        }
    );
    assert_eq!(
        center_square_crop(1000, 2001),
        CropRect {
            x: 0,
            y: 500,
            side: 1000
        }
    );
    assert_eq!(
        center_square_crop(7, 7),
        CropRect {
            x: 0,
            y: 0,
            side: 7
        }
    );
}
