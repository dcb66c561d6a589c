use crate::{
    caption::placement::CaptionPlacement,
    foundation::core::{Point, Rect},
};

/// Output canvas width.
pub const CANVAS_WIDTH: u32 = 1080;
/// Output canvas height (3:4 portrait).
pub const CANVAS_HEIGHT: u32 = 1440;
/// Paper margin left, right and above the photo.
pub const PHOTO_MARGIN: f64 = 70.0;
/// Side of the square photo window.
pub const PHOTO_SIDE: f64 = CANVAS_WIDTH as f64 - 2.0 * PHOTO_MARGIN;

/// Gap between the photo and the top of the caption strip.
const CAPTION_STRIP_GAP: f64 = 80.0;
/// Paper kept free below the caption strip.
const CAPTION_STRIP_BOTTOM: f64 = 40.0;
/// Upward nudge of the default caption anchor inside its strip.
const CAPTION_STRIP_NUDGE: f64 = 20.0;
/// Inset of the date stamp's right edge and baseline from the photo corner.
const DATE_INSET: f64 = 30.0;

/// Square photo window on the canvas.
pub fn photo_rect() -> Rect {
    Rect::new(
        PHOTO_MARGIN,
        PHOTO_MARGIN,
        PHOTO_MARGIN + PHOTO_SIDE,
        PHOTO_MARGIN + PHOTO_SIDE,
    )
}

/// Right edge and alphabetic baseline of the date stamp.
pub fn date_anchor() -> Point {
    let r = photo_rect();
    Point::new(r.x1 - DATE_INSET, r.y1 - DATE_INSET)
}

/// Horizontal center and top edge of the caption.
///
/// A dragged placement maps its fractions, clamped to the drag area, onto the
/// canvas; otherwise the caption sits centered in the strip below the photo.
pub fn caption_anchor(placement: &CaptionPlacement) -> Point {
    let placement = placement.clamped();
    if placement.is_dragged() {
        return Point::new(
            f64::from(placement.x) * f64::from(CANVAS_WIDTH),
            f64::from(placement.y) * f64::from(CANVAS_HEIGHT),
        );
    }
    let strip_top = photo_rect().y1 + CAPTION_STRIP_GAP;
    let strip_height = f64::from(CANVAS_HEIGHT) - strip_top - CAPTION_STRIP_BOTTOM;
    Point::new(
        f64::from(CANVAS_WIDTH) / 2.0,
        strip_top + strip_height / 2.0 - CAPTION_STRIP_NUDGE,
    )
}

/// Centered square crop of a `width x height` source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge in source pixels.
    pub x: u32,
    /// Top edge in source pixels.
    pub y: u32,
    /// Side length in source pixels.
    pub side: u32,
}

/// Largest centered square inside the source.
pub fn center_square_crop(width: u32, height: u32) -> CropRect {
    let side = width.min(height);
    CropRect {
        x: (width - side) / 2,
        y: (height - side) / 2,
        side,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
