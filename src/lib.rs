//! RetroSnap is the image core of a retro photo booth.
//!
//! Two independent operations over in-memory rasters:
//!
//! 1. **Classify**: sample the center of a photo, take its mean color in HSV and map it to a
//!    [`Category`] with a few ordered threshold rules ([`classify_bytes`], [`classify`]).
//! 2. **Render**: compose a 1080x1440 polaroid from a photo, a [`FilterPreset`], a date stamp
//!    and a draggable caption ([`PolaroidRenderer::render`]).
//!
//! A caller usually runs classifier -> [`caption_for`] -> renderer, keeping the editing state
//! in a [`PhotoSession`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected randomness**: every random choice takes a caller-provided [`rand::Rng`].
//! - **Deterministic rendering**: identical inputs produce identical pixels.
//! - **Straight RGBA8 at the edges**: [`Raster`] is straight alpha; compositing is premultiplied.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod caption;
mod classify;
mod effects;
mod foundation;
mod render;
mod session;

pub use assets::decode::{OutputFormat, Raster, decode_raster, encode_raster};
pub use assets::fonts::{FontRole, LoadedFont, ShapedText, TextBrushRgba8, TextLayoutEngine};
pub use caption::library::{
    CaptionSuggestion, FALLBACK_CAPTION, caption_for, captions, suggest_caption,
};
pub use caption::placement::{CaptionPlacement, DEFAULT_CAPTION_POS, MIN_CAPTION_SCALE};
pub use classify::categorizer::{
    Category, SAMPLE_GRID, center_mean_rgb, classify, classify_bytes, classify_hsv,
};
pub use classify::hsv::Hsv;
pub use effects::adjust::{ColorAdjust, ColorMatrix, IDENTITY_MATRIX, apply_matrix_rgba8};
pub use effects::blur::{blur_rgba8_premul, radius_for_sigma};
pub use effects::presets::{BorderTint, FilterId, FilterPreset, preset, presets};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{RetroSnapError, RetroSnapResult};
pub use render::config::{DEFAULT_JPEG_QUALITY, RenderConfig};
pub use render::layout::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CropRect, PHOTO_MARGIN, PHOTO_SIDE, caption_anchor,
    center_square_crop, date_anchor, photo_rect,
};
pub use render::polaroid::{
    CAPTION_BASE_PX, CAPTION_INK, DATE_PX, PAPER, PLACEHOLDER, PolaroidRenderer, RenderRequest,
    date_stamp_color,
};
pub use render::preview::render_preview;
pub use session::date::{date_label, today_label};
pub use session::photo_session::PhotoSession;
