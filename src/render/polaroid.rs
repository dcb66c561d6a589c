use std::path::Path;

use crate::{
    assets::{
        decode::{Raster, crop_rgba8, decode_raster, encode_raster},
        fonts::{FontRole, ShapedText, TextBrushRgba8, TextLayoutEngine},
    },
    caption::placement::CaptionPlacement,
    effects::{
        adjust::{ColorAdjust, color_matrix_rgba8_premul_in_place},
        blur::{blur_rgba8_premul, radius_for_sigma},
        presets::{BorderTint, FilterId, FilterPreset},
    },
    foundation::{
        core::{Rect, Rgba8, Vec2, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
        error::{RetroSnapError, RetroSnapResult},
    },
    render::{
        config::RenderConfig,
        layout::{
            CANVAS_HEIGHT, CANVAS_WIDTH, PHOTO_SIDE, caption_anchor, center_square_crop,
            date_anchor, photo_rect,
        },
        overlay::{
            draw_premul_image, draw_text, draw_text_shadow, fill_path, fill_rect, frame_ring,
            vignette_premul,
        },
    },
};

/// Cream paper.
pub const PAPER: Rgba8 = Rgba8::rgb(0xf8, 0xf5, 0xee);
/// Photo window fill shown through transparent sources.
pub const PLACEHOLDER: Rgba8 = Rgba8::rgb(0xe6, 0xe2, 0xda);
/// Caption ink.
pub const CAPTION_INK: Rgba8 = Rgba8::rgb(0x1a, 0x1a, 0x1a);

/// Caption size at scale 1.
pub const CAPTION_BASE_PX: f32 = 52.0;
/// Date stamp size.
pub const DATE_PX: f32 = 36.0;

const BORDER_WIDTH: f64 = 30.0;
const INNER_STROKE_WIDTH: f64 = 4.0;
const DATE_SHADOW_SIGMA: f32 = 1.0;

fn border_color(tint: BorderTint) -> Rgba8 {
    match tint {
        BorderTint::Red => Rgba8::rgba_f(220, 40, 40, 0.4),
        BorderTint::Dark => Rgba8::rgba_f(0, 0, 0, 0.8),
    }
}

fn inner_stroke_color() -> Rgba8 {
    Rgba8::rgba_f(0, 0, 0, 0.1)
}

fn date_shadow_color() -> Rgba8 {
    Rgba8::rgba_f(0, 0, 0, 0.5)
}

/// Ink of the date stamp for `preset`.
pub fn date_stamp_color(preset: &FilterPreset) -> Rgba8 {
    if preset.warm_date_stamp() {
        Rgba8::rgba_f(255, 140, 0, 0.9)
    } else {
        Rgba8::rgba_f(245, 245, 245, 0.85)
    }
}

fn brush(c: Rgba8) -> TextBrushRgba8 {
    TextBrushRgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

/// Everything the renderer needs besides the source image.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Date stamp text, usually `MM.DD.YYYY`.
    pub date_label: String,
    /// Film preset.
    pub filter: FilterId,
    /// Caption text; empty draws nothing.
    pub caption: String,
    /// Caption anchor and scale.
    pub placement: CaptionPlacement,
}

/// Polaroid compositor. Owns the text layout state, so one instance serves one
/// render at a time.
pub struct PolaroidRenderer {
    config: RenderConfig,
    text: TextLayoutEngine,
}

impl PolaroidRenderer {
    /// Validate `config` and resolve fonts for the caption and date stamp.
    ///
    /// Configured font files must load. Without one, an installed face is looked
    /// up when `system_fonts` is on; a role left without a font renders no text.
    pub fn new(config: RenderConfig) -> RetroSnapResult<Self> {
        config.validate()?;
        let mut text = TextLayoutEngine::new();
        load_role_font(
            &mut text,
            FontRole::Caption,
            config.caption_font.as_deref(),
            config.system_fonts,
        )?;
        load_role_font(
            &mut text,
            FontRole::DateStamp,
            config.date_font.as_deref(),
            config.system_fonts,
        )?;
        Ok(Self { config, text })
    }

    /// Settings this renderer was built with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Text engine, e.g. to register font bytes directly.
    pub fn text_engine_mut(&mut self) -> &mut TextLayoutEngine {
        &mut self.text
    }

    /// Decode `source`, compose the polaroid and encode it.
    #[tracing::instrument(
        skip(self, source, request),
        fields(len = source.len(), filter = %request.filter)
    )]
    pub fn render(&mut self, source: &[u8], request: &RenderRequest) -> RetroSnapResult<Vec<u8>> {
        let raster = decode_raster(source)?;
        let out = self.compose(&raster, request)?;
        let bytes = encode_raster(&out, self.config.output_format, self.config.jpeg_quality)?;
        tracing::debug!(
            bytes = bytes.len(),
            format = ?self.config.output_format,
            "encoded polaroid"
        );
        Ok(bytes)
    }

    /// Compose the 1080x1440 polaroid for an already decoded source.
    pub fn compose(&mut self, source: &Raster, request: &RenderRequest) -> RetroSnapResult<Raster> {
        let preset = request.filter.preset();
        let photo = photo_rect();
        let side = PHOTO_SIDE as u32;

        let mut ctx = vello_cpu::RenderContext::new(CANVAS_WIDTH as u16, CANVAS_HEIGHT as u16);
        fill_rect(
            &mut ctx,
            Rect::new(0.0, 0.0, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT)),
            PAPER,
        );
        fill_rect(&mut ctx, photo, PLACEHOLDER);

        let filtered = filtered_square_premul(source, &preset.adjust, side)?;
        draw_premul_image(&mut ctx, &filtered, side, side, photo.origin().to_vec2())?;

        if preset.vignette {
            let vignette = vignette_premul(side);
            draw_premul_image(&mut ctx, &vignette, side, side, photo.origin().to_vec2())?;
        }
        if let Some(tint) = preset.border {
            fill_path(&mut ctx, &frame_ring(photo, BORDER_WIDTH), border_color(tint));
        }
        fill_path(
            &mut ctx,
            &frame_ring(photo, INNER_STROKE_WIDTH),
            inner_stroke_color(),
        );

        self.draw_date(&mut ctx, &request.date_label, preset)?;
        self.draw_caption(&mut ctx, &request.caption, &request.placement)?;

        let mut pixmap = vello_cpu::Pixmap::new(CANVAS_WIDTH as u16, CANVAS_HEIGHT as u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut rgba8 = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba8);
        Raster::from_rgba8(CANVAS_WIDTH, CANVAS_HEIGHT, rgba8)
    }

    fn draw_date(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        label: &str,
        preset: &FilterPreset,
    ) -> RetroSnapResult<()> {
        let Some(text) = self.text.shape(
            FontRole::DateStamp,
            label,
            DATE_PX,
            true,
            brush(date_stamp_color(preset)),
        )?
        else {
            if !label.is_empty() {
                tracing::debug!("date stamp skipped: no font");
            }
            return Ok(());
        };
        warn_missing_glyphs(&text, "date stamp");
        let anchor = date_anchor();
        let origin = Vec2::new(
            anchor.x - f64::from(text.width()),
            anchor.y - f64::from(text.first_baseline()),
        );

        if let Some(shadow) =
            self.text
                .shape(FontRole::DateStamp, label, DATE_PX, true, brush(date_shadow_color()))?
        {
            draw_text_shadow(ctx, &shadow, origin, DATE_SHADOW_SIGMA)?;
        }
        draw_text(ctx, &text, origin);
        Ok(())
    }

    fn draw_caption(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        caption: &str,
        placement: &CaptionPlacement,
    ) -> RetroSnapResult<()> {
        let size = CAPTION_BASE_PX * placement.effective_scale();
        let Some(text) = self
            .text
            .shape(FontRole::Caption, caption, size, false, brush(CAPTION_INK))?
        else {
            if !caption.is_empty() {
                tracing::debug!("caption skipped: no font");
            }
            return Ok(());
        };
        warn_missing_glyphs(&text, "caption");
        let anchor = caption_anchor(placement);
        let origin = Vec2::new(anchor.x - f64::from(text.width()) / 2.0, anchor.y);
        draw_text(ctx, &text, origin);
        Ok(())
    }
}

fn warn_missing_glyphs(text: &ShapedText, what: &str) {
    let missing = text.missing_glyphs();
    if missing > 0 {
        tracing::warn!(missing, "{what} font lacks glyphs; they draw as boxes");
    }
}

fn load_role_font(
    text: &mut TextLayoutEngine,
    role: FontRole,
    path: Option<&Path>,
    system_fonts: bool,
) -> RetroSnapResult<()> {
    if let Some(path) = path {
        text.register_file(role, path)?;
    } else if system_fonts {
        text.register_system(role)?;
    }
    Ok(())
}

/// Filter `source`, center-crop it to a square and resample it to `side`.
///
/// Only the crop plus the blur radius is filtered, which gives the same pixels as
/// filtering the whole source first. Returns premultiplied RGBA8, `side * side * 4` bytes.
pub(crate) fn filtered_square_premul(
    source: &Raster,
    adjust: &ColorAdjust,
    side: u32,
) -> RetroSnapResult<Vec<u8>> {
    if side == 0 {
        return Err(RetroSnapError::validation("output side must be > 0"));
    }
    let crop = center_square_crop(source.width, source.height);
    if crop.side == 0 {
        return Err(RetroSnapError::render("source raster has no pixels"));
    }

    let pad = if adjust.has_blur() {
        radius_for_sigma(adjust.blur_px)
    } else {
        0
    };
    let x0 = crop.x.saturating_sub(pad);
    let y0 = crop.y.saturating_sub(pad);
    let x1 = (crop.x + crop.side).saturating_add(pad).min(source.width);
    let y1 = (crop.y + crop.side).saturating_add(pad).min(source.height);
    let (rw, rh) = (x1 - x0, y1 - y0);

    let mut premul = crop_rgba8(&source.rgba8, source.width, source.height, (x0, y0, rw, rh))
        .map_err(|e| RetroSnapError::render(format!("crop source: {e}")))?;
    premultiply_rgba8_in_place(&mut premul);
    color_matrix_rgba8_premul_in_place(&mut premul, &adjust.color_matrix());
    if pad > 0 {
        premul = blur_rgba8_premul(&premul, rw, rh, adjust.blur_px)?;
        premul = crop_rgba8(&premul, rw, rh, (crop.x - x0, crop.y - y0, crop.side, crop.side))?;
    }
    if crop.side == side {
        return Ok(premul);
    }

    let img = image::RgbaImage::from_raw(crop.side, crop.side, premul)
        .ok_or_else(|| RetroSnapError::render("filtered buffer does not match dimensions"))?;
    let resized = image::imageops::resize(&img, side, side, image::imageops::FilterType::Triangle);
    Ok(resized.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/render/polaroid.rs"]
mod tests;
