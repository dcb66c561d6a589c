use std::sync::Arc;

use crate::{
    assets::fonts::ShapedText,
    effects::blur::{blur_rgba8_premul, radius_for_sigma},
    foundation::core::{Affine, BezPath, Rect, Rgba8, Vec2, affine_to_cpu, rect_to_cpu},
    foundation::error::{RetroSnapError, RetroSnapResult},
};

/// Vignette is fully transparent inside this fraction of the photo side.
pub(crate) const VIGNETTE_INNER: f64 = 0.3;
/// Vignette reaches full strength at this fraction of the photo side.
pub(crate) const VIGNETTE_OUTER: f64 = 0.8;
/// Black alpha at full vignette strength.
pub(crate) const VIGNETTE_ALPHA: f32 = 0.45;

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> RetroSnapResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| RetroSnapError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| RetroSnapError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(RetroSnapError::render("pixmap byte len mismatch"));
    }
    let pixels: Vec<vello_cpu::peniko::color::PremulRgba8> = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

pub(crate) fn image_paint(pixmap: vello_cpu::Pixmap) -> vello_cpu::Image {
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

/// Draw a premultiplied bitmap with its top-left corner at `origin`.
pub(crate) fn draw_premul_image(
    ctx: &mut vello_cpu::RenderContext,
    bytes: &[u8],
    width: u32,
    height: u32,
    origin: Vec2,
) -> RetroSnapResult<()> {
    let pixmap = pixmap_from_premul_bytes(bytes, width, height)?;
    ctx.set_transform(affine_to_cpu(Affine::translate(origin)));
    ctx.set_paint(image_paint(pixmap));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

pub(crate) fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, color: Rgba8) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_cpu());
    ctx.fill_rect(&rect_to_cpu(rect));
}

pub(crate) fn fill_path(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: Rgba8) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_cpu());
    ctx.fill_path(&crate::foundation::core::bezpath_to_cpu(path));
}

/// Band of `width` centered on the edge of `rect`, as a fillable path.
///
/// The outer rectangle winds clockwise and the inner one counter-clockwise,
/// so a non-zero fill leaves the middle open.
pub(crate) fn frame_ring(rect: Rect, width: f64) -> BezPath {
    let half = width / 2.0;
    let outer = rect.inflate(half, half);
    let inner = rect.inflate(-half, -half);

    let mut path = BezPath::new();
    path.move_to((outer.x0, outer.y0));
    path.line_to((outer.x1, outer.y0));
    path.line_to((outer.x1, outer.y1));
    path.line_to((outer.x0, outer.y1));
    path.close_path();

    path.move_to((inner.x0, inner.y0));
    path.line_to((inner.x0, inner.y1));
    path.line_to((inner.x1, inner.y1));
    path.line_to((inner.x1, inner.y0));
    path.close_path();
    path
}

/// Premultiplied `side x side` radial darkening, strongest toward the corners.
pub(crate) fn vignette_premul(side: u32) -> Vec<u8> {
    let s = f64::from(side);
    let c = s / 2.0;
    let r0 = VIGNETTE_INNER * s;
    let r1 = VIGNETTE_OUTER * s;
    let mut out = vec![0u8; (side as usize) * (side as usize) * 4];
    for (i, px) in out.chunks_exact_mut(4).enumerate() {
        let x = (i % side as usize) as f64 + 0.5;
        let y = (i / side as usize) as f64 + 0.5;
        let d = ((x - c).powi(2) + (y - c).powi(2)).sqrt();
        let t = ((d - r0) / (r1 - r0)).clamp(0.0, 1.0) as f32;
        px[3] = (t * VIGNETTE_ALPHA * 255.0).round() as u8;
    }
    out
}

/// Draw shaped text with its layout box's top-left corner at `origin`.
pub(crate) fn draw_text(ctx: &mut vello_cpu::RenderContext, text: &ShapedText, origin: Vec2) {
    ctx.set_transform(affine_to_cpu(Affine::translate(origin)));
    for line in text.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(run.run().font())
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

/// Draw a soft shadow of `text` (shaped in the shadow color) at `origin`.
///
/// The text is rasterized into a padded offscreen buffer, blurred with
/// `sigma`, then composited back.
pub(crate) fn draw_text_shadow(
    ctx: &mut vello_cpu::RenderContext,
    text: &ShapedText,
    origin: Vec2,
    sigma: f32,
) -> RetroSnapResult<()> {
    let pad = f64::from(radius_for_sigma(sigma) + 1);
    let w = (f64::from(text.width()) + 2.0 * pad).ceil().max(1.0) as u32;
    let h = (f64::from(text.height()) + 2.0 * pad).ceil().max(1.0) as u32;
    let w16: u16 = w
        .try_into()
        .map_err(|_| RetroSnapError::render("shadow surface width exceeds u16"))?;
    let h16: u16 = h
        .try_into()
        .map_err(|_| RetroSnapError::render("shadow surface height exceeds u16"))?;

    let mut offscreen = vello_cpu::RenderContext::new(w16, h16);
    draw_text(&mut offscreen, text, Vec2::new(pad, pad));
    let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
    offscreen.flush();
    offscreen.render_to_pixmap(&mut pixmap);

    let blurred = blur_rgba8_premul(pixmap.data_as_u8_slice(), w, h, sigma)?;
    draw_premul_image(ctx, &blurred, w, h, origin - Vec2::new(pad, pad))
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
