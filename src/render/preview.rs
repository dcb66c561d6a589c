use crate::{
    assets::decode::Raster,
    effects::presets::FilterId,
    foundation::{
        core::{Rect, Vec2, unpremultiply_rgba8_in_place},
        error::{RetroSnapError, RetroSnapResult},
    },
    render::{
        overlay::{draw_premul_image, fill_rect, vignette_premul},
        polaroid::{PLACEHOLDER, filtered_square_premul},
    },
};

/// Square thumbnail of `source` with the preset's color adjustment and vignette,
/// as shown in the live filter strip.
pub fn render_preview(source: &Raster, filter: FilterId, side: u32) -> RetroSnapResult<Raster> {
    let side16: u16 = side
        .try_into()
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| RetroSnapError::validation("preview side must be within 1..=65535"))?;
    let preset = filter.preset();

    let mut ctx = vello_cpu::RenderContext::new(side16, side16);
    fill_rect(
        &mut ctx,
        Rect::new(0.0, 0.0, f64::from(side), f64::from(side)),
        PLACEHOLDER,
    );
    let photo = filtered_square_premul(source, &preset.adjust, side)?;
    draw_premul_image(&mut ctx, &photo, side, side, Vec2::ZERO)?;
    if preset.vignette {
        draw_premul_image(&mut ctx, &vignette_premul(side), side, side, Vec2::ZERO)?;
    }

    let mut pixmap = vello_cpu::Pixmap::new(side16, side16);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    let mut rgba8 = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba8);
    Raster::from_rgba8(side, side, rgba8)
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
