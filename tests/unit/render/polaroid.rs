use super::*;
use crate::effects::presets::preset;

fn offline_renderer() -> PolaroidRenderer {
    PolaroidRenderer::new(RenderConfig {
        system_fonts: false,
        ..RenderConfig::default()
    })
    .unwrap()
}

#[test]
fn date_ink_is_orange_only_for_warm_presets() {
    let orange = Rgba8::rgba_f(255, 140, 0, 0.9);
    let white = Rgba8::rgba_f(245, 245, 245, 0.85);
    assert_eq!(date_stamp_color(preset(FilterId::Kodak)), orange);
    assert_eq!(date_stamp_color(preset(FilterId::Lomo)), orange);
    for id in [FilterId::Fuji, FilterId::Portra, FilterId::Ricoh, FilterId::Cinema] {
        assert_eq!(date_stamp_color(preset(id)), white);
    }
}

#[test]
fn border_tints_use_their_alpha() {
    assert_eq!(border_color(BorderTint::Red), Rgba8::rgba_f(220, 40, 40, 0.4));
    assert_eq!(border_color(BorderTint::Dark).a, 204);
}

#[test]
fn filtered_square_is_resampled_to_the_requested_side() {
    let src = Raster::solid(30, 20, [10, 200, 30, 255]);
    let out = filtered_square_premul(&src, &ColorAdjust::IDENTITY, 8).unwrap();
    assert_eq!(out.len(), 8 * 8 * 4);
    assert!(out.chunks_exact(4).all(|px| px == [10, 200, 30, 255]));
}

/// 30x10 source: left third red, middle green, right third blue.
fn tricolor() -> Raster {
    let (w, h) = (30u32, 10u32);
    let mut rgba8 = Vec::new();
    for _ in 0..h {
        for x in 0..w {
            let px = match x {
                0..10 => [255, 0, 0, 255],
                10..20 => [0, 255, 0, 255],
                _ => [0, 0, 255, 255],
            };
            rgba8.extend_from_slice(&px);
        }
    }
    Raster::from_rgba8(w, h, rgba8).unwrap()
}

#[test]
fn filtered_square_crops_the_center() {
    let src = tricolor();
    let out = filtered_square_premul(&src, &ColorAdjust::IDENTITY, 10).unwrap();
    assert!(out.chunks_exact(4).all(|px| px == [0, 255, 0, 255]));
}

#[test]
fn blur_near_the_crop_edge_sees_pixels_outside_the_crop() {
    let src = tricolor();
    let soft = ColorAdjust {
        blur_px: 1.0,
        ..ColorAdjust::IDENTITY
    };
    let out = filtered_square_premul(&src, &soft, 10).unwrap();

    let whole = blur_rgba8_premul(&src.rgba8, 30, 10, 1.0).unwrap();
    let expected = crop_rgba8(&whole, 30, 10, (10, 0, 10, 10)).unwrap();
    assert_eq!(out, expected);

    let px = |x: usize, y: usize| &out[(y * 10 + x) * 4..(y * 10 + x) * 4 + 4];
    assert!(px(0, 5)[0] > 0, "red bleeds in from the left");
    assert!(px(9, 5)[2] > 0, "blue bleeds in from the right");
    assert_eq!(px(5, 5), [0, 255, 0, 255]);
}

#[test]
fn blur_pad_is_limited_by_the_source_edge() {
    let src = Raster::solid(12, 12, [40, 80, 120, 255]);
    let soft = ColorAdjust {
        blur_px: 4.0,
        ..ColorAdjust::IDENTITY
    };
    let out = filtered_square_premul(&src, &soft, 12).unwrap();
    assert!(out.chunks_exact(4).all(|px| px == [40, 80, 120, 255]));
}

#[test]
fn filtered_square_applies_the_adjustment() {
    let src = Raster::solid(4, 4, [200, 40, 90, 255]);
    let out = filtered_square_premul(&src, &preset(FilterId::Ricoh).adjust, 4).unwrap();
    for px in out.chunks_exact(4) {
        assert!(px[0].abs_diff(px[1]) <= 1 && px[1].abs_diff(px[2]) <= 1);
    }
}

#[test]
fn compose_without_fonts_still_frames_the_photo() {
    let mut r = offline_renderer();
    let req = RenderRequest {
        date_label: "03.07.2025".into(),
        caption: "美好的一天".into(),
        ..RenderRequest::default()
    };
    let out = r.compose(&Raster::solid(16, 16, [0, 0, 0, 255]), &req).unwrap();
    assert_eq!((out.width, out.height), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert_eq!(out.pixel(5, 5), Some([0xf8, 0xf5, 0xee, 255]));
    assert_eq!(out.pixel(540, 1300), Some([0xf8, 0xf5, 0xee, 255]));
    let [r, g, b, a] = out.pixel(540, 540).unwrap();
    assert!(r < 8 && g < 8 && b < 8 && a == 255);
}

#[test]
fn missing_configured_font_fails_construction() {
    let err = PolaroidRenderer::new(RenderConfig {
        caption_font: Some("no/such/font.ttf".into()),
        system_fonts: false,
        ..RenderConfig::default()
    })
    .err()
    .unwrap();
    assert!(err.to_string().starts_with("font error:"));
}

#[test]
fn invalid_config_fails_construction() {
    let err = PolaroidRenderer::new(RenderConfig {
        jpeg_quality: 0,
        system_fonts: false,
        ..RenderConfig::default()
    })
    .err()
    .unwrap();
    assert!(err.to_string().starts_with("validation error:"));
}
