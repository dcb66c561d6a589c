use super::*;

#[test]
fn preview_is_square_at_the_requested_side() {
    let src = Raster::solid(40, 24, [120, 130, 140, 255]);
    let out = render_preview(&src, FilterId::Fuji, 32).unwrap();
    assert_eq!((out.width, out.height), (32, 32));
}

#[test]
fn vignette_presets_darken_preview_corners() {
    let src = Raster::solid(64, 64, [200, 200, 200, 255]);
    let cinema = render_preview(&src, FilterId::Cinema, 64).unwrap();
    let center = cinema.pixel(32, 32).unwrap();
    let corner = cinema.pixel(0, 0).unwrap();
    assert!(corner[0] + 20 < center[0], "{corner:?} vs {center:?}");

    let portra = render_preview(&src, FilterId::Portra, 64).unwrap();
    let c = portra.pixel(0, 0).unwrap();
    let m = portra.pixel(32, 32).unwrap();
    assert!(c[0].abs_diff(m[0]) <= 2);
}

#[test]
fn mono_preview_has_no_color() {
    let src = Raster::solid(16, 16, [220, 60, 30, 255]);
    let out = render_preview(&src, FilterId::Ricoh, 16).unwrap();
    let [r, g, b, _] = out.pixel(8, 8).unwrap();
    assert!(r.abs_diff(g) <= 2 && g.abs_diff(b) <= 2);
}

#[test]
fn zero_or_oversized_side_is_rejected() {
    let src = Raster::solid(4, 4, [0, 0, 0, 255]);
    assert!(render_preview(&src, FilterId::Kodak, 0).is_err());
    assert!(render_preview(&src, FilterId::Kodak, 70_000).is_err());
}
