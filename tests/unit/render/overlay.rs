use super::*;

#[test]
fn vignette_is_clear_in_the_middle_and_dark_in_the_corners() {
    let side = 100u32;
    let v = vignette_premul(side);
    let alpha = |x: u32, y: u32| v[((y * side + x) * 4 + 3) as usize];

    assert_eq!(alpha(50, 50), 0);
    assert_eq!(alpha(60, 60), 0);
    assert!(alpha(0, 0) > alpha(10, 10));
    assert!(alpha(10, 10) > 0);
    assert!(alpha(0, 0) <= (VIGNETTE_ALPHA * 255.0).round() as u8);
    assert!(v.chunks_exact(4).all(|px| px[..3] == [0, 0, 0]));
}

#[test]
fn vignette_is_radially_symmetric() {
    let side = 64u32;
    let v = vignette_premul(side);
    let alpha = |x: u32, y: u32| v[((y * side + x) * 4 + 3) as usize];
    assert_eq!(alpha(0, 0), alpha(63, 63));
    assert_eq!(alpha(0, 63), alpha(63, 0));
    assert_eq!(alpha(5, 32), alpha(32, 5));
}

#[test]
fn frame_ring_spans_both_sides_of_the_edge() {
    let ring = frame_ring(Rect::new(70.0, 70.0, 1010.0, 1010.0), 30.0);
    let bbox = kurbo::Shape::bounding_box(&ring);
    assert_eq!((bbox.x0, bbox.y0, bbox.x1, bbox.y1), (55.0, 55.0, 1025.0, 1025.0));

    assert_ne!(kurbo::Shape::winding(&ring, (60.0, 500.0).into()), 0);
    assert_ne!(kurbo::Shape::winding(&ring, (80.0, 500.0).into()), 0);
    assert_eq!(kurbo::Shape::winding(&ring, (540.0, 540.0).into()), 0);
    assert_eq!(kurbo::Shape::winding(&ring, (40.0, 500.0).into()), 0);
}

#[test]
fn premul_pixmap_checks_dimensions() {
    assert!(pixmap_from_premul_bytes(&[0u8; 16], 2, 2).is_ok());
    assert!(pixmap_from_premul_bytes(&[0u8; 15], 2, 2).is_err());
    assert!(pixmap_from_premul_bytes(&[], 70_000, 0).is_err());
}

#[test]
fn filled_ring_leaves_the_middle_untouched() {
    let mut ctx = vello_cpu::RenderContext::new(40, 40);
    fill_path(
        &mut ctx,
        &frame_ring(Rect::new(10.0, 10.0, 30.0, 30.0), 4.0),
        Rgba8::rgb(255, 0, 0),
    );
    let mut pixmap = vello_cpu::Pixmap::new(40, 40);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    let data = pixmap.data_as_u8_slice();
    let px = |x: usize, y: usize| &data[(y * 40 + x) * 4..(y * 40 + x) * 4 + 4];

    assert_eq!(px(10, 20), &[255, 0, 0, 255]);
    assert_eq!(px(20, 20), &[0, 0, 0, 0]);
    assert_eq!(px(2, 2), &[0, 0, 0, 0]);
}
