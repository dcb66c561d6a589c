use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let raster = decode_raster(&png_bytes(img)).unwrap();
    assert_eq!((raster.width, raster.height), (1, 1));
    assert_eq!(raster.rgba8, vec![100, 50, 200, 128]);
}

#[test]
fn decode_rejects_garbage_and_empty_input() {
    assert!(decode_raster(b"definitely not an image").unwrap_err().is_decode());
    assert!(decode_raster(&[]).unwrap_err().is_decode());
}

#[test]
fn from_rgba8_checks_length() {
    assert!(Raster::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(Raster::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Raster::from_rgba8(0, 2, vec![]).is_err());
}

#[test]
fn pixel_is_bounds_checked() {
    let r = Raster::solid(3, 2, [1, 2, 3, 4]);
    assert_eq!(r.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(r.pixel(3, 0), None);
}

#[test]
fn jpeg_encode_decodes_back_with_same_size() {
    let r = Raster::solid(16, 8, [120, 130, 140, 255]);
    let jpeg = encode_raster(&r, OutputFormat::Jpeg, 95).unwrap();
    let back = decode_raster(&jpeg).unwrap();
    assert_eq!((back.width, back.height), (16, 8));
    let px = back.pixel(8, 4).unwrap();
    assert!((i16::from(px[0]) - 120).abs() <= 4);
}

#[test]
fn jpeg_quality_zero_is_rejected() {
    let r = Raster::solid(2, 2, [0, 0, 0, 255]);
    assert!(matches!(
        encode_raster(&r, OutputFormat::Jpeg, 0),
        Err(RetroSnapError::Validation(_))
    ));
}

#[test]
fn png_encode_is_lossless() {
    let r = Raster::solid(4, 4, [9, 8, 7, 6]);
    let png = encode_raster(&r, OutputFormat::Png, 0).unwrap();
    assert_eq!(decode_raster(&png).unwrap(), r);
}

#[test]
fn crop_copies_the_requested_region() {
    let mut rgba8 = Vec::new();
    for y in 0..3u8 {
        for x in 0..4u8 {
            rgba8.extend_from_slice(&[x, y, 0, 255]);
        }
    }
    let r = Raster::from_rgba8(4, 3, rgba8).unwrap();
    let c = r.crop(1, 1, 2, 2).unwrap();
    assert_eq!((c.width, c.height), (2, 2));
    assert_eq!(c.pixel(0, 0), Some([1, 1, 0, 255]));
    assert_eq!(c.pixel(1, 1), Some([2, 2, 0, 255]));
}

#[test]
fn crop_outside_the_raster_is_rejected() {
    let r = Raster::solid(4, 3, [0, 0, 0, 255]);
    assert!(r.crop(3, 0, 2, 1).is_err());
    assert!(r.crop(0, 2, 1, 2).is_err());
    assert!(r.crop(u32::MAX, 0, 2, 1).is_err());
    assert!(r.crop(0, 0, 0, 1).is_err());
}
