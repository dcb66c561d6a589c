use std::io::Cursor;

use crate::foundation::error::{RetroSnapError, RetroSnapResult};

/// Decoded bitmap in straight-alpha RGBA8, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub rgba8: Vec<u8>,
}

impl Raster {
    /// Wrap raw straight RGBA8 bytes, checking the buffer length.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> RetroSnapResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| RetroSnapError::validation("raster size overflow"))?;
        if width == 0 || height == 0 {
            return Err(RetroSnapError::validation("raster must be non-empty"));
        }
        if rgba8.len() != expected {
            return Err(RetroSnapError::validation(format!(
                "raster byte length {} does not match {width}x{height}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// A raster filled with one straight RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let n = (width as usize) * (height as usize);
        let mut rgba8 = Vec::with_capacity(n * 4);
        for _ in 0..n {
            rgba8.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            rgba8,
        }
    }

    /// Straight RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy the `width x height` region with its top-left corner at `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> RetroSnapResult<Raster> {
        let rgba8 = crop_rgba8(&self.rgba8, self.width, self.height, (x, y, width, height))?;
        Raster::from_rgba8(width, height, rgba8)
    }

    pub(crate) fn into_image(self) -> RetroSnapResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8)
            .ok_or_else(|| RetroSnapError::validation("raster buffer does not match dimensions"))
    }

    pub(crate) fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba8: img.into_raw(),
        }
    }
}

/// Copy a `(x, y, width, height)` region out of a tightly packed 4-byte-per-pixel buffer.
///
/// Works for straight and premultiplied data alike.
pub(crate) fn crop_rgba8(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    (x, y, width, height): (u32, u32, u32, u32),
) -> RetroSnapResult<Vec<u8>> {
    let fits = |origin: u32, extent: u32, limit: u32| {
        origin.checked_add(extent).is_some_and(|end| end <= limit)
    };
    if !fits(x, width, src_width) || !fits(y, height, src_height) {
        return Err(RetroSnapError::validation(format!(
            "crop {width}x{height}+{x}+{y} exceeds {src_width}x{src_height}"
        )));
    }
    let stride = (src_width as usize) * 4;
    let row = (width as usize) * 4;
    let mut out = Vec::with_capacity(row * height as usize);
    for yy in y..y + height {
        let start = (yy as usize) * stride + (x as usize) * 4;
        let line = src.get(start..start + row).ok_or_else(|| {
            RetroSnapError::validation("pixel buffer shorter than its dimensions")
        })?;
        out.extend_from_slice(line);
    }
    Ok(out)
}

/// Output container for encoded composites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG at the configured quality.
    #[default]
    Jpeg,
    /// Lossless PNG.
    Png,
}

impl OutputFormat {
    /// Conventional file extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Decode encoded image bytes (JPEG, PNG, ...) into a straight RGBA8 [`Raster`].
pub fn decode_raster(bytes: &[u8]) -> RetroSnapResult<Raster> {
    if bytes.is_empty() {
        return Err(RetroSnapError::decode("image bytes are empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| RetroSnapError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(RetroSnapError::decode("decoded image has no pixels"));
    }
    Ok(Raster::from_image(rgba))
}

/// Encode a raster. JPEG drops alpha; `quality` is ignored for PNG.
pub fn encode_raster(
    raster: &Raster,
    format: OutputFormat,
    quality: u8,
) -> RetroSnapResult<Vec<u8>> {
    let img = raster.clone().into_image()?;
    let mut buf = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            if !(1..=100).contains(&quality) {
                return Err(RetroSnapError::validation(
                    "jpeg quality must be within 1..=100",
                ));
            }
            let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut buf), quality);
            rgb.write_with_encoder(encoder)
                .map_err(|e| RetroSnapError::encode(format!("encode jpeg: {e}")))?;
        }
        OutputFormat::Png => {
            let encoder = image::codecs::png::PngEncoder::new(Cursor::new(&mut buf));
            img.write_with_encoder(encoder)
                .map_err(|e| RetroSnapError::encode(format!("encode png: {e}")))?;
        }
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
