use rand::Rng;

use crate::{
    assets::decode::{Raster, decode_raster},
    classify::hsv::Hsv,
};

/// Semantic bucket used to pick a caption.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// People; skin-tone dominated center.
    Portrait,
    /// Landscapes, sky, greenery.
    Scenery,
    /// Vivid warm dishes.
    Food,
    /// Everyday moments. Only reachable through [`Category::next`].
    Life,
    /// Objects and experiments. Only reachable through [`Category::next`].
    Creative,
    /// Neutral fallback.
    #[default]
    General,
}

impl Category {
    /// Order used when the user taps through categories.
    pub const CYCLE: [Category; 6] = [
        Category::General,
        Category::Portrait,
        Category::Scenery,
        Category::Food,
        Category::Life,
        Category::Creative,
    ];

    /// Next category in [`Category::CYCLE`], wrapping around.
    pub fn next(self) -> Self {
        let i = Self::CYCLE.iter().position(|c| *c == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }

    /// Upper-case label, e.g. `"SCENERY"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "PORTRAIT",
            Self::Scenery => "SCENERY",
            Self::Food => "FOOD",
            Self::Life => "LIFE",
            Self::Creative => "CREATIVE",
            Self::General => "GENERAL",
        }
    }

    /// Short label shown on the category chip.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Portrait => "人像",
            Self::Scenery => "风景",
            Self::Food => "美食",
            Self::Life => "生活",
            Self::Creative => "创意",
            Self::General => "通用",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side length of the square grid the center crop is resampled to.
pub const SAMPLE_GRID: u32 = 100;

/// Fraction of each dimension kept by the center crop.
const CENTER_FRACTION: f32 = 0.6;

/// Classify encoded image bytes. Never fails: undecodable input is [`Category::General`].
#[tracing::instrument(skip(bytes, rng), fields(len = bytes.len()))]
pub fn classify_bytes<R: Rng + ?Sized>(bytes: &[u8], rng: &mut R) -> Category {
    match decode_raster(bytes) {
        Ok(raster) => classify(&raster, rng),
        Err(e) => {
            tracing::debug!(error = %e, "classifier falling back to GENERAL");
            Category::General
        }
    }
}

/// Classify a decoded raster by the mean color of its center.
pub fn classify<R: Rng + ?Sized>(raster: &Raster, rng: &mut R) -> Category {
    let Some([r, g, b]) = center_mean_rgb(raster) else {
        return Category::General;
    };
    let hsv = Hsv::from_rgb(r, g, b);
    let category = classify_hsv(hsv, rng);
    tracing::debug!(h = hsv.h, s = hsv.s, v = hsv.v, %category, "classified");
    category
}

/// Apply the ordered threshold rules to a mean color.
///
/// The skin-tone band is a coin flip between PORTRAIT and GENERAL drawn from `rng`.
pub fn classify_hsv<R: Rng + ?Sized>(hsv: Hsv, rng: &mut R) -> Category {
    let Hsv { h, s, v } = hsv;

    if h > 0.25 && h < 0.7 && s > 0.25 && v > 0.4 {
        return Category::Scenery;
    }
    if (h < 0.15 || h > 0.9) && s > 0.55 && v > 0.3 {
        return Category::Food;
    }
    if (h < 0.12 || h > 0.95) && s > 0.15 && s < 0.5 && v > 0.35 {
        return if rng.random_bool(0.5) {
            Category::Portrait
        } else {
            Category::General
        };
    }
    Category::General
}

/// Mean RGB (0..=255 scale) of the center 60% region resampled to a 100x100 grid.
///
/// Samples are alpha-weighted, so transparent areas read as black.
pub fn center_mean_rgb(raster: &Raster) -> Option<[f32; 3]> {
    let (w, h) = (raster.width, raster.height);
    if w == 0 || h == 0 {
        return None;
    }

    let cw = (((w as f32) * CENTER_FRACTION).round().max(1.0) as u32).min(w);
    let ch = (((h as f32) * CENTER_FRACTION).round().max(1.0) as u32).min(h);
    let x0 = (((w as f32) * 0.2).floor() as u32).min(w - cw);
    let y0 = (((h as f32) * 0.2).floor() as u32).min(h - ch);

    let center = raster.crop(x0, y0, cw, ch).ok()?.into_image().ok()?;
    let grid = image::imageops::resize(
        &center,
        SAMPLE_GRID,
        SAMPLE_GRID,
        image::imageops::FilterType::Triangle,
    );

    let mut total = [0.0f64; 3];
    let mut count = 0u64;
    for px in grid.pixels() {
        let a = f64::from(px[3]) / 255.0;
        total[0] += f64::from(px[0]) * a;
        total[1] += f64::from(px[1]) * a;
        total[2] += f64::from(px[2]) * a;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some([
        (total[0] / n) as f32,
        (total[1] / n) as f32,
        (total[2] / n) as f32,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/classify/categorizer.rs"]
mod tests;
