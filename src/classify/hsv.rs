/// Hue/saturation/value triple, every component in `[0, 1]` (hue in `[0, 1)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a full turn.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Value (brightness of the max channel).
    pub v: f32,
}

impl Hsv {
    /// Convert an RGB triple with channels on the 0..=255 scale.
    ///
    /// Inputs may be fractional (means of many samples); they are clamped to `[0, 255]`.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let r = r.clamp(0.0, 255.0) / 255.0;
        let g = g.clamp(0.0, 255.0) / 255.0;
        let b = b.clamp(0.0, 255.0) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let v = max;
        let s = if max == 0.0 { 0.0 } else { d / max };

        let h = if d == 0.0 {
            0.0
        } else if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let mut h = h / 6.0;
        if h >= 1.0 {
            h -= 1.0;
        }

        Self { h, s, v }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/hsv.rs"]
mod tests;
