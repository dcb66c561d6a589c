use std::fmt::Write as _;

/// 4x5 affine color matrix over straight RGBA in `[0, 1]`, row-major.
///
/// `out = M * [r, g, b, a, 1]`.
pub type ColorMatrix = [f32; 20];

/// Identity [`ColorMatrix`].
pub const IDENTITY_MATRIX: ColorMatrix = [
    1.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

/// Structured film-look adjustment, shared by the composite and preview paths.
///
/// Amounts follow the CSS filter functions of the same names.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorAdjust {
    /// `grayscale()` amount in `[0, 1]`.
    pub grayscale: f32,
    /// `sepia()` amount in `[0, 1]`.
    pub sepia: f32,
    /// `contrast()` multiplier.
    pub contrast: f32,
    /// `saturate()` multiplier.
    pub saturate: f32,
    /// `brightness()` multiplier.
    pub brightness: f32,
    /// `hue-rotate()` angle in degrees.
    pub hue_rotate_deg: f32,
    /// `blur()` standard deviation in pixels.
    pub blur_px: f32,
}

impl Default for ColorAdjust {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorAdjust {
    /// Adjustment that leaves pixels unchanged.
    pub const IDENTITY: Self = Self {
        grayscale: 0.0,
        sepia: 0.0,
        contrast: 1.0,
        saturate: 1.0,
        brightness: 1.0,
        hue_rotate_deg: 0.0,
        blur_px: 0.0,
    };

    /// Compose grayscale, sepia, contrast, saturate, brightness and hue-rotate
    /// (applied in that order) into one matrix.
    pub fn color_matrix(&self) -> ColorMatrix {
        let mut m = grayscale_matrix(self.grayscale);
        m = mul_color_matrix(sepia_matrix(self.sepia), m);
        m = mul_color_matrix(contrast_matrix(self.contrast), m);
        m = mul_color_matrix(saturate_matrix(self.saturate), m);
        m = mul_color_matrix(brightness_matrix(self.brightness), m);
        mul_color_matrix(hue_rotate_matrix(self.hue_rotate_deg), m)
    }

    /// Whether a blur pass is needed.
    pub fn has_blur(&self) -> bool {
        self.blur_px.is_finite() && self.blur_px > 0.0
    }

    /// CSS `filter` value for a web preview, functions in composite order.
    ///
    /// Functions at their neutral value are omitted; all neutral yields `"none"`.
    pub fn css_filter(&self) -> String {
        let mut out = String::new();
        let mut push = |name: &str, v: f32, neutral: f32, unit: &str| {
            if (v - neutral).abs() > 1e-6 {
                if !out.is_empty() {
                    out.push(' ');
                }
                let _ = write!(out, "{name}({v}{unit})");
            }
        };
        push("grayscale", self.grayscale, 0.0, "");
        push("sepia", self.sepia, 0.0, "");
        push("contrast", self.contrast, 1.0, "");
        push("saturate", self.saturate, 1.0, "");
        push("brightness", self.brightness, 1.0, "");
        push("hue-rotate", self.hue_rotate_deg, 0.0, "deg");
        push("blur", self.blur_px, 0.0, "px");
        if out.is_empty() {
            out.push_str("none");
        }
        out
    }
}

fn amount(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

fn factor(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 1.0 }
}

fn rgb_matrix(rows: [[f32; 3]; 3], bias: f32) -> ColorMatrix {
    let mut m = IDENTITY_MATRIX;
    for (row, coeffs) in rows.iter().enumerate() {
        m[row * 5..row * 5 + 3].copy_from_slice(coeffs);
        m[row * 5 + 4] = bias;
    }
    m
}

pub(crate) fn grayscale_matrix(g: f32) -> ColorMatrix {
    let k = 1.0 - amount(g);
    rgb_matrix(
        [
            [0.2126 + 0.7874 * k, 0.7152 - 0.7152 * k, 0.0722 - 0.0722 * k],
            [0.2126 - 0.2126 * k, 0.7152 + 0.2848 * k, 0.0722 - 0.0722 * k],
            [0.2126 - 0.2126 * k, 0.7152 - 0.7152 * k, 0.0722 + 0.9278 * k],
        ],
        0.0,
    )
}

pub(crate) fn sepia_matrix(s: f32) -> ColorMatrix {
    let k = 1.0 - amount(s);
    rgb_matrix(
        [
            [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
            [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
            [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
        ],
        0.0,
    )
}

pub(crate) fn saturate_matrix(s: f32) -> ColorMatrix {
    let s = factor(s);
    rgb_matrix(
        [
            [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
            [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
            [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
        ],
        0.0,
    )
}

pub(crate) fn contrast_matrix(c: f32) -> ColorMatrix {
    let c = factor(c);
    rgb_matrix(
        [[c, 0.0, 0.0], [0.0, c, 0.0], [0.0, 0.0, c]],
        0.5 - 0.5 * c,
    )
}

pub(crate) fn brightness_matrix(b: f32) -> ColorMatrix {
    let b = factor(b);
    rgb_matrix([[b, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, b]], 0.0)
}

pub(crate) fn hue_rotate_matrix(deg: f32) -> ColorMatrix {
    let deg = if deg.is_finite() { deg } else { 0.0 };
    let (sin, cos) = deg.to_radians().sin_cos();
    rgb_matrix(
        [
            [
                0.213 + cos * 0.787 - sin * 0.213,
                0.715 - cos * 0.715 - sin * 0.715,
                0.072 - cos * 0.072 + sin * 0.928,
            ],
            [
                0.213 - cos * 0.213 + sin * 0.143,
                0.715 + cos * 0.285 + sin * 0.140,
                0.072 - cos * 0.072 - sin * 0.283,
            ],
            [
                0.213 - cos * 0.213 - sin * 0.787,
                0.715 - cos * 0.715 + sin * 0.715,
                0.072 + cos * 0.928 + sin * 0.072,
            ],
        ],
        0.0,
    )
}

/// Compose two matrices so the result applies `b` first, then `a`.
pub(crate) fn mul_color_matrix(a: ColorMatrix, b: ColorMatrix) -> ColorMatrix {
    let mut out = [0.0f32; 20];
    for row in 0..4 {
        let base = row * 5;
        for col in 0..4 {
            let mut v = 0.0f32;
            for k in 0..4 {
                v += a[base + k] * b[k * 5 + col];
            }
            out[base + col] = v;
        }
        out[base + 4] = a[base + 4]
            + a[base] * b[4]
            + a[base + 1] * b[9]
            + a[base + 2] * b[14]
            + a[base + 3] * b[19];
    }
    out
}

/// Apply `m` to one straight RGBA8 pixel.
pub fn apply_matrix_rgba8(px: [u8; 4], m: &ColorMatrix) -> [u8; 4] {
    let [r, g, b, a] = px.map(|c| f32::from(c) / 255.0);
    let row = |i: usize| {
        let base = i * 5;
        (m[base] * r + m[base + 1] * g + m[base + 2] * b + m[base + 3] * a + m[base + 4])
            .clamp(0.0, 1.0)
    };
    [row(0), row(1), row(2), row(3)].map(|v| (v * 255.0).round() as u8)
}

/// Apply `m` in place to premultiplied RGBA8, going through straight alpha per pixel.
pub(crate) fn color_matrix_rgba8_premul_in_place(rgba: &mut [u8], m: &ColorMatrix) {
    for px in rgba.chunks_exact_mut(4) {
        let pa = f32::from(px[3]) / 255.0;
        let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
        let r = f32::from(px[0]) / 255.0 * inv_a;
        let g = f32::from(px[1]) / 255.0 * inv_a;
        let b = f32::from(px[2]) / 255.0 * inv_a;

        let out = |i: usize| {
            let base = i * 5;
            (m[base] * r + m[base + 1] * g + m[base + 2] * b + m[base + 3] * pa + m[base + 4])
                .clamp(0.0, 1.0)
        };
        let out_a = out(3);
        let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        px[0] = to_u8(out(0) * out_a);
        px[1] = to_u8(out(1) * out_a);
        px[2] = to_u8(out(2) * out_a);
        px[3] = to_u8(out_a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/adjust.rs"]
mod tests;
