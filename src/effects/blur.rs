use crate::foundation::error::{RetroSnapError, RetroSnapResult};

/// Kernel radius covering three standard deviations of a gaussian with `sigma`.
pub fn radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Separable gaussian blur over premultiplied RGBA8, edges clamped.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> RetroSnapResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| RetroSnapError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(RetroSnapError::render(format!(
            "blur source is {} bytes, expected {expected_len} for {width}x{height}",
            src.len()
        )));
    }
    let radius = radius_for_sigma(sigma);
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let (w, h) = (width as usize, height as usize);
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    convolve(src, &mut tmp, w, h, &kernel, Axis::Rows);
    convolve(&tmp, &mut out, w, h, &kernel, Axis::Columns);
    Ok(out)
}

/// Normalized gaussian taps in Q16 that sum to exactly `1 << 16`.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> RetroSnapResult<Vec<u32>> {
    let r = i64::from(radius);
    let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
    let taps: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_sigma_sq).exp())
        .collect();
    let total: f64 = taps.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(RetroSnapError::render("gaussian kernel sum is zero"));
    }

    let mut kernel: Vec<u32> = taps
        .iter()
        .map(|t| (t / total * f64::from(ONE_Q16)).round() as u32)
        .collect();
    // Rounding drift goes to the center tap.
    let drift = i64::from(ONE_Q16) - kernel.iter().map(|&k| i64::from(k)).sum::<i64>();
    let center = &mut kernel[radius as usize];
    *center = (i64::from(*center) + drift).clamp(0, i64::from(ONE_Q16)) as u32;
    Ok(kernel)
}

const ONE_Q16: u32 = 1 << 16;

#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Columns,
}

/// One 1-D pass of `kernel` along `axis`, clamping samples at the buffer edge.
fn convolve(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    kernel: &[u32],
    axis: Axis,
) {
    let radius = kernel.len() / 2;
    let (lines, len, step) = match axis {
        Axis::Rows => (height, width, 1),
        Axis::Columns => (width, height, width),
    };
    for line in 0..lines {
        let base = match axis {
            Axis::Rows => line * width,
            Axis::Columns => line,
        };
        for i in 0..len {
            let mut acc = [0u64; 4];
            for (k, &weight) in kernel.iter().enumerate() {
                let j = (i + k).saturating_sub(radius).min(len - 1);
                let at = (base + j * step) * 4;
                for (sum, &v) in acc.iter_mut().zip(&src[at..at + 4]) {
                    *sum += u64::from(weight) * u64::from(v);
                }
            }
            let at = (base + i * step) * 4;
            for (d, sum) in dst[at..at + 4].iter_mut().zip(acc) {
                *d = ((sum + u64::from(ONE_Q16 / 2)) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
