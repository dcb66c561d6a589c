/// Smallest caption scale multiplier accepted by [`CaptionPlacement`].
pub const MIN_CAPTION_SCALE: f32 = 0.1;

/// Default normalized anchor `(x, y)`; this `y` means "not dragged".
pub const DEFAULT_CAPTION_POS: (f32, f32) = (0.5, 0.85);

const DRAG_X: (f32, f32) = (0.1, 0.9);
const DRAG_Y: (f32, f32) = (0.05, 0.95);

/// Normalized caption anchor and size multiplier.
///
/// `x` and `y` are fractions of the output frame width and height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CaptionPlacement {
    /// Horizontal anchor fraction.
    pub x: f32,
    /// Vertical anchor fraction (top of the text).
    pub y: f32,
    /// Font size multiplier.
    pub scale: f32,
}

impl Default for CaptionPlacement {
    fn default() -> Self {
        Self {
            x: DEFAULT_CAPTION_POS.0,
            y: DEFAULT_CAPTION_POS.1,
            scale: 1.0,
        }
    }
}

impl CaptionPlacement {
    /// Placement at an explicit position with unit scale, clamped to the drag area.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            scale: 1.0,
        }
        .clamped()
    }

    /// Same placement with the anchor moved into the drag area.
    ///
    /// A non-finite coordinate falls back to its default.
    pub fn clamped(self) -> Self {
        let axis = |v: f32, default: f32, (lo, hi): (f32, f32)| {
            if v.is_finite() { v.clamp(lo, hi) } else { default }
        };
        Self {
            x: axis(self.x, DEFAULT_CAPTION_POS.0, DRAG_X),
            y: axis(self.y, DEFAULT_CAPTION_POS.1, DRAG_Y),
            scale: self.scale,
        }
    }

    /// Same placement with a new scale, see [`CaptionPlacement::set_scale`].
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.set_scale(scale);
        self
    }

    /// Set the scale. Non-finite values become 1.0; anything below
    /// [`MIN_CAPTION_SCALE`] is raised to it.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = sanitize_scale(scale);
    }

    /// Scale as the renderer uses it.
    pub fn effective_scale(&self) -> f32 {
        sanitize_scale(self.scale)
    }

    /// Move the anchor by normalized deltas, clamped to the drag area.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        let dx = if dx.is_finite() { dx } else { 0.0 };
        let dy = if dy.is_finite() { dy } else { 0.0 };
        self.x = (self.x + dx).clamp(DRAG_X.0, DRAG_X.1);
        self.y = (self.y + dy).clamp(DRAG_Y.0, DRAG_Y.1);
    }

    /// Whether `y` differs from the default, i.e. the caption was moved off its strip.
    pub fn is_dragged(&self) -> bool {
        (self.y - DEFAULT_CAPTION_POS.1).abs() > 1e-6
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if !scale.is_finite() {
        1.0
    } else {
        scale.max(MIN_CAPTION_SCALE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/placement.rs"]
mod tests;
