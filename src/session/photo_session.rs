use rand::Rng;

use crate::{
    caption::{
        library::{CaptionSuggestion, FALLBACK_CAPTION, caption_for},
        placement::CaptionPlacement,
    },
    classify::categorizer::Category,
    effects::presets::{FilterId, FilterPreset},
    render::polaroid::RenderRequest,
};

/// Editing state of one capture: filter, caption, category and caption placement.
///
/// Created per capture and dropped (or [`reset`](PhotoSession::reset)) afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhotoSession {
    /// Selected film preset.
    pub filter: FilterId,
    /// Caption text.
    pub caption: String,
    /// Category the caption belongs to.
    pub category: Category,
    /// Caption anchor and scale.
    pub placement: CaptionPlacement,
}

impl Default for PhotoSession {
    fn default() -> Self {
        Self {
            filter: FilterId::default(),
            caption: FALLBACK_CAPTION.to_owned(),
            category: Category::General,
            placement: CaptionPlacement::default(),
        }
    }
}

impl PhotoSession {
    /// Fresh session: Kodak Gold, fallback caption, GENERAL, default placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for the selected filter.
    pub fn preset(&self) -> &'static FilterPreset {
        self.filter.preset()
    }

    /// Take a classifier suggestion and put the caption back in its default spot.
    pub fn apply_suggestion(&mut self, suggestion: CaptionSuggestion) {
        self.caption = suggestion.text;
        self.category = suggestion.category;
        self.placement = CaptionPlacement::default();
    }

    /// Switch film preset.
    pub fn select_filter(&mut self, filter: FilterId) {
        self.filter = filter;
    }

    /// Pick another caption from the current category.
    pub fn shuffle_caption<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        self.caption = caption_for(self.category, rng).to_owned();
        &self.caption
    }

    /// Move to the next category and pick a caption from it.
    pub fn cycle_category<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Category {
        self.category = self.category.next();
        self.caption = caption_for(self.category, rng).to_owned();
        tracing::debug!(category = %self.category, caption = %self.caption, "category cycled");
        self.category
    }

    /// Drag the caption by normalized deltas; the anchor stays in the drag area.
    pub fn drag_caption(&mut self, dx: f32, dy: f32) {
        self.placement.drag_by(dx, dy);
    }

    /// Resize the caption. See [`CaptionPlacement::set_scale`].
    pub fn set_caption_scale(&mut self, scale: f32) {
        self.placement.set_scale(scale);
    }

    /// Replace the caption text verbatim.
    pub fn set_caption_text(&mut self, text: impl Into<String>) {
        self.caption = text.into();
    }

    /// Back to a fresh session. The selected filter is kept.
    pub fn reset(&mut self) {
        *self = Self {
            filter: self.filter,
            ..Self::default()
        };
    }

    /// Render request for the current state.
    pub fn request(&self, date_label: impl Into<String>) -> RenderRequest {
        RenderRequest {
            date_label: date_label.into(),
            filter: self.filter,
            caption: self.caption.clone(),
            placement: self.placement,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/photo_session.rs"]
mod tests;
