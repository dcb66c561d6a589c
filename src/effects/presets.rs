use std::str::FromStr;

use crate::{
    effects::adjust::ColorAdjust,
    foundation::error::{RetroSnapError, RetroSnapResult},
};

/// Identifier of a built-in film preset.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterId {
    /// Kodak Gold.
    #[default]
    Kodak,
    /// Fuji Blue.
    Fuji,
    /// Portra 400.
    Portra,
    /// GR2 Mono.
    Ricoh,
    /// Lomo Red.
    Lomo,
    /// Cinema.
    Cinema,
}

impl FilterId {
    /// All ids in display order.
    pub const ALL: [FilterId; 6] = [
        FilterId::Kodak,
        FilterId::Fuji,
        FilterId::Portra,
        FilterId::Ricoh,
        FilterId::Lomo,
        FilterId::Cinema,
    ];

    /// Lower-case id string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kodak => "kodak",
            Self::Fuji => "fuji",
            Self::Portra => "portra",
            Self::Ricoh => "ricoh",
            Self::Lomo => "lomo",
            Self::Cinema => "cinema",
        }
    }

    /// The preset this id names.
    pub fn preset(self) -> &'static FilterPreset {
        preset(self)
    }
}

impl std::fmt::Display for FilterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterId {
    type Err = RetroSnapError;

    fn from_str(s: &str) -> RetroSnapResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RetroSnapError::validation(format!(
                    "unknown filter '{s}' (expected one of kodak, fuji, portra, ricoh, lomo, cinema)"
                ))
            })
    }
}

/// Tint of the thick frame some presets draw around the photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderTint {
    /// Translucent red.
    Red,
    /// Near-black.
    Dark,
}

/// Immutable description of a film look.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FilterPreset {
    /// Stable id.
    pub id: FilterId,
    /// Display name.
    pub name: &'static str,
    /// Color adjustment applied to the photo.
    pub adjust: ColorAdjust,
    /// Darken the photo toward its corners.
    pub vignette: bool,
    /// Optional frame drawn over the photo edge.
    pub border: Option<BorderTint>,
}

const PRESETS: [FilterPreset; 6] = [
    FilterPreset {
        id: FilterId::Kodak,
        name: "Kodak Gold",
        adjust: ColorAdjust {
            sepia: 0.2,
            contrast: 1.1,
            saturate: 1.2,
            brightness: 1.05,
            ..ColorAdjust::IDENTITY
        },
        vignette: false,
        border: None,
    },
    FilterPreset {
        id: FilterId::Fuji,
        name: "Fuji Blue",
        adjust: ColorAdjust {
            contrast: 1.05,
            brightness: 1.1,
            saturate: 0.9,
            hue_rotate_deg: -10.0,
            ..ColorAdjust::IDENTITY
        },
        vignette: false,
        border: None,
    },
    FilterPreset {
        id: FilterId::Portra,
        name: "Portra 400",
        adjust: ColorAdjust {
            sepia: 0.1,
            saturate: 0.9,
            contrast: 0.95,
            brightness: 1.05,
            hue_rotate_deg: 5.0,
            ..ColorAdjust::IDENTITY
        },
        vignette: false,
        border: None,
    },
    FilterPreset {
        id: FilterId::Ricoh,
        name: "GR2 Mono",
        adjust: ColorAdjust {
            grayscale: 1.0,
            contrast: 1.3,
            brightness: 0.95,
            blur_px: 0.5,
            ..ColorAdjust::IDENTITY
        },
        vignette: true,
        border: None,
    },
    FilterPreset {
        id: FilterId::Lomo,
        name: "Lomo Red",
        adjust: ColorAdjust {
            saturate: 1.4,
            contrast: 1.2,
            sepia: 0.2,
            ..ColorAdjust::IDENTITY
        },
        vignette: true,
        border: Some(BorderTint::Red),
    },
    FilterPreset {
        id: FilterId::Cinema,
        name: "Cinema",
        adjust: ColorAdjust {
            contrast: 1.1,
            saturate: 1.1,
            brightness: 0.9,
            sepia: 0.1,
            ..ColorAdjust::IDENTITY
        },
        vignette: true,
        border: None,
    },
];

/// All presets in display order.
pub fn presets() -> &'static [FilterPreset] {
    &PRESETS
}

/// Preset for `id`.
pub fn preset(id: FilterId) -> &'static FilterPreset {
    match id {
        FilterId::Kodak => &PRESETS[0],
        FilterId::Fuji => &PRESETS[1],
        FilterId::Portra => &PRESETS[2],
        FilterId::Ricoh => &PRESETS[3],
        FilterId::Lomo => &PRESETS[4],
        FilterId::Cinema => &PRESETS[5],
    }
}

impl FilterPreset {
    /// CSS `filter` string for a web preview of this preset.
    pub fn css_filter(&self) -> String {
        self.adjust.css_filter()
    }

    /// Whether the date stamp is drawn in the warm orange ink.
    pub fn warm_date_stamp(&self) -> bool {
        matches!(self.id, FilterId::Kodak | FilterId::Lomo)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/presets.rs"]
mod tests;
