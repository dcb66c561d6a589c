use std::path::Path;

use crate::foundation::error::{RetroSnapError, RetroSnapResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Which face a piece of text is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Handwritten/cursive face for the caption.
    Caption,
    /// Bold monospace face for the date stamp.
    DateStamp,
}

/// Font registered for one [`FontRole`]: the family Parley resolves and the face index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedFont {
    pub(crate) family: String,
    pub(crate) index: u32,
}

impl LoadedFont {
    /// Family name used in layout font stacks.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Face index within the registered font file or collection.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl FontRole {
    /// Characters an installed face must map before it is used for this role.
    pub fn coverage_sample(self) -> &'static str {
        match self {
            Self::Caption => "美好的一天",
            Self::DateStamp => "0123456789.",
        }
    }
}

/// Shaped single-line text ready to be drawn.
///
/// Each glyph run carries the face it was shaped with, so drawing never mixes faces.
pub struct ShapedText {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
}

impl ShapedText {
    /// Advance width of the widest line in pixels.
    pub fn width(&self) -> f32 {
        self.layout.width()
    }

    /// Total layout height in pixels.
    pub fn height(&self) -> f32 {
        self.layout.height()
    }

    /// Distance from the layout top to the first line's alphabetic baseline.
    pub fn first_baseline(&self) -> f32 {
        self.layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0)
    }

    /// Number of glyphs that fell back to `.notdef` because the face lacks the character.
    pub fn missing_glyphs(&self) -> usize {
        let mut missing = 0;
        for line in self.layout.lines() {
            for item in line.items() {
                if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                    missing += run.positioned_glyphs().filter(|g| g.id == 0).count();
                }
            }
        }
        missing
    }
}

/// Stateful helper owning Parley contexts and the fonts registered for each role.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    caption: Option<LoadedFont>,
    date_stamp: Option<LoadedFont>,
    system_db: Option<usvg::fontdb::Database>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct an engine with fresh Parley contexts and no fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            caption: None,
            date_stamp: None,
            system_db: None,
        }
    }

    /// Font currently registered for `role`, if any.
    pub fn font(&self, role: FontRole) -> Option<&LoadedFont> {
        match role {
            FontRole::Caption => self.caption.as_ref(),
            FontRole::DateStamp => self.date_stamp.as_ref(),
        }
    }

    /// Register raw font bytes (face `index` of a collection) for `role`.
    pub fn register(
        &mut self,
        role: FontRole,
        font_bytes: Vec<u8>,
        index: u32,
    ) -> RetroSnapResult<&LoadedFont> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        if families.is_empty() {
            return Err(RetroSnapError::font(
                "no font families registered from font bytes",
            ));
        }
        let family_id = families
            .iter()
            .find(|(_, faces)| faces.iter().any(|face| face.index() == index))
            .map(|(id, _)| *id)
            .ok_or_else(|| {
                RetroSnapError::font(format!("font file has no face at index {index}"))
            })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| RetroSnapError::font("registered font family has no name"))?
            .to_string();

        let loaded = LoadedFont { family, index };
        tracing::debug!(?role, family = %loaded.family, "registered font");

        let slot = match role {
            FontRole::Caption => &mut self.caption,
            FontRole::DateStamp => &mut self.date_stamp,
        };
        let loaded: &LoadedFont = slot.insert(loaded);
        Ok(loaded)
    }

    /// Read a font file from disk and register it for `role`.
    pub fn register_file(&mut self, role: FontRole, path: &Path) -> RetroSnapResult<&LoadedFont> {
        let bytes = std::fs::read(path).map_err(|e| {
            RetroSnapError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        self.register(role, bytes, 0)
    }

    /// Find an installed face that maps [`FontRole::coverage_sample`] and register it.
    ///
    /// Returns `Ok(false)` when no installed face covers the sample; text for that role is
    /// then skipped rather than drawn as `.notdef` boxes.
    pub fn register_system(&mut self, role: FontRole) -> RetroSnapResult<bool> {
        let db = self.system_db.get_or_insert_with(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            db
        });
        let Some((bytes, index)) = find_system_face(db, role) else {
            tracing::warn!(?role, "no installed font covers this role; its text is skipped");
            return Ok(false);
        };
        self.register(role, bytes, index)?;
        Ok(true)
    }

    /// Shape a single line of plain text with the font registered for `role`.
    ///
    /// Returns `Ok(None)` when the role has no font or the text is empty.
    pub fn shape(
        &mut self,
        role: FontRole,
        text: &str,
        size_px: f32,
        bold: bool,
        brush: TextBrushRgba8,
    ) -> RetroSnapResult<Option<ShapedText>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(RetroSnapError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        if text.is_empty() {
            return Ok(None);
        }
        let Some(loaded) = self.font(role) else {
            return Ok(None);
        };
        let family = loaded.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );

        Ok(Some(ShapedText { layout }))
    }
}

const CAPTION_FAMILIES: &[usvg::fontdb::Family<'static>] = &[
    usvg::fontdb::Family::Name("Ma Shan Zheng"),
    usvg::fontdb::Family::Name("LXGW WenKai"),
    usvg::fontdb::Family::Name("Noto Serif CJK SC"),
    usvg::fontdb::Family::Name("Noto Sans CJK SC"),
    usvg::fontdb::Family::Name("Source Han Serif SC"),
    usvg::fontdb::Family::Name("Source Han Sans SC"),
    usvg::fontdb::Family::Name("WenQuanYi Zen Hei"),
    usvg::fontdb::Family::Name("WenQuanYi Micro Hei"),
    usvg::fontdb::Family::Name("Droid Sans Fallback"),
    usvg::fontdb::Family::Name("AR PL UMing CN"),
    usvg::fontdb::Family::Cursive,
    usvg::fontdb::Family::Serif,
    usvg::fontdb::Family::SansSerif,
];

const DATE_FAMILIES: &[usvg::fontdb::Family<'static>] = &[
    usvg::fontdb::Family::Name("Courier Prime"),
    usvg::fontdb::Family::Monospace,
    usvg::fontdb::Family::SansSerif,
    usvg::fontdb::Family::Serif,
];

/// Whether face `index` of `data` maps every non-space character of `sample`.
pub(crate) fn face_covers(data: &[u8], index: u32, sample: &str) -> bool {
    let Some(face) = parley::swash::FontRef::from_index(data, index as usize) else {
        return false;
    };
    let charmap = face.charmap();
    sample
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| charmap.map(c) != 0)
}

/// Preferred families first, then any installed face; only faces covering the
/// role's sample qualify.
fn find_system_face(fontdb: &usvg::fontdb::Database, role: FontRole) -> Option<(Vec<u8>, u32)> {
    let (families, weight) = match role {
        FontRole::Caption => (CAPTION_FAMILIES, usvg::fontdb::Weight::NORMAL),
        FontRole::DateStamp => (DATE_FAMILIES, usvg::fontdb::Weight::BOLD),
    };
    let sample = role.coverage_sample();

    let preferred = families.iter().filter_map(|family| {
        fontdb.query(&usvg::fontdb::Query {
            families: std::slice::from_ref(family),
            weight,
            stretch: usvg::fontdb::Stretch::Normal,
            style: usvg::fontdb::Style::Normal,
        })
    });
    preferred
        .chain(fontdb.faces().map(|face| face.id))
        .find_map(|id| {
            fontdb
                .with_face_data(id, |data, index| {
                    face_covers(data, index, sample).then(|| (data.to_vec(), index))
                })
                .flatten()
        })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
