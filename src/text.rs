use crate::error::{IconError, IconResult};

/// Brush carried through Parley layouts. Glyph color is set at draw time,
/// so the brush itself carries no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphBrush;

/// Stateful wrapper over the Parley font and layout contexts.
///
/// The font context enumerates installed system families; icon fonts can
/// also be registered from raw bytes for environments without a system
/// font stack.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<GlyphBrush>,
}

/// One shaped character plus the metrics the centering math needs.
pub struct ShapedChar {
    pub layout: parley::Layout<GlyphBrush>,
    /// Advance width of the shaped character in pixels.
    pub advance: f32,
    /// Ascent above the baseline, used as the ink height of the glyph.
    pub ascent: f32,
    /// Baseline offset from the top of the layout box.
    pub baseline: f32,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Names of every font family the system stack knows about.
    pub fn installed_families(&mut self) -> Vec<String> {
        self.font_ctx
            .collection
            .family_names()
            .map(str::to_string)
            .collect()
    }

    /// Startup precondition: the named family must be installed.
    pub fn require_family(&mut self, name: &str) -> IconResult<()> {
        if self.font_ctx.collection.family_by_name(name).is_some() {
            return Ok(());
        }
        Err(IconError::font(format!(
            "font family '{name}' is not installed; see <https://wiki.debian.org/Fonts>"
        )))
    }

    /// Register an icon font from raw bytes and return its family name.
    pub fn register_font_bytes(&mut self, font_bytes: &[u8]) -> IconResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            IconError::font("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| IconError::font("registered font family has no name"))?
            .to_string();
        Ok(family_name)
    }

    /// Resolve a family's first face to drawable font data.
    pub fn font_data(&mut self, name: &str) -> IconResult<vello_cpu::peniko::FontData> {
        let family = self
            .font_ctx
            .collection
            .family_by_name(name)
            .ok_or_else(|| {
                IconError::font(format!(
                    "font family '{name}' is not installed; see <https://wiki.debian.org/Fonts>"
                ))
            })?;
        let info = family
            .fonts()
            .first()
            .cloned()
            .ok_or_else(|| IconError::font(format!("font family '{name}' has no faces")))?;
        let blob = self
            .font_ctx
            .source_cache
            .get(info.source())
            .ok_or_else(|| IconError::font(format!("failed to load font data for '{name}'")))?;

        let bytes: Vec<u8> = blob.as_ref().to_vec();
        Ok(vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes),
            info.index(),
        ))
    }

    /// Shape a single character in the given family and size.
    pub fn shape_char(
        &mut self,
        family: &str,
        ch: char,
        size_px: f32,
    ) -> IconResult<ShapedChar> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(IconError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        let text = ch.to_string();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<GlyphBrush> = builder.build(&text);
        layout.break_all_lines(None);

        let (ascent, baseline) = {
            let line = layout.lines().next().ok_or_else(|| {
                IconError::render(format!("character '{ch}' produced no layout line"))
            })?;
            let metrics = line.metrics();
            (metrics.ascent, metrics.baseline)
        };

        Ok(ShapedChar {
            advance: layout.width(),
            ascent,
            baseline,
            layout,
        })
    }
}

/// Centered start position for a run of shaped characters.
///
/// Sums the advance widths plus the fixed padding between characters and
/// centers the whole run in the canvas. Ceiling rounding keeps glyph
/// origins on whole pixels to avoid sub-pixel blur; the vertical position
/// drops the baseline half an ink height below the canvas midline.
pub fn centered_origin(
    advances: &[f32],
    first_ink_height: f32,
    padding: f32,
    width: u32,
    height: u32,
) -> (f32, f32) {
    let total_padding = padding * advances.len().saturating_sub(1) as f32;
    let total_width: f32 = advances.iter().sum();
    let x = 0.5 + ((width as f32 / 2.0) - ((total_width + total_padding) / 2.0)).ceil();
    let y = (height as f32 / 2.0).ceil() + (first_ink_height / 2.0).floor();
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_is_centered() {
        let (x, y) = centered_origin(&[20.0], 24.0, 1.0, 88, 31);
        // 0.5 + ceil(44 - 10) = 34.5; ceil(15.5) + floor(12) = 28.
        assert_eq!(x, 34.5);
        assert_eq!(y, 28.0);
    }

    #[test]
    fn padding_only_counts_between_characters() {
        let narrow = centered_origin(&[10.0, 10.0], 12.0, 4.0, 80, 15);
        let wide = centered_origin(&[10.0, 10.0, 10.0], 12.0, 4.0, 80, 15);
        // Three chars span 38px, two span 24px; both runs stay centered.
        assert_eq!(narrow.0, 0.5 + (40.0f32 - 12.0).ceil());
        assert_eq!(wide.0, 0.5 + (40.0f32 - 19.0).ceil());
    }

    #[test]
    fn origins_land_on_half_pixel_grid() {
        for advance in [7.3, 11.9, 20.0] {
            let (x, _) = centered_origin(&[advance], 10.0, 1.0, 76, 22);
            assert_eq!(x.fract(), 0.5);
        }
    }
}
