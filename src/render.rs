use std::path::Path;

use crate::{
    catalog::DimensionPreset,
    color::{self, TRANSPARENT},
    error::{IconError, IconResult},
    text::{ShapedChar, TextEngine, centered_origin},
};

/// Finished frame in premultiplied RGBA8, ready for PNG serialization.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Everything that identifies one icon to draw.
#[derive(Clone, Copy, Debug)]
pub struct IconSpec<'a> {
    /// Icon-font glyph codes, drawn left to right.
    pub characters: &'a str,
    pub dimensions: DimensionPreset,
    /// `"transparent"` or a 6-hex-digit color.
    pub background: &'a str,
    /// 6-hex-digit color.
    pub foreground: &'a str,
}

/// Draws badge glyph runs onto fixed-size surfaces with the CPU painter.
///
/// The font is resolved once at construction; a missing family is a fatal
/// precondition so a batch never starts without its glyphs.
pub struct IconRenderer {
    engine: TextEngine,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl IconRenderer {
    /// Resolve `family` against the installed system fonts.
    pub fn new(family: &str) -> IconResult<Self> {
        let mut engine = TextEngine::new();
        engine.require_family(family)?;
        let font = engine.font_data(family)?;
        Ok(Self {
            engine,
            family: family.to_string(),
            font,
        })
    }

    /// Use an icon font supplied as raw bytes instead of an installed family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> IconResult<Self> {
        let mut engine = TextEngine::new();
        let family = engine.register_font_bytes(font_bytes)?;
        let font = engine.font_data(&family)?;
        Ok(Self {
            engine,
            family,
            font,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Render one icon: fill the background (unless transparent), then draw
    /// the glyph run centered in the canvas in the foreground color.
    pub fn render(&mut self, spec: &IconSpec<'_>) -> IconResult<FrameRgba> {
        let dims = spec.dimensions;
        let width_u16: u16 = dims
            .width
            .try_into()
            .map_err(|_| IconError::render("icon width exceeds u16"))?;
        let height_u16: u16 = dims
            .height
            .try_into()
            .map_err(|_| IconError::render("icon height exceeds u16"))?;
        if spec.characters.is_empty() {
            return Err(IconError::validation("icon characters must be non-empty"));
        }

        let background = color::parse_color(spec.background)?;
        let foreground = color::parse_color(spec.foreground)?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if spec.background != TRANSPARENT {
            let [r, g, b, a] = background.to_rgba8();
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(dims.width),
                f64::from(dims.height),
            ));
        }

        let font_size = dims.font_size as f32;
        let mut shaped = Vec::new();
        for ch in spec.characters.chars() {
            shaped.push(self.engine.shape_char(&self.family, ch, font_size)?);
        }

        let advances: Vec<f32> = shaped.iter().map(|s| s.advance).collect();
        let (mut x, y) = centered_origin(
            &advances,
            shaped[0].ascent,
            dims.padding as f32,
            dims.width,
            dims.height,
        );

        let [r, g, b, a] = foreground.to_rgba8();
        let paint = vello_cpu::peniko::Color::from_rgba8(r, g, b, a);
        for s in &shaped {
            draw_char(&mut ctx, &self.font, paint, s, x.ceil(), y);
            x += s.advance + dims.padding as f32;
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRgba {
            width: dims.width,
            height: dims.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_char(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    paint: vello_cpu::peniko::Color,
    shaped: &ShapedChar,
    x: f32,
    y: f32,
) {
    // Glyph positions already include the layout baseline; shift so the
    // baseline lands on the requested y.
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(x),
        f64::from(y - shaped.baseline),
    )));
    ctx.set_paint(paint);

    for line in shaped.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

/// Serialize a rendered frame as a PNG file.
pub fn write_png(frame: &FrameRgba, path: &Path) -> IconResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| IconError::render(format!("write png '{}': {e}", path.display())))
}
