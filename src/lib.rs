#![forbid(unsafe_code)]

pub mod batch;
pub mod catalog;
pub mod color;
pub mod error;
pub mod path;
pub mod render;
pub mod text;

pub use batch::{BatchStats, generate_all};
pub use catalog::{Catalog, DimensionPreset, Suite};
pub use color::{Rgba, TRANSPARENT, hex_channel, parse_color};
pub use error::{IconError, IconResult};
pub use path::{icon_dir, icon_filename};
pub use render::{FrameRgba, IconRenderer, IconSpec, write_png};
pub use text::TextEngine;

/// Font family that carries the CC badge glyphs.
pub const ICON_FONT_FAMILY: &str = "CC Icons";
