use std::path::{Path, PathBuf};

use crate::catalog::DimensionPreset;

/// Directory holding every size variant of one (suite, descriptor,
/// background, foreground) combination.
///
/// The six-digit foreground splits into three two-digit segments so the
/// palette fans out across nested directories instead of one flat level.
/// Callers must pass a validated 6-hex-digit foreground.
pub fn icon_dir(
    base: &Path,
    suite: &str,
    descriptor: &str,
    background: &str,
    foreground: &str,
) -> PathBuf {
    base.join(suite)
        .join(descriptor)
        .join(background)
        .join(&foreground[0..2])
        .join(&foreground[2..4])
        .join(&foreground[4..6])
}

/// File name for one dimension preset and glyph code, e.g. `88x31-y.png`.
///
/// A `y` anywhere in the code wins over `e`; they mark the yen- and
/// euro-style variants of the NC glyph.
pub fn icon_filename(dimensions: DimensionPreset, characters: &str) -> String {
    let suffix = if characters.contains('y') {
        "-y"
    } else if characters.contains('e') {
        "-e"
    } else {
        ""
    };
    format!("{}x{}{}.png", dimensions.width, dimensions.height, suffix)
}
