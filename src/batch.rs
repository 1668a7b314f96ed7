use std::{fs, path::Path};

use crate::{
    catalog::Catalog,
    error::IconResult,
    path::{icon_dir, icon_filename},
    render::{IconRenderer, IconSpec, write_png},
};

/// Counters for one full enumeration pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub written: u64,
    /// Combinations whose output file already existed.
    pub skipped_existing: u64,
    /// Combinations where foreground equals background.
    pub skipped_invisible: u64,
}

/// Walk the full cross product of suite, descriptor, glyph variant,
/// dimension preset, background, and foreground, writing every icon that
/// is not already on disk.
///
/// Foreground == background would render an invisible icon, so those
/// combinations never reach the renderer. Existing files are never
/// overwritten, which makes an interrupted run resumable by running again.
/// Any render or write error aborts the whole batch.
#[tracing::instrument(skip(catalog, renderer))]
pub fn generate_all(
    catalog: &Catalog,
    renderer: &mut IconRenderer,
    base_dir: &Path,
) -> IconResult<BatchStats> {
    let foregrounds = catalog.foregrounds();
    let mut stats = BatchStats::default();

    for (suite, licenses) in &catalog.suites {
        for (descriptor, variants) in licenses {
            tracing::info!(suite = %suite, descriptor = %descriptor, "generating descriptor");
            for characters in variants {
                for &dimensions in &catalog.dimensions {
                    for background in &catalog.backgrounds {
                        for foreground in &foregrounds {
                            if foreground == background {
                                stats.skipped_invisible += 1;
                                continue;
                            }

                            let dir =
                                icon_dir(base_dir, suite, descriptor, background, foreground);
                            let file = dir.join(icon_filename(dimensions, characters));
                            if file.exists() {
                                stats.skipped_existing += 1;
                                continue;
                            }

                            let frame = renderer.render(&IconSpec {
                                characters,
                                dimensions,
                                background,
                                foreground,
                            })?;
                            fs::create_dir_all(&dir)?;
                            write_png(&frame, &file)?;
                            stats.written += 1;
                            tracing::debug!(path = %file.display(), "wrote icon");
                        }
                    }
                }
            }
        }
    }

    Ok(stats)
}
