use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ccicons", version)]
struct Cli {
    /// Base directory for the generated icon tree.
    #[arg(long, default_value = "www/i")]
    out: PathBuf,

    /// Font family providing the badge glyphs.
    #[arg(long, default_value = ccicons::ICON_FONT_FAMILY)]
    font_family: String,

    /// Catalog JSON overriding the built-in suites and palettes.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        if is_interrupted(&err) {
            eprintln!("INFO (130) halted by interrupt");
            std::process::exit(130);
        }
        eprintln!("ERROR (1) {err:?}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => read_catalog_json(path)?,
        None => ccicons::Catalog::builtin(),
    };
    catalog.validate()?;

    let mut renderer = ccicons::IconRenderer::new(&cli.font_family)?;

    tracing::info!(base = %cli.out.display(), family = %cli.font_family, "generating icons");
    let stats = ccicons::generate_all(&catalog, &mut renderer, &cli.out)?;
    tracing::info!(
        written = stats.written,
        skipped_existing = stats.skipped_existing,
        skipped_invisible = stats.skipped_invisible,
        "batch complete"
    );
    Ok(())
}

fn read_catalog_json(path: &Path) -> anyhow::Result<ccicons::Catalog> {
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    let r = BufReader::new(f);
    let catalog: ccicons::Catalog =
        serde_json::from_reader(r).with_context(|| "parse catalog JSON")?;
    Ok(catalog)
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::Interrupted)
    })
}
