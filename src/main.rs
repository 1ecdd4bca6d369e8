use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// QTI content package (zip archive) to extract questions from.
    archive: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "qti2html=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let out = qti2html::export(&args.archive)?;
    tracing::info!("wrote {}", out.display());

    Ok(())
}
