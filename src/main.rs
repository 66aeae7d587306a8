mod config;
mod emit;
mod fetcher;
mod harvest;
mod model;
mod normalize;
mod pipeline;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "vc_rulegen",
    about = "Generate SonarQube rules.xml for MSVC compiler warnings from the Microsoft docs"
)]
struct Cli {
    /// Max warning rules to emit (default: all harvested)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the document
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let fetcher = fetcher::SpiderFetcher::new()?;
    let xml = pipeline::run(&fetcher, config::INDEX_PAGES, config::OVERRIDES, cli.limit).await?;

    match &cli.output {
        Some(path) => std::fs::write(path, &xml)?,
        None => std::io::stdout().write_all(xml.as_bytes())?,
    }

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
