use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vsixfetch::commands;

/// Downloads the VSIX package of every installed VS Code extension from
/// Open VSX into a `downloaded/` directory next to this executable.
#[derive(Parser)]
#[clap(name = "vsixfetch")]
#[clap(about = "Back up installed VS Code extensions as VSIX packages")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = commands::fetch::fetch_installed_extensions().map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
