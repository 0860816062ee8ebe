use crate::core::batch::{BatchDownloader, ItemState, Progress};
use crate::core::config::Config;
use crate::core::download::{Downloader, PackageFetcher};
use crate::core::extensions::{EditorCli, ExtensionSource};
use crate::core::report::{self, BatchSummary, FAILURE_GLYPH, SUCCESS_GLYPH};
use crate::error::Result;
use crate::utils::fs;

/// Lists the installed extensions and downloads every package.
pub fn fetch_installed_extensions() -> Result<BatchSummary> {
    let config = Config::new();
    let source = EditorCli::new(config.editor_command.as_str());

    run(&config, &source, Downloader::new)
}

/// Per-item download failures are reported but never returned as errors.
/// The run stops early only when the listing fails or the fetcher cannot be
/// built; the fetcher is built once the listing is known.
pub fn run<S, F, M>(config: &Config, source: &S, make_fetcher: M) -> Result<BatchSummary>
where
    S: ExtensionSource + ?Sized,
    F: PackageFetcher,
    M: FnOnce(&Config) -> Result<F>,
{
    let extensions = source.list_extensions()?;
    let fetcher = make_fetcher(config)?;

    fs::ensure_dir_exists(&config.download_dir)?;

    println!("🔍 Found {} extensions", extensions.len());
    println!("{}", report::extension_table(&extensions));
    println!();
    println!("📦 Downloading to {}", config.download_dir.display());

    let batch = BatchDownloader::new(fetcher, config);
    let outcomes = batch.run(&extensions, |progress| println!("{}", progress_line(progress)));

    println!();
    println!("{}", report::status_table(&outcomes));
    println!();
    println!("All downloads finished.");

    Ok(report::summarize(&outcomes))
}

fn progress_line(progress: &Progress<'_>) -> String {
    let position = format!("[{}/{}]", progress.index, progress.total);
    let state = progress.state;
    match state {
        ItemState::Downloading => format!("{position} {state} {}...", progress.name),
        ItemState::Succeeded => format!("{position} {} {SUCCESS_GLYPH} {state}", progress.name),
        ItemState::Failed => format!(
            "{position} {} {FAILURE_GLYPH} {state}: {}",
            progress.name,
            progress.error.unwrap_or("unknown error")
        ),
    }
}
