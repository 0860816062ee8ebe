use crate::core::config::Config;
use crate::core::download::{timed_fetch, PackageFetcher};
use crate::core::extensions::ExtensionRecord;
use crate::core::registry::{package_file_name, vsix_url};
use std::fmt;

/// Where a single item is in its download lifecycle. Items the batch has not
/// reached yet are pending and produce no progress events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Downloading,
    Succeeded,
    Failed,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemState::Downloading => "downloading",
            ItemState::Succeeded => "succeeded",
            ItemState::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Result of one attempted download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub name: String,
    pub success: bool,
    pub elapsed_millis: u128,
    pub error_message: Option<String>,
}

/// A state change reported while the batch runs.
#[derive(Debug, Clone)]
pub struct Progress<'a> {
    /// 1-based position in the list.
    pub index: usize,
    pub total: usize,
    pub name: &'a str,
    pub state: ItemState,
    pub error: Option<&'a str>,
}

/// Downloads a list of extensions one after another.
pub struct BatchDownloader<F> {
    fetcher: F,
    config: Config,
}

impl<F: PackageFetcher> BatchDownloader<F> {
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            config: config.clone(),
        }
    }

    /// Processes every record in order. A failed item is recorded and the
    /// batch moves on; exactly one outcome is returned per record.
    pub fn run<P>(&self, records: &[ExtensionRecord], mut on_progress: P) -> Vec<DownloadOutcome>
    where
        P: FnMut(&Progress<'_>),
    {
        let total = records.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, record) in records.iter().enumerate() {
            let name = package_file_name(record);
            let url = vsix_url(record);
            let destination = self.config.get_package_path(&name);

            on_progress(&Progress {
                index: i + 1,
                total,
                name: &name,
                state: ItemState::Downloading,
                error: None,
            });

            let (elapsed, result) = timed_fetch(&self.fetcher, &url, &destination);

            let outcome = match result {
                Ok(()) => DownloadOutcome {
                    name,
                    success: true,
                    elapsed_millis: elapsed.as_millis(),
                    error_message: None,
                },
                Err(e) => {
                    tracing::debug!("{record} failed: {e}");
                    DownloadOutcome {
                        name,
                        success: false,
                        elapsed_millis: elapsed.as_millis(),
                        error_message: Some(e.to_string()),
                    }
                }
            };

            on_progress(&Progress {
                index: i + 1,
                total,
                name: &outcome.name,
                state: if outcome.success {
                    ItemState::Succeeded
                } else {
                    ItemState::Failed
                },
                error: outcome.error_message.as_deref(),
            });

            outcomes.push(outcome);
        }

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extensions::parse_listing;
    use crate::error::{FetchError, Result};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Succeeds on even calls, fails on odd ones, and remembers every URL.
    #[derive(Default)]
    struct AlternatingFetcher {
        urls: RefCell<Vec<String>>,
        destinations: RefCell<Vec<PathBuf>>,
    }

    impl PackageFetcher for AlternatingFetcher {
        fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
            self.destinations.borrow_mut().push(destination.to_path_buf());
            let mut urls = self.urls.borrow_mut();
            let index = urls.len();
            urls.push(url.to_string());
            if index % 2 == 0 {
                Ok(())
            } else {
                Err(FetchError::status(404))
            }
        }
    }

    fn records(n: usize) -> Vec<ExtensionRecord> {
        (0..n)
            .map(|i| {
                ExtensionRecord::new("pub".to_string(), format!("ext{i}"), "1.0.0".to_string())
            })
            .collect()
    }

    fn batch() -> BatchDownloader<AlternatingFetcher> {
        BatchDownloader::new(
            AlternatingFetcher::default(),
            &Config::with_download_dir(PathBuf::from("out")),
        )
    }

    #[test]
    fn test_empty_list_yields_no_outcomes() {
        let batch = batch();
        let outcomes = batch.run(&[], |_| panic!("no progress expected"));
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_one_outcome_per_record_in_order() {
        let batch = batch();
        let input = records(5);
        let outcomes = batch.run(&input, |_| {});

        assert_eq!(outcomes.len(), input.len());
        let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "pub.ext0-1.0.0.vsix",
                "pub.ext1-1.0.0.vsix",
                "pub.ext2-1.0.0.vsix",
                "pub.ext3-1.0.0.vsix",
                "pub.ext4-1.0.0.vsix",
            ]
        );
    }

    #[test]
    fn test_failures_do_not_abort_batch() {
        let batch = batch();
        let outcomes = batch.run(&records(4), |_| {});

        let flags: Vec<_> = outcomes.iter().map(|o| o.success).collect();
        assert_eq!(flags, vec![true, false, true, false]);
        assert_eq!(outcomes[0].error_message, None);
        assert_eq!(
            outcomes[1].error_message.as_deref(),
            Some("Download failed: status code 404")
        );
        assert_eq!(batch.fetcher.urls.borrow().len(), 4);
    }

    #[test]
    fn test_urls_and_destinations() {
        let batch = batch();
        batch.run(&records(1), |_| {});

        assert_eq!(
            batch.fetcher.urls.borrow()[0],
            "https://open-vsx.org/api/pub/ext0/1.0.0/file/pub.ext0-1.0.0.vsix"
        );
        assert_eq!(
            batch.fetcher.destinations.borrow()[0],
            Path::new("out").join("pub.ext0-1.0.0.vsix")
        );
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(ItemState::Downloading.to_string(), "downloading");
        assert_eq!(ItemState::Succeeded.to_string(), "succeeded");
        assert_eq!(ItemState::Failed.to_string(), "failed");
    }

    #[test]
    fn test_progress_reports_each_transition() {
        let batch = batch();
        let mut seen = Vec::new();
        batch.run(&records(2), |p| {
            seen.push((p.index, p.total, p.name.to_string(), p.state));
        });

        assert_eq!(
            seen,
            vec![
                (1, 2, "pub.ext0-1.0.0.vsix".to_string(), ItemState::Downloading),
                (1, 2, "pub.ext0-1.0.0.vsix".to_string(), ItemState::Succeeded),
                (2, 2, "pub.ext1-1.0.0.vsix".to_string(), ItemState::Downloading),
                (2, 2, "pub.ext1-1.0.0.vsix".to_string(), ItemState::Failed),
            ]
        );
    }

    #[test]
    fn test_listing_scenario() {
        let input = parse_listing("ms-python.python@2024.1.0\ngarbage-line\ngolang.go@0.42.0");
        assert_eq!(input.len(), 2);

        let batch = batch();
        let outcomes = batch.run(&input, |_| {});

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, "ms-python.python-2024.1.0.vsix");
        assert_eq!(outcomes[1].name, "golang.go-0.42.0.vsix");
    }
}
