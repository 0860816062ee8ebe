use crate::core::config::Config;
use crate::error::{FetchError, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

const CHUNK_SIZE: usize = 64 * 1024;

/// Fetches one URL into one file.
pub trait PackageFetcher {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Streams registry responses straight to disk.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::ClientSetup {
                message: describe(&e),
            })?;

        Ok(Self { client })
    }
}

impl PackageFetcher for Downloader {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        tracing::debug!("GET {url}");

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::transport(describe(&e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::status(status.as_u16()));
        }

        let file = File::create(destination).map_err(|e| write_error(destination, &e))?;
        let mut writer = BufWriter::new(file);

        // A broken stream may leave a partial file behind; it is overwritten next run.
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written: u64 = 0;
        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| FetchError::transport(describe(&e)))?;
            if n == 0 {
                break;
            }
            writer
                .write_all(&buf[..n])
                .map_err(|e| write_error(destination, &e))?;
            written += n as u64;
        }
        writer.flush().map_err(|e| write_error(destination, &e))?;

        tracing::debug!("Wrote {written} bytes to {}", destination.display());
        Ok(())
    }
}

fn write_error(destination: &Path, err: &std::io::Error) -> FetchError {
    FetchError::write(format!("{}: {err}", destination.display()))
}

/// Runs a fetch and reports how long it took, whatever the result.
pub fn timed_fetch<F: PackageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    destination: &Path,
) -> (Duration, Result<()>) {
    let started = Instant::now();
    let result = fetcher.fetch(url, destination);
    (started.elapsed(), result)
}

fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
