use crate::error::{FetchError, Result};
use std::fmt;
use std::process::Command;

/// One installed extension as reported by the editor CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRecord {
    pub publisher: String,
    pub name: String,
    pub version: String,
}

impl ExtensionRecord {
    pub fn new<S: Into<String>>(publisher: S, name: S, version: S) -> Self {
        Self {
            publisher: publisher.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ExtensionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}@{}", self.publisher, self.name, self.version)
    }
}

/// Anything that can tell us which extensions are installed.
pub trait ExtensionSource {
    fn list_extensions(&self) -> Result<Vec<ExtensionRecord>>;
}

/// Lists extensions through the editor's own command line tool.
pub struct EditorCli {
    command: String,
}

impl EditorCli {
    pub fn new<S: Into<String>>(command: S) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl ExtensionSource for EditorCli {
    fn list_extensions(&self) -> Result<Vec<ExtensionRecord>> {
        let program = which::which(&self.command).map_err(|e| {
            tracing::debug!("{} not found on PATH: {e}", self.command);
            FetchError::listing_unavailable()
        })?;

        tracing::debug!(
            "Running {} --list-extensions --show-versions",
            program.display()
        );

        let output = Command::new(&program)
            .arg("--list-extensions")
            .arg("--show-versions")
            .output()
            .map_err(|e| {
                tracing::debug!("Failed to spawn {}: {e}", program.display());
                FetchError::listing_unavailable()
            })?;

        if !output.status.success() {
            tracing::debug!(
                "{} exited with status {:?}: {}",
                self.command,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(FetchError::listing_unavailable());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_listing(&stdout))
    }
}

/// Parses `publisher.name@version` lines, dropping anything that doesn't fit.
pub fn parse_listing(output: &str) -> Vec<ExtensionRecord> {
    output.lines().filter_map(parse_line).collect()
}

/// The publisher ends at the first `.`, the name at the next `@`, and the
/// version is whatever remains. All three must be non-empty.
pub fn parse_line(line: &str) -> Option<ExtensionRecord> {
    let line = line.trim_end_matches('\r');
    let (publisher, rest) = line.split_once('.')?;
    let (name, version) = rest.split_once('@')?;

    if publisher.is_empty() || name.is_empty() || version.is_empty() {
        return None;
    }

    Some(ExtensionRecord::new(publisher, name, version))
}
