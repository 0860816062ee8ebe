use std::path::{Path, PathBuf};

/// Editor CLI used to list installed extensions.
pub const EDITOR_COMMAND: &str = "code";

/// Public registry the packages are fetched from.
pub const REGISTRY_HOST: &str = "open-vsx.org";

/// Directory, next to the executable, that receives the packages.
pub const DOWNLOAD_DIR_NAME: &str = "downloaded";

pub const MAX_REDIRECTS: usize = 5;

pub const USER_AGENT: &str = concat!("vsixfetch/", env!("CARGO_PKG_VERSION"));

/// Fixed settings for one run. Nothing here is read from disk or the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub editor_command: String,
    pub download_dir: PathBuf,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_download_dir(PathBuf::from(DOWNLOAD_DIR_NAME))
    }
}

impl Config {
    /// Places the download directory beside the running executable.
    pub fn new() -> Self {
        Self::with_download_dir(get_download_dir())
    }

    pub fn with_download_dir(download_dir: PathBuf) -> Self {
        Config {
            editor_command: EDITOR_COMMAND.to_string(),
            download_dir,
            max_redirects: MAX_REDIRECTS,
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn get_package_path(&self, file_name: &str) -> PathBuf {
        self.download_dir.join(file_name)
    }
}

fn get_download_dir() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(DOWNLOAD_DIR_NAME)
}
