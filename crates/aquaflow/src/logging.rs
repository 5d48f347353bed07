//! File logging. The terminal itself belongs to the animation, so log
//! output goes to a file in the platform data directory.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use aquaflow_config::Config;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::Level;

/// Install the global subscriber writing to the default log file.
///
/// Returns the log file path, or `None` when logging stays disabled.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    init_at(config, aquaflow_config::log_path())
}

/// Install the global subscriber writing to `path`.
///
/// An unknown `log_level` is an error. A log file that can't be opened only
/// disables logging, with a note on stderr.
pub fn init_at(config: &Config, path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let level: Level = config
        .log_level
        .parse()
        .wrap_err_with(|| format!("unknown log level {:?}", config.log_level))?;

    let Some(path) = path else {
        return Ok(None);
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("aquaflow: logging disabled: {err:#}");
            return Ok(None);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}

/// Open `path` for appending, creating it and its directory as needed.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open {}", path.display()))
}
