//! File-backed log sink
//!
//! The terminal belongs to the UI, so records go to
//! `<cache_dir>/typeahead/typeahead.log`. `RUST_LOG` controls the filter.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::error::TypeaheadError;

const LOG_DIR: &str = "typeahead";
const LOG_FILE: &str = "typeahead.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the global logger writing to `path`
///
/// Returns an error only when the log file cannot be opened. A logger that
/// was already installed is left in place.
pub fn init_logging(path: &Path) -> Result<(), TypeaheadError> {
    let file = open_log_file(path)?;

    let result = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, TypeaheadError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
