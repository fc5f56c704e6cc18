//! Logging setup.
//!
//! Everything logs through the `log` facade. [`init`] routes records into the
//! in-memory [`Logger`] (shown in the logs overlay) and, when enabled in the
//! configuration, into `taskdeck.log` in the data directory.

use crate::config::{Config, LoggingConfig};
use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Entries kept for the logs overlay; older ones are dropped.
pub const MAX_ENTRIES: usize = 1000;

/// In-memory log buffer behind the logs overlay. Cheap to clone.
#[derive(Clone, Default)]
pub struct Logger {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, message: String) {
        let entry = format!("[{}] {}", Utc::now().format("%H:%M:%S%.3f"), message);
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Newest first
    pub fn get_logs(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join("taskdeck.log"))
}

/// Build the dispatch without installing it.
///
/// `log_file` is only used when `config.enabled` is set.
pub fn build_dispatch(config: &LoggingConfig, logger: &Logger, log_file: Option<&Path>) -> Result<fern::Dispatch> {
    let level = config
        .level_filter()
        .with_context(|| format!("Invalid logging level '{}'", config.level))?;

    let memory = logger.clone();
    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(fern::Output::call(move |record| {
            memory.log(format!("{} {}", record.level(), record.args()));
        }));

    if config.enabled {
        if let Some(path) = log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {} {}] {}",
                            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }
    }

    Ok(dispatch)
}

/// Install the global logger. Must be called once, before the UI starts.
pub fn init(config: &LoggingConfig, logger: &Logger) -> Result<()> {
    let log_file = if config.enabled { Some(get_log_file_path()?) } else { None };
    build_dispatch(config, logger, log_file.as_deref())?
        .apply()
        .context("Logger already initialized")?;
    Ok(())
}
