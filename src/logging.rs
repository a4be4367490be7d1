//! Log output setup.
//!
//! The terminal belongs to the user interface while the application runs, so logs can only go to
//! a file.

use std::{fs::File, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

/// Installs the global logger, writing to `log_file` if one is given.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Without a file, no logger is
/// installed and log records are discarded.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global logger has already been installed
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
