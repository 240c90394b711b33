use flexi_logger::{
    colored_default_format, detailed_format, Cleanup, Criterion, Duplicate, FileSpec, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

use crate::{Result, ScrabbleError};

/// Starts the global logger.
///
/// `RUST_LOG` overrides `level`. Without a directory, logs go to stderr in
/// colour; with one, to rotating files and warnings are mirrored to stderr.
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(level)
        .map_err(|e| ScrabbleError::Logging(e.to_string()))?;

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("scrabble_board"))
            .format(detailed_format)
            .duplicate_to_stderr(Duplicate::Warn)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // 10 MB per file
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            ),
        None => logger.format(colored_default_format),
    };

    logger
        .start()
        .map_err(|e| ScrabbleError::Logging(e.to_string()))
}
