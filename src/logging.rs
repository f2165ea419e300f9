//! Logger bootstrap for the binary.
//!
//! The library only emits `log` records; this module installs the
//! `flexi_logger` backend that writes them to stderr. Initialization happens
//! at most once per process.

use crate::errors::AppError;
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts stderr logging with a `flexi_logger` level string such as `warn` or
/// `info, contact_book::domain=debug`. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), AppError> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, AppError> {
        let handle = Logger::try_with_str(level)
            .map_err(|e| AppError::Config(format!("invalid log level `{level}`: {e}")))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|e| AppError::Config(format!("failed to start logger: {e}")))?;

        debug!("logging started at level {level}");
        Ok(handle)
    })?;

    Ok(())
}
