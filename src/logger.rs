use std::error::Error as StdError;

/// Where recoverable workflow failures are reported.
pub trait Logger: Send + Sync {
    fn print(&self, err: &(dyn StdError + 'static));
}

/// [`Logger`] that forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn print(&self, err: &(dyn StdError + 'static)) {
        log::info!(target: "lpa_address::lookup", "{}", err);
    }
}
