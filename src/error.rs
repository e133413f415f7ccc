use std::io;

use thiserror::Error;

/// Errors surfaced by the terminal host.
///
/// Engine operations are total and never fail; everything here comes from
/// the process boundary (terminal setup, logging bootstrap).
#[derive(Debug, Error)]
pub enum HostError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not install the logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
