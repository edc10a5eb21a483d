use std::io;

use thiserror::Error;

/// Top-level failures surfaced by the binary.
///
/// Gameplay outcomes (collision, victory) are session phases, not errors;
/// only the terminal runtime can actually fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
