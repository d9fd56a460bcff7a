use crate::dice::DiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Dice error: {0}")]
    Dice(#[from] DiceError),
}
