pub mod config;
pub mod dice;
pub mod error;

pub use dice::{Die, Face, RollRequest, RollResult};
pub use error::AppError;
