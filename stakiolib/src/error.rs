//! Единый тип ошибок публичного API.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StakioError {
    #[error("Minimum amount for this action is {min} USDT")]
    BelowMinimum { min: Decimal },

    #[error("Insufficient balance. Please recharge your wallet.")]
    InsufficientBalance,

    #[error("Daily withdrawal limit of {limit} USDT exceeded")]
    DailyLimitExceeded { limit: Decimal },

    #[error("Amount does not qualify for any interest rate")]
    IneligibleRate,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, StakioError>;
