use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealtyFinanceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Out of range: {field} = {value} must lie within [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RealtyFinanceError {
    fn from(e: serde_json::Error) -> Self {
        RealtyFinanceError::SerializationError(e.to_string())
    }
}
