pub mod error;
pub mod format;
pub mod sanitize;
pub mod types;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "commission")]
pub mod commission;

pub use error::RealtyFinanceError;
pub use types::*;

/// Standard result type for all realty-finance operations
pub type RealtyFinanceResult<T> = Result<T, RealtyFinanceError>;
