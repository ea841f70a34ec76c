pub mod settlement;
pub mod stepping;

pub use settlement::{settle_commission, CommissionBreakdown, CommissionInput};
pub use stepping::RateControl;
