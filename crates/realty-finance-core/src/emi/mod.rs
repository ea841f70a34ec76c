pub mod amortization;
pub mod schedule;

pub use amortization::{compute_emi, EmiFigures, EmiInput};
pub use schedule::{amortization_schedule, ScheduleEntry};
