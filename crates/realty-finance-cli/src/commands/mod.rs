pub mod commission;
pub mod emi;
pub mod words;
