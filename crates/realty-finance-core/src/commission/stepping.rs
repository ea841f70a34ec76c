//! Stepped rate controls for the settlement form.
//!
//! Each rate moves by a fixed step and saturates at its documented bound;
//! repeated increments can never push a value out of range or wrap it
//! around.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::commission::settlement::{COMMISSION_RATE_MAX, GST_RATE_MAX, TDS_RATE_MAX};
use crate::sanitize::clamp;
use crate::types::Rate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateControl {
    value: Rate,
    step: Rate,
    min: Rate,
    max: Rate,
}

impl RateControl {
    /// Brokerage commission: 0.5% steps within [0, 10].
    pub fn commission_rate(start: Rate) -> Self {
        Self::new(start, dec!(0.5), Decimal::ZERO, COMMISSION_RATE_MAX)
    }

    /// GST: whole-point steps within [0, 28].
    pub fn gst_rate(start: Rate) -> Self {
        Self::new(start, Decimal::ONE, Decimal::ZERO, GST_RATE_MAX)
    }

    /// TDS: 0.5% steps within [0, 10].
    pub fn tds_rate(start: Rate) -> Self {
        Self::new(start, dec!(0.5), Decimal::ZERO, TDS_RATE_MAX)
    }

    fn new(start: Rate, step: Rate, min: Rate, max: Rate) -> Self {
        RateControl {
            value: clamp(start, min, max),
            step,
            min,
            max,
        }
    }

    pub fn value(&self) -> Rate {
        self.value
    }

    pub fn increment(&mut self) -> Rate {
        self.value = clamp(self.value + self.step, self.min, self.max);
        self.value
    }

    pub fn decrement(&mut self) -> Rate {
        self.value = clamp(self.value - self.step, self.min, self.max);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn gst_saturates_at_twenty_eight() {
        let mut gst = RateControl::gst_rate(dec!(27));
        assert_eq!(gst.increment(), dec!(28));
        assert_eq!(gst.increment(), dec!(28));
        assert_eq!(gst.increment(), dec!(28));
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut tds = RateControl::tds_rate(dec!(0.5));
        assert_eq!(tds.decrement(), dec!(0));
        assert_eq!(tds.decrement(), dec!(0));
    }

    #[test]
    fn commission_steps_by_half_point() {
        let mut commission = RateControl::commission_rate(dec!(2));
        assert_eq!(commission.increment(), dec!(2.5));
        assert_eq!(commission.decrement(), dec!(2));
        assert_eq!(commission.decrement(), dec!(1.5));
    }

    #[test]
    fn out_of_range_start_is_clamped() {
        let commission = RateControl::commission_rate(dec!(99));
        assert_eq!(commission.value(), dec!(10));
        let gst = RateControl::gst_rate(dec!(-3));
        assert_eq!(gst.value(), dec!(0));
    }

    #[test]
    fn repeated_stepping_never_escapes_bounds() {
        let mut commission = RateControl::commission_rate(dec!(0));
        for _ in 0..50 {
            commission.increment();
            assert!(commission.value() <= dec!(10));
        }
        for _ in 0..50 {
            commission.decrement();
            assert!(commission.value() >= dec!(0));
        }
    }
}
