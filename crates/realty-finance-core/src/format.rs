//! Indian-locale display rendering of whole-rupee amounts.
//!
//! Presentation-only: both functions are lossy and must never feed back
//! into a monetary computation.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Money;

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
const THOUSAND: Decimal = dec!(1000);

/// Indian digit grouping with no decimal places: the last group takes three
/// digits, every group before it takes two, e.g. `12,34,567`.
pub fn format_inr(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let grouped = group_indian(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Approximate word form of a rupee amount on the lakh/crore scale, two
/// decimals on the scaled value: `12500000` renders as `"1.25 Crore"`.
pub fn amount_to_words(amount: Money) -> String {
    if amount >= CRORE {
        format!("{} Crore", scaled(amount, CRORE))
    } else if amount >= LAKH {
        format!("{} Lakh", scaled(amount, LAKH))
    } else if amount >= THOUSAND {
        format!("{} Thousand", scaled(amount, THOUSAND))
    } else {
        amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
    }
}

fn scaled(amount: Money, unit: Decimal) -> String {
    let mut value = (amount / unit).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    value.to_string()
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn grouping_is_three_then_twos() {
        assert_eq!(format_inr(dec!(1234567)), "12,34,567");
        assert_eq!(format_inr(dec!(1000)), "1,000");
        assert_eq!(format_inr(dec!(100000)), "1,00,000");
        assert_eq!(format_inr(dec!(10000000)), "1,00,00,000");
        assert_eq!(format_inr(dec!(123456789)), "12,34,56,789");
    }

    #[test]
    fn small_amounts_need_no_separator() {
        assert_eq!(format_inr(dec!(0)), "0");
        assert_eq!(format_inr(dec!(999)), "999");
    }

    #[test]
    fn fractional_input_rounds_to_whole_rupees() {
        assert_eq!(format_inr(dec!(7608.78)), "7,609");
    }

    #[test]
    fn words_pick_the_largest_magnitude() {
        assert_eq!(amount_to_words(dec!(12500000)), "1.25 Crore");
        assert_eq!(amount_to_words(dec!(365221)), "3.65 Lakh");
        assert_eq!(amount_to_words(dec!(7609)), "7.61 Thousand");
        assert_eq!(amount_to_words(dec!(999)), "999");
        assert_eq!(amount_to_words(dec!(0)), "0");
    }

    #[test]
    fn words_always_carry_two_decimals() {
        assert_eq!(amount_to_words(dec!(1230000)), "12.30 Lakh");
        assert_eq!(amount_to_words(dec!(10000000)), "1.00 Crore");
    }

    #[test]
    fn magnitude_boundaries() {
        assert_eq!(amount_to_words(dec!(1000)), "1.00 Thousand");
        assert_eq!(amount_to_words(dec!(100000)), "1.00 Lakh");
        assert_eq!(amount_to_words(dec!(99999)), "100.00 Thousand");
    }
}
