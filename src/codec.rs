// codec.rs

use crate::base::{Base, DIGITS};

/// Render `magnitude` in `base`, most significant digit first.
pub fn encode(magnitude: u128, base: Base) -> String {
    if magnitude == 0 {
        return "0".to_string();
    }
    let radix = base.radix() as u128;
    let mut num = magnitude;
    let mut digits = Vec::new();
    while num > 0 {
        digits.push(DIGITS[(num % radix) as usize]);
        num /= radix;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Read `text` as a magnitude in `base`, ignoring case.
///
/// Returns `None` on the first character that is not a digit of `base`, or
/// when the value does not fit in a `u128`. Safe to call on unvalidated input.
pub fn decode(text: &str, base: Base) -> Option<u128> {
    let radix = base.radix() as u128;
    text.chars().try_fold(0u128, |acc, ch| {
        let digit = base.digit_value(ch)? as u128;
        acc.checked_mul(radix)?.checked_add(digit)
    })
}
