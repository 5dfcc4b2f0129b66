// Display formatting for raw on-chain amounts.
// Exact integer scaling only: 1_500_000_000 with 9 decimals renders as "1.5".

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

#[inline]
fn pow10(decimals: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), decimals as usize)
}

/// Render a raw amount in whole units, trimming trailing fractional zeros.
pub fn format_amount(value: &BigInt, decimals: u32) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let magnitude = value.abs();
    if decimals == 0 {
        return format!("{}{}", sign, magnitude);
    }

    let (whole, frac) = magnitude.div_rem(&pow10(decimals));
    if frac.is_zero() {
        return format!("{}{}", sign, whole);
    }

    let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{}{}.{}", sign, whole, frac.trim_end_matches('0'))
}

/// Same as `format_amount` with the coin symbol appended; absent stays absent.
pub fn format_optional(value: Option<&BigInt>, decimals: u32, symbol: &str) -> Option<String> {
    value.map(|v| format!("{} {}", format_amount(v, decimals), symbol))
}
