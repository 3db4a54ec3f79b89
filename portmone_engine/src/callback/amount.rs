use std::str::FromStr;

use rust_decimal::Decimal;

use crate::callback::Rejection;

/// Parses a monetary amount as an exact decimal. Both plain (`99.90`) and scientific (`9.990E1`) notation are
/// accepted. The scale of the input is preserved.
///
/// `Decimal` holds at most 28 fractional digits. Input that would have to be rounded to fit is rejected; trailing
/// zeros beyond that limit are not counted as precision.
pub fn parse_amount(text: &str) -> Result<Decimal, Rejection> {
    let text = text.trim();
    let amount = match text.split_once(['e', 'E']) {
        None => exact_decimal(text),
        Some((mantissa, _)) => exact_decimal(mantissa).and_then(|_| Decimal::from_scientific(text).ok()),
    };
    amount.ok_or_else(|| Rejection::AmountUnparseable(text.to_string()))
}

/// Parses plain decimal notation, returning `None` if the value is not representable without rounding.
fn exact_decimal(text: &str) -> Option<Decimal> {
    let value = Decimal::from_str(text).ok()?;
    let fraction = text.split_once('.').map(|(_, f)| f).unwrap_or_default();
    let lossless = fraction.chars().filter(char::is_ascii_digit).skip(value.scale() as usize).all(|c| c == '0');
    lossless.then_some(value)
}
