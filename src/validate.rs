use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-typed money amount: a plain decimal with at most 2 decimal places.
///
/// Sign is not checked here, the bank rejects non-positive amounts itself.
pub fn parse_amount(input: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(input.trim().trim_start_matches('$'))
        .map_err(|_| String::from("Invalid amount entered"))?;
    if amount.normalize().scale() > 2 {
        return Err(String::from("Amounts can have at most 2 decimal places"));
    }
    Ok(amount)
}

/// Opening balance: empty input means zero.
pub fn parse_opening_balance(input: &str) -> Result<Decimal, String> {
    if input.trim().is_empty() {
        Ok(Decimal::ZERO)
    } else {
        parse_amount(input)
    }
}

pub fn validate_bank_name(name: &str) -> Result<String, String> {
    let t = name.trim();
    if t.is_empty() {
        Err(String::from("Bank name must not be empty"))
    } else {
        Ok(t.to_owned())
    }
}
