use std::{borrow::Borrow, str::FromStr};

use derive_more::Display;

use crate::error::BankError;

/// Width of a formatted account number.
pub const ACCOUNT_NUMBER_WIDTH: usize = 6;
/// First number handed out by a fresh bank.
pub const FIRST_ACCOUNT_NUMBER: u32 = 1000;
/// Largest number that still fits in [`ACCOUNT_NUMBER_WIDTH`] digits.
pub const LAST_ACCOUNT_NUMBER: u32 = 999_999;

/// A bank-local account number, always 6 ASCII digits ("001000").
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(s: &str) -> Result<Self, BankError> {
        let t = s.trim();
        if t.len() == ACCOUNT_NUMBER_WIDTH && t.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(t.into()))
        } else {
            Err(BankError::InvalidAccountNumber)
        }
    }

    /// Formats a counter value, `None` once it no longer fits.
    pub(crate) fn from_counter(value: u32) -> Option<Self> {
        (value <= LAST_ACCOUNT_NUMBER).then(|| Self(format!("{value:06}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountNumber {
    type Err = BankError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counter_pads_to_six_digits() {
        assert_eq!(
            AccountNumber::from_counter(FIRST_ACCOUNT_NUMBER).unwrap().as_str(),
            "001000"
        );
        assert_eq!(
            AccountNumber::from_counter(LAST_ACCOUNT_NUMBER).unwrap().as_str(),
            "999999"
        );
        assert!(AccountNumber::from_counter(LAST_ACCOUNT_NUMBER + 1).is_none());
    }

    #[test]
    fn test_parse_account_number() {
        assert_eq!(
            " 001001 ".parse::<AccountNumber>().unwrap().to_string(),
            "001001"
        );
        assert_eq!(
            AccountNumber::new("1001"),
            Err(BankError::InvalidAccountNumber)
        );
        assert_eq!(
            AccountNumber::new("00100a"),
            Err(BankError::InvalidAccountNumber)
        );
    }
}
