use rust_decimal::Decimal;
use tracing::debug;

use crate::{credential::Credential, error::BankError, types::AccountNumber};

/// A bank account.
///
/// Every field is private: the balance only moves through [`Account::credit`]
/// and [`Account::debit`], which keep it non-negative.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    credential: Credential,
    owner: String,
    balance: Decimal,
}

/// Read-only snapshot of an account, safe to hand to a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// Account number, 6 digits
    pub number: AccountNumber,
    /// Owner display name
    pub owner: String,
    pub balance: Decimal,
}

impl Account {
    /// Callers are expected to have checked that `balance` is non-negative.
    pub(crate) fn new(
        number: AccountNumber,
        credential: Credential,
        owner: &str,
        balance: Decimal,
    ) -> Self {
        debug_assert!(balance >= Decimal::ZERO);
        Self {
            number,
            credential,
            owner: owner.to_string(),
            balance,
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn verify_credential(&self, secret: &str) -> bool {
        self.credential.verify(secret)
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    ///
    /// [`BankError::InvalidAmount`] if `amount <= 0`,
    /// [`BankError::BalanceOverflow`] if the new balance is not representable.
    /// The balance is unchanged on error.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.balance = self.credited_balance(amount)?;
        Ok(())
    }

    /// The balance a [`Account::credit`] of `amount` would leave, without applying it.
    pub(crate) fn credited_balance(&self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            debug!(account = %self.number, %amount, "Rejected credit");
            return Err(BankError::InvalidAmount(amount));
        }
        // near the top of the range Decimal rounds instead of overflowing
        match self.balance.checked_add(amount) {
            Some(balance) if balance.checked_sub(self.balance) == Some(amount) => Ok(balance),
            _ => {
                debug!(account = %self.number, %amount, "Rejected credit, balance overflow");
                Err(BankError::BalanceOverflow)
            }
        }
    }

    /// Take `amount` out of the balance. This is the only overdraft guard.
    ///
    /// # Errors
    ///
    /// [`BankError::InvalidAmount`] if `amount <= 0`,
    /// [`BankError::InsufficientFunds`] if `amount` exceeds the balance.
    /// The balance is unchanged on error.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            debug!(account = %self.number, %amount, "Rejected debit");
            return Err(BankError::InvalidAmount(amount));
        }
        if amount > self.balance {
            debug!(account = %self.number, %amount, "Rejected debit, insufficient funds");
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            number: self.number.clone(),
            owner: self.owner.clone(),
            balance: self.balance,
        }
    }
}
