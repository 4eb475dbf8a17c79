//! ATM session: a bank plus at most one logged-in account.

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    account::{Account, AccountInfo},
    bank::Bank,
    error::BankError,
    types::AccountNumber,
};

/// Binds one [`Bank`] to at most one authenticated account.
///
/// The session holds the bank by exclusive borrow, so for as long as it lives
/// nothing else can mutate the bank's accounts.
pub struct Session<'b> {
    bank: &'b mut Bank,
    active: Option<AccountNumber>,
}

impl<'b> Session<'b> {
    pub fn new(bank: &'b mut Bank) -> Self {
        Self { bank, active: None }
    }

    pub fn bank(&self) -> &Bank {
        &*self.bank
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_account(&self) -> Option<&AccountNumber> {
        self.active.as_ref()
    }

    /// # Errors
    ///
    /// [`BankError::AlreadyLoggedIn`] if an account is logged in, otherwise
    /// [`BankError::AuthenticationFailed`] for an unknown number or a wrong
    /// secret alike.
    pub fn login(&mut self, number: &str, secret: &str) -> Result<(), BankError> {
        if self.active.is_some() {
            return Err(BankError::AlreadyLoggedIn);
        }
        let account = self
            .bank
            .authenticate(number, secret)
            .ok_or(BankError::AuthenticationFailed)?;
        info!(bank = %self.bank.name(), account = %account.number(), "Logged in");
        self.active = Some(account.number().clone());
        Ok(())
    }

    /// Drop the active account, if any. Never fails.
    pub fn logout(&mut self) {
        if let Some(number) = self.active.take() {
            info!(bank = %self.bank.name(), account = %number, "Logged out");
        }
    }

    /// Open a new account in the session's bank. Only allowed while nobody is
    /// logged in.
    pub fn open_account(
        &mut self,
        secret: &str,
        owner: &str,
        initial_balance: Decimal,
    ) -> Result<AccountNumber, BankError> {
        if self.active.is_some() {
            return Err(BankError::AlreadyLoggedIn);
        }
        self.bank.create_account(secret, owner, initial_balance)
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.active_mut()?.credit(amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.active_mut()?.debit(amount)
    }

    /// Move `amount` from the logged-in account to `target`.
    pub fn transfer(&mut self, target: &str, amount: Decimal) -> Result<(), BankError> {
        let from = self.active.as_ref().ok_or(BankError::NotLoggedIn)?;
        self.bank.transfer(from.as_str(), target, amount)
    }

    pub fn check_balance(&self) -> Result<Decimal, BankError> {
        Ok(self.active()?.balance())
    }

    pub fn account_info(&self) -> Result<AccountInfo, BankError> {
        Ok(self.active()?.info())
    }

    fn active(&self) -> Result<&Account, BankError> {
        let number = self.active.as_ref().ok_or(BankError::NotLoggedIn)?;
        self.bank
            .account(number.as_str())
            .ok_or_else(|| BankError::UnknownAccount(number.to_string()))
    }

    fn active_mut(&mut self) -> Result<&mut Account, BankError> {
        let number = self.active.as_ref().ok_or(BankError::NotLoggedIn)?;
        self.bank.account_mut(number.as_str())
    }
}
