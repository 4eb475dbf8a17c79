use std::collections::HashMap;

use argon2::Params;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::Account,
    credential::Credential,
    error::BankError,
    types::{AccountNumber, FIRST_ACCOUNT_NUMBER},
};

/// A named bank, exclusive owner of the accounts it opens.
pub struct Bank {
    name: String,
    accounts: HashMap<AccountNumber, Account>,
    /// Next counter value to mint, only ever increases
    next_number: u32,
    /// Argon2 cost used when sealing new credentials
    credential_params: Params,
    /// Checked against when the account number is unknown, so that a miss
    /// costs the same hash as a wrong secret
    decoy: Option<Credential>,
}

const DECOY_SECRET: &str = "decoy";

impl Bank {
    pub fn new(name: &str) -> Self {
        Self::with_credential_params(name, Params::default())
    }

    pub fn with_credential_params(name: &str, credential_params: Params) -> Self {
        let decoy = Credential::seal(DECOY_SECRET, &credential_params).ok();
        Self {
            name: name.to_string(),
            accounts: HashMap::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
            credential_params,
            decoy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Open an account and return its freshly minted number.
    ///
    /// Numbers are handed out in order ("001000", "001001", ...) and never
    /// reused. A rejected call does not consume a number.
    ///
    /// # Errors
    ///
    /// * [`BankError::NegativeOpeningBalance`] if `initial_balance < 0`
    /// * [`BankError::AccountNumbersExhausted`] once "999999" has been issued
    /// * [`BankError::Credential`] if the secret could not be hashed
    pub fn create_account(
        &mut self,
        credential: &str,
        owner: &str,
        initial_balance: Decimal,
    ) -> Result<AccountNumber, BankError> {
        if initial_balance < Decimal::ZERO {
            return Err(BankError::NegativeOpeningBalance(initial_balance));
        }
        let number = AccountNumber::from_counter(self.next_number)
            .ok_or(BankError::AccountNumbersExhausted)?;
        let credential = Credential::seal(credential, &self.credential_params)?;

        self.next_number += 1;
        let account = Account::new(number.clone(), credential, owner, initial_balance);
        self.accounts.insert(number.clone(), account);

        info!(bank = %self.name, account = %number, "Account opened");
        Ok(number)
    }

    /// [`Bank::create_account`] with a zero opening balance.
    pub fn open_account(&mut self, credential: &str, owner: &str) -> Result<AccountNumber, BankError> {
        self.create_account(credential, owner, Decimal::ZERO)
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub(crate) fn account_mut(&mut self, number: &str) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| BankError::UnknownAccount(number.to_string()))
    }

    /// The account behind `number`, if and only if `secret` matches.
    ///
    /// An unknown number and a wrong secret both give `None`, and both pay for
    /// one hash verification.
    pub fn authenticate(&self, number: &str, secret: &str) -> Option<&Account> {
        let account = match self.accounts.get(number) {
            Some(account) => Some(account).filter(|account| account.verify_credential(secret)),
            None => {
                if let Some(decoy) = &self.decoy {
                    decoy.verify(secret);
                }
                None
            }
        };
        if account.is_none() {
            debug!(bank = %self.name, "Authentication failed");
        }
        account
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Runs under `&mut self`, so nobody can observe the money in flight. The
    /// target is resolved and its credit checked before anything is touched,
    /// which leaves the debit as the only leg that can fail.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), BankError> {
        let Some(target) = self.accounts.get(to) else {
            debug!(bank = %self.name, to, "Transfer to unknown account");
            return Err(BankError::UnknownAccount(to.to_string()));
        };
        // a self transfer nets out, only its debit needs to hold
        if from != to {
            target.credited_balance(amount)?;
        }
        self.account_mut(from)?.debit(amount)?;
        self.account_mut(to)?.credit(amount)?;

        info!(bank = %self.name, from, to, %amount, "Transfer completed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_bank(name: &str) -> Bank {
    Bank::with_credential_params(name, crate::credential::test_params())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::verifications;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_numbers_are_sequential() {
        let mut bank = test_bank("National Bank");
        let first = bank.open_account("pw", "Alice").unwrap();
        let second = bank.open_account("pw", "Bob").unwrap();
        let third = bank.create_account("pw", "Carol", dec!(5)).unwrap();
        assert_eq!(first.as_str(), "001000");
        assert_eq!(second.as_str(), "001001");
        assert_eq!(third.as_str(), "001002");
        assert!(first < second && second < third);
        assert_eq!(bank.len(), 3);
    }

    #[test]
    fn test_banks_mint_independently() {
        let mut national = test_bank("National Bank");
        let mut cairo = test_bank("Cairo Bank");
        national.open_account("pw", "Alice").unwrap();
        assert_eq!(cairo.open_account("pw", "Bob").unwrap().as_str(), "001000");
    }

    #[test]
    fn test_create_account_stores_owner_and_balance() {
        let mut bank = test_bank("National Bank");
        let number = bank.create_account("pw", "Alice", dec!(100)).unwrap();
        let account = bank.account(number.as_str()).unwrap();
        assert_eq!(account.owner(), "Alice");
        assert_eq!(account.balance(), dec!(100));
        assert!(bank.account("009999").is_none());
    }

    #[test]
    fn test_negative_opening_balance_is_rejected() {
        let mut bank = test_bank("National Bank");
        assert_eq!(
            bank.create_account("pw", "Alice", dec!(-1)),
            Err(BankError::NegativeOpeningBalance(dec!(-1)))
        );
        assert!(bank.is_empty());
        // the rejected call did not burn a number
        assert_eq!(bank.open_account("pw", "Alice").unwrap().as_str(), "001000");
    }

    #[test]
    fn test_account_numbers_run_out() {
        let mut bank = test_bank("National Bank");
        bank.next_number = crate::types::LAST_ACCOUNT_NUMBER;
        assert_eq!(bank.open_account("pw", "Alice").unwrap().as_str(), "999999");
        assert_eq!(
            bank.open_account("pw", "Bob"),
            Err(BankError::AccountNumbersExhausted)
        );
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_authenticate_hides_the_reason() {
        let mut bank = test_bank("National Bank");
        let number = bank.create_account("pw", "Alice", dec!(100)).unwrap();

        let ok = bank.authenticate(number.as_str(), "pw").unwrap();
        assert_eq!(ok.number(), &number);
        assert!(bank.authenticate(number.as_str(), "bad").is_none());
        assert!(bank.authenticate("009999", "pw").is_none());
        assert!(bank.authenticate("not-a-number", "pw").is_none());
    }

    #[test]
    fn test_transfer_between_accounts() {
        let mut bank = test_bank("National Bank");
        let alice = bank.create_account("pw", "Alice", dec!(60)).unwrap();
        let bob = bank.open_account("pw", "Bob").unwrap();

        bank.transfer(alice.as_str(), bob.as_str(), dec!(60)).unwrap();
        assert_eq!(bank.account(alice.as_str()).unwrap().balance(), dec!(0));
        assert_eq!(bank.account(bob.as_str()).unwrap().balance(), dec!(60));

        assert!(matches!(
            bank.transfer(alice.as_str(), bob.as_str(), dec!(1)),
            Err(BankError::InsufficientFunds { .. })
        ));
        assert_eq!(bank.account(alice.as_str()).unwrap().balance(), dec!(0));
        assert_eq!(bank.account(bob.as_str()).unwrap().balance(), dec!(60));
    }

    #[test]
    fn test_transfer_to_unknown_account_touches_nothing() {
        let mut bank = test_bank("National Bank");
        let alice = bank.create_account("pw", "Alice", dec!(60)).unwrap();
        assert_eq!(
            bank.transfer(alice.as_str(), "009999", dec!(10)),
            Err(BankError::UnknownAccount("009999".into()))
        );
        assert_eq!(bank.account(alice.as_str()).unwrap().balance(), dec!(60));
    }

    #[test]
    fn test_transfer_to_self_keeps_balance() {
        let mut bank = test_bank("National Bank");
        let alice = bank.create_account("pw", "Alice", dec!(60)).unwrap();
        bank.transfer(alice.as_str(), alice.as_str(), dec!(60)).unwrap();
        assert_eq!(bank.account(alice.as_str()).unwrap().balance(), dec!(60));
        assert!(bank.transfer(alice.as_str(), alice.as_str(), dec!(61)).is_err());
    }

    #[test]
    fn test_transfer_into_a_full_account_touches_nothing() {
        let mut bank = test_bank("National Bank");
        let alice = bank.create_account("pw", "Alice", dec!(10)).unwrap();
        let rich = bank.create_account("pw", "Rich", Decimal::MAX).unwrap();

        assert_eq!(
            bank.transfer(alice.as_str(), rich.as_str(), dec!(10)),
            Err(BankError::BalanceOverflow)
        );
        assert_eq!(bank.account(alice.as_str()).unwrap().balance(), dec!(10));
        assert_eq!(bank.account(rich.as_str()).unwrap().balance(), Decimal::MAX);

        // the full account can still move money to itself
        bank.transfer(rich.as_str(), rich.as_str(), dec!(1)).unwrap();
        assert_eq!(bank.account(rich.as_str()).unwrap().balance(), Decimal::MAX);
    }

    #[test]
    fn test_unknown_number_still_verifies_a_secret() {
        let mut bank = test_bank("National Bank");
        let number = bank.create_account("pw", "Alice", dec!(100)).unwrap();

        let before = verifications();
        assert!(bank.authenticate("009999", "pw").is_none());
        assert_eq!(verifications(), before + 1);
        assert!(bank.authenticate("not-a-number", "pw").is_none());
        assert_eq!(verifications(), before + 2);
        assert!(bank.authenticate(number.as_str(), "bad").is_none());
        assert_eq!(verifications(), before + 3);
    }
}
