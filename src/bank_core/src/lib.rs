pub mod account;
pub mod bank;
pub mod credential;
pub mod error;
pub mod session;
pub mod types;

pub use account::{Account, AccountInfo};
pub use argon2::Params as CredentialParams;
pub use bank::Bank;
pub use error::{BankError, ErrorKind};
pub use session::Session;
pub use types::AccountNumber;
