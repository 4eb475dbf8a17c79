use std::str::FromStr;

/// An entry of the ATM menu, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    CheckBalance,
    AccountInfo,
    Logout,
    SwitchBank,
    Exit,
}

impl MenuChoice {
    const GUEST: [MenuChoice; 2] = [MenuChoice::Login, MenuChoice::CreateAccount];
    const CUSTOMER: [MenuChoice; 6] = [
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Transfer,
        MenuChoice::CheckBalance,
        MenuChoice::AccountInfo,
        MenuChoice::Logout,
    ];
    const ALWAYS: [MenuChoice; 2] = [MenuChoice::SwitchBank, MenuChoice::Exit];

    /// Entries to show, depending on whether someone is logged in.
    pub fn visible(logged_in: bool) -> Vec<MenuChoice> {
        let session_entries: &[MenuChoice] = if logged_in {
            &Self::CUSTOMER
        } else {
            &Self::GUEST
        };
        session_entries
            .iter()
            .chain(Self::ALWAYS.iter())
            .copied()
            .collect()
    }

    pub fn key(&self) -> u8 {
        match self {
            MenuChoice::Login => 1,
            MenuChoice::CreateAccount => 2,
            MenuChoice::Deposit => 3,
            MenuChoice::Withdraw => 4,
            MenuChoice::Transfer => 5,
            MenuChoice::CheckBalance => 6,
            MenuChoice::AccountInfo => 7,
            MenuChoice::Logout => 8,
            MenuChoice::SwitchBank => 9,
            MenuChoice::Exit => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Login => "Login",
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Transfer => "Transfer",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::AccountInfo => "Account Info",
            MenuChoice::Logout => "Logout",
            MenuChoice::SwitchBank => "Switch Bank",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: u8 = s
            .trim()
            .parse()
            .map_err(|_| String::from("Invalid choice. Please select a number from the menu."))?;
        Self::GUEST
            .iter()
            .chain(Self::CUSTOMER.iter())
            .chain(Self::ALWAYS.iter())
            .find(|choice| choice.key() == key)
            .copied()
            .ok_or_else(|| String::from("Invalid choice. Please select a number from the menu."))
    }
}
