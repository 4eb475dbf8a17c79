use anyhow::Result;
use bank_core::{AccountNumber, ErrorKind, Session};
use tracing::debug;

use super::{choice::MenuChoice, screen::Screen};
use crate::{
    services::Console,
    ux::format_money,
    validate::{parse_amount, parse_opening_balance},
};

/// What the ATM loop should do once a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    SwitchBank,
    Exit,
}

/// Serve one bank until the user switches bank or exits.
pub fn serve<C: Console>(session: &mut Session<'_>, screen: &mut Screen<'_, C>) -> Result<Flow> {
    loop {
        render_menu(session, screen)?;

        let input = screen.ask("Choice: ")?;
        screen.line("")?;
        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(msg) => {
                screen.error(&msg)?;
                continue;
            }
        };
        debug!(?choice, "Menu choice");

        let logged_in = session.is_logged_in();
        match choice {
            MenuChoice::Login if logged_in => screen.info("Already logged in.")?,
            MenuChoice::CreateAccount if logged_in => {
                screen.info("Please logout to create a new account.")?
            }
            MenuChoice::Deposit
            | MenuChoice::Withdraw
            | MenuChoice::Transfer
            | MenuChoice::CheckBalance
            | MenuChoice::AccountInfo
                if !logged_in =>
            {
                screen.error("Please login first")?
            }
            MenuChoice::Login => login(session, screen)?,
            MenuChoice::CreateAccount => create_account(session, screen)?,
            MenuChoice::Deposit => deposit(session, screen)?,
            MenuChoice::Withdraw => withdraw(session, screen)?,
            MenuChoice::Transfer => transfer(session, screen)?,
            MenuChoice::CheckBalance => check_balance(session, screen)?,
            MenuChoice::AccountInfo => account_info(session, screen)?,
            MenuChoice::Logout => {
                if logged_in {
                    session.logout();
                    screen.success("Logged out successfully.")?;
                } else {
                    screen.error("You are not logged in.")?;
                }
            }
            MenuChoice::SwitchBank => return Ok(Flow::SwitchBank),
            MenuChoice::Exit => {
                screen.info("Thank you for using the Universal ATM System. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
    }
}

fn render_menu<C: Console>(session: &Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    let palette = screen.palette();
    let status = if session.is_logged_in() {
        palette.highlight("Logged In")
    } else {
        palette.muted("Guest")
    };

    screen.line("")?;
    screen.line(&palette.header(&format!("=== 🏦 {} ATM ===", session.bank().name())))?;
    screen.line(&format!("Status: {status}"))?;
    screen.line(&palette.muted("-----------------------"))?;
    for choice in MenuChoice::visible(session.is_logged_in()) {
        let key = palette.bold(&format!("[{}]", choice.key()));
        screen.line(&format!("  {} {}", key, choice.label()))?;
    }
    screen.line(&palette.muted("-----------------------"))
}

fn login<C: Console>(session: &mut Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    let number = match screen.ask("Account number: ")?.parse::<AccountNumber>() {
        Ok(number) => number,
        Err(e) => return screen.error(&format!("Login failed: {e}")),
    };
    let password = screen.ask_secret("Password: ")?;
    match session.login(number.as_str(), &password) {
        Ok(()) => screen.success("Login successful"),
        Err(e) if e.kind() == ErrorKind::Authentication => {
            screen.error("Login failed. Check your credentials.")
        }
        Err(e) => screen.error(&format!("Login failed: {e}")),
    }
}

fn create_account<C: Console>(
    session: &mut Session<'_>,
    screen: &mut Screen<'_, C>,
) -> Result<()> {
    let owner = screen.ask("Owner name: ")?;
    let password = screen.ask_secret("Password: ")?;
    let balance = match parse_opening_balance(&screen.ask("Initial balance (default 0): ")?) {
        Ok(balance) => balance,
        Err(msg) => return screen.error(&msg),
    };

    match session.open_account(&password, &owner, balance) {
        Ok(number) => {
            let number = screen.palette().bold(number.as_str());
            screen.success(&format!(
                "Account created successfully! Your Account Number is: {number}"
            ))
        }
        Err(e) => screen.error(&format!("Account creation failed: {e}")),
    }
}

fn deposit<C: Console>(session: &mut Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    let amount = match parse_amount(&screen.ask("Amount to deposit: ")?) {
        Ok(amount) => amount,
        Err(msg) => return screen.error(&msg),
    };
    match session.deposit(amount) {
        Ok(()) => screen.success(&format!("Successfully deposited {}", format_money(amount))),
        Err(e) => screen.error(&format!("Deposit failed: {e}")),
    }
}

fn withdraw<C: Console>(session: &mut Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    let amount = match parse_amount(&screen.ask("Amount to withdraw: ")?) {
        Ok(amount) => amount,
        Err(msg) => return screen.error(&msg),
    };
    match session.withdraw(amount) {
        Ok(()) => screen.success(&format!("Successfully withdrew {}", format_money(amount))),
        Err(e) => screen.error(&format!("Withdrawal failed: {e}")),
    }
}

fn transfer<C: Console>(session: &mut Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    let target = match screen.ask("Target account number: ")?.parse::<AccountNumber>() {
        Ok(target) => target,
        Err(e) => return screen.error(&format!("Transfer failed: {e}")),
    };
    let amount = match parse_amount(&screen.ask("Amount to transfer: ")?) {
        Ok(amount) => amount,
        Err(msg) => return screen.error(&msg),
    };
    match session.transfer(target.as_str(), amount) {
        Ok(()) => screen.success(&format!(
            "Successfully transferred {} to {}",
            format_money(amount),
            target
        )),
        Err(e) => screen.error(&format!("Transfer failed: {e}")),
    }
}

fn check_balance<C: Console>(session: &Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    match session.check_balance() {
        Ok(balance) => {
            let balance = screen.palette().bold(&format_money(balance));
            screen.info(&format!("Current Balance: {balance}"))
        }
        Err(e) => screen.error(&e.to_string()),
    }
}

fn account_info<C: Console>(session: &Session<'_>, screen: &mut Screen<'_, C>) -> Result<()> {
    let info = match session.account_info() {
        Ok(info) => info,
        Err(e) => return screen.error(&e.to_string()),
    };
    let palette = screen.palette();
    screen.info("Account Details:")?;
    screen.line(&format!("  • Account: {}", palette.bold(info.number.as_str())))?;
    screen.line(&format!("  • Owner:   {}", info.owner))?;
    screen.line(&format!(
        "  • Balance: {}",
        palette.highlight(&format_money(info.balance))
    ))
}
