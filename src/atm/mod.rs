//! Menu-driven ATM front end over a set of in-memory banks.

mod choice;
mod screen;
mod teller;

pub use choice::MenuChoice;
pub use screen::Screen;
pub use teller::Flow;

use anyhow::Result;
use bank_core::{Bank, Session};
use tracing::{debug, info};

use crate::{
    services::{Console, EndOfInput},
    ux::Palette,
};

pub struct Atm<'a, C: Console> {
    banks: &'a mut [Bank],
    screen: Screen<'a, C>,
}

impl<'a, C: Console> Atm<'a, C> {
    pub fn new(banks: &'a mut [Bank], console: &'a mut C, palette: Palette) -> Self {
        Self {
            banks,
            screen: Screen::new(console, palette),
        }
    }

    /// Run until the user picks Exit or closes input.
    pub fn run(&mut self) -> Result<()> {
        match self.run_until_exit() {
            Err(e) if e.downcast_ref::<EndOfInput>().is_some() => {
                debug!("Input closed, leaving the ATM");
                Ok(())
            }
            other => other,
        }
    }

    fn run_until_exit(&mut self) -> Result<()> {
        self.screen.clear()?;
        let welcome = self.screen.palette().header("Welcome to the Universal ATM System");
        self.screen.line(&welcome)?;

        loop {
            let Some(index) = self.select_bank()? else {
                continue;
            };
            info!(bank = %self.banks[index].name(), "Bank selected");
            self.screen.clear()?;

            let mut session = Session::new(&mut self.banks[index]);
            match teller::serve(&mut session, &mut self.screen)? {
                Flow::Exit => return Ok(()),
                Flow::SwitchBank => {
                    self.screen.clear()?;
                    self.screen.info("Switching banks...")?;
                }
            }
        }
    }

    fn select_bank(&mut self) -> Result<Option<usize>> {
        let palette = self.screen.palette();
        self.screen.line("")?;
        self.screen.line(&palette.header("=== Available Banks ==="))?;
        for (i, bank) in self.banks.iter().enumerate() {
            let key = palette.bold(&format!("[{}]", i + 1));
            self.screen.line(&format!("  {} {}", key, bank.name()))?;
        }
        self.screen.line(&palette.muted("-----------------------"))?;

        let answer = self
            .screen
            .ask(&format!("Select bank (1-{}): ", self.banks.len()))?;
        match answer.parse::<usize>() {
            Ok(choice) if (1..=self.banks.len()).contains(&choice) => Ok(Some(choice - 1)),
            _ => {
                self.screen
                    .error("Invalid bank selection. Please try again.")?;
                Ok(None)
            }
        }
    }
}
