use anyhow::Result;
use std::{
    error::Error,
    fmt,
    io::{self, stdin, stdout, BufRead, IsTerminal, Write},
};

/// Raised when the user closes standard input (Ctrl-D) in the middle of a prompt.
#[derive(Debug)]
pub struct EndOfInput;

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "End of input")
    }
}

impl Error for EndOfInput {}

/// Line-oriented terminal the ATM menu talks through.
///
/// Reads return `None` once input is exhausted.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
    /// Like [`Console::read_line`] but without echoing what is typed.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        // rpassword needs a tty, fall back to plain reads when input is piped
        if !stdin().is_terminal() {
            return self.read_line(prompt);
        }
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(stdout(), "{line}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if stdout().is_terminal() {
            print!("\x1B[2J\x1B[1;1H");
            stdout().flush()?;
        }
        Ok(())
    }
}
