use anyhow::Result;

use crate::{
    services::{Console, EndOfInput},
    ux::Palette,
};

/// A [`Console`] plus the palette used to style what is written to it.
pub struct Screen<'c, C: Console> {
    console: &'c mut C,
    palette: Palette,
}

impl<'c, C: Console> Screen<'c, C> {
    pub fn new(console: &'c mut C, palette: Palette) -> Self {
        Self { console, palette }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        self.console.write_line(text)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.console.clear()
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        let line = self.palette.success(text);
        self.line(&line)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        let line = self.palette.error(text);
        self.line(&line)
    }

    pub fn info(&mut self, text: &str) -> Result<()> {
        let line = self.palette.info(text);
        self.line(&line)
    }

    /// Prompt for one trimmed line, failing with [`EndOfInput`] once input is closed.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        let prompt = self.palette.prompt(label);
        match self.console.read_line(&prompt)? {
            Some(answer) => Ok(answer.trim().to_string()),
            None => Err(EndOfInput.into()),
        }
    }

    /// Same as [`Screen::ask`] without echo.
    pub fn ask_secret(&mut self, label: &str) -> Result<String> {
        let prompt = self.palette.prompt(label);
        match self.console.read_secret(&prompt)? {
            Some(secret) => Ok(secret.trim().to_string()),
            None => Err(EndOfInput.into()),
        }
    }
}
