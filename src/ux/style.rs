use rust_decimal::Decimal;
use std::io::{stdout, IsTerminal};

const HEADER: &str = "\x1b[1;36m";
const PROMPT: &str = "\x1b[1;33m";
const SUCCESS: &str = "\x1b[92m";
const ERROR: &str = "\x1b[91m";
const INFO: &str = "\x1b[94m";
const MUTED: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// ANSI colouring for menu text, a no-op when output is not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            enabled: stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(HEADER, text)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(PROMPT, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(MUTED, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn highlight(&self, text: &str) -> String {
        self.paint(SUCCESS, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(SUCCESS, &format!("✔ {text}"))
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(ERROR, &format!("✖ {text}"))
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(INFO, &format!("ℹ {text}"))
    }
}

/// `$1,234.50` style rendering, rounded to cents.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(0)), "$0.00");
        assert_eq!(format_money(dec!(60)), "$60.00");
        assert_eq!(format_money(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_money(dec!(999999.99)), "$999,999.99");
        assert_eq!(format_money(dec!(1000000)), "$1,000,000.00");
        assert_eq!(format_money(dec!(-1500.25)), "-$1,500.25");
    }

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.header("=== Banks ==="), "=== Banks ===");
        assert_eq!(palette.success("Done"), "✔ Done");
        assert_eq!(palette.error("Nope"), "✖ Nope");
    }

    #[test]
    fn test_enabled_palette_wraps_in_ansi() {
        let palette = Palette { enabled: true };
        assert_eq!(palette.bold("[1]"), "\x1b[1m[1]\x1b[0m");
    }
}
