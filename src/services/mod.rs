pub mod console;

pub use console::{Console, EndOfInput, StdConsole};
