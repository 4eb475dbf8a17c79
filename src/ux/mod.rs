pub mod style;

pub use style::{format_money, Palette};
