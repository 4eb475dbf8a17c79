pub mod banks;
pub mod config;
pub mod run;
