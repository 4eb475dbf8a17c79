mod consts;
mod logging;
mod store;

pub use logging::init_logger;
pub use store::{CredentialCost, FileSettingsStore, JsonFileSettingsStore, Settings, SettingsStore};
