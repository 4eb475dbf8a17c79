pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "atm-cli";
pub const APP_NAME: &str = "atm-cli";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "atm-cli.log";
/// Console filter when `RUST_LOG` is unset. Kept quiet so logs don't interleave with the menu.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const DEFAULT_BANKS: [&str; 3] = ["National Bank", "Cairo Bank", "Bank Misr"];
