use anyhow::Result;

pub mod atm;
pub mod cli;
pub mod commands;
pub mod services;
pub mod settings;
pub mod ux;
pub mod validate;

use cli::{Cli, Commands};
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
}

impl AppCtx {
    pub fn new(settings_store: Box<dyn SettingsStore>) -> Self {
        Self { settings_store }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let settings_store: Box<dyn SettingsStore> = match cli.settings {
        Some(path) => Box::new(JsonFileSettingsStore::new(path)),
        None => Box::new(FileSettingsStore::new()?),
    };
    let ctx = AppCtx::new(settings_store);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::handle(&ctx),
        Commands::Banks => commands::banks::handle(&ctx),
        Commands::Config(args) => commands::config::handle(args, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::ConfigArgs,
        commands::{config, run::open_banks},
        settings::{CredentialCost, Settings},
    };
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemorySettingsStore {
        settings: RefCell<Settings>,
    }

    impl SettingsStore for MemorySettingsStore {
        fn load(&self) -> Result<Settings> {
            Ok(self.settings.borrow().clone())
        }

        fn save(&self, settings: &Settings) -> Result<()> {
            *self.settings.borrow_mut() = settings.clone();
            Ok(())
        }
    }

    fn ctx_with(settings: Settings) -> AppCtx {
        AppCtx::new(Box::new(MemorySettingsStore {
            settings: RefCell::new(settings),
        }))
    }

    #[test]
    fn test_open_banks_from_settings() {
        let ctx = ctx_with(Settings {
            banks: vec!["Nile Bank".into(), "Delta Bank".into()],
            credential_cost: Some(CredentialCost {
                memory_kib: 8,
                iterations: 1,
                parallelism: 1,
            }),
        });
        let mut banks = open_banks(&ctx).unwrap();
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[1].name(), "Delta Bank");
        assert!(banks.iter().all(|bank| bank.is_empty()));

        let number = banks[0].open_account("pw", "Alice").unwrap();
        assert!(banks[0].authenticate(number.as_str(), "pw").is_some());
    }

    #[test]
    fn test_open_banks_requires_a_bank() {
        let ctx = ctx_with(Settings {
            banks: vec![],
            credential_cost: None,
        });
        assert!(open_banks(&ctx).is_err());
    }

    #[test]
    fn test_config_replaces_bank_list() {
        let ctx = ctx_with(Settings::default());
        config::handle(
            ConfigArgs {
                banks: vec!["Alexandria Bank".into()],
            },
            &ctx,
        )
        .unwrap();
        assert_eq!(
            ctx.settings_store.load().unwrap().banks,
            vec!["Alexandria Bank"]
        );
    }
}
