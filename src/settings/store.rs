use anyhow::{anyhow, Context, Result};
use bank_core::CredentialParams;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{from_str, to_string_pretty};
use std::{fs, path::PathBuf};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_BANKS, SETTINGS_FILE,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Banks offered on the selection screen, in display order
    #[serde(default = "default_banks")]
    pub banks: Vec<String>,
    /// Argon2 cost for new account credentials, library defaults when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_cost: Option<CredentialCost>,
}

fn default_banks() -> Vec<String> {
    DEFAULT_BANKS.iter().map(|name| name.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            banks: default_banks(),
            credential_cost: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl CredentialCost {
    pub fn params(&self) -> Result<CredentialParams> {
        CredentialParams::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| anyhow!("Invalid credential cost in settings: {}", e))
    }
}

impl Settings {
    pub fn credential_params(&self) -> Result<CredentialParams> {
        match &self.credential_cost {
            Some(cost) => cost.params(),
            None => Ok(CredentialParams::default()),
        }
    }
}

pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

pub struct FileSettingsStore {
    directory: PathBuf, // platform config directory (from ProjectDirs)
    file: &'static str, // "settings.json"
}

impl FileSettingsStore {
    /// Build from ProjectDirs config directory:
    ///   - Windows:   %APPDATA%\<qualifier>\<org>\<app>\settings.json
    ///   - macOS:     ~/Library/Application Support/<app>/settings.json
    ///   - Linux:     ~/.config/<app>/settings.json
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine project directories"))?;

        Ok(Self {
            directory: project_dirs.config_dir().to_path_buf(),
            file: SETTINGS_FILE,
        })
    }

    fn path(&self) -> PathBuf {
        self.directory.join(self.file)
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create settings directory: {}",
                self.directory.display()
            )
        })?;
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                let defaults = Settings::default();
                self.save(&defaults)?;
                return Ok(defaults);
            }
        };
        from_str(&content).context("Failed to deserialize settings")
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create settings directory: {}",
                self.directory.display()
            )
        })?;
        fs::write(self.path(), to_string_pretty(settings)?)
            .with_context(|| format!("Failed to persist settings file: {}", self.path().display()))
    }
}

/// Settings at an explicit path, as given with `--settings`. The file must exist.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        from_str(&content).context("Failed to deserialize settings")
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        fs::write(&self.path, to_string_pretty(settings)?)
            .with_context(|| format!("Failed to persist settings file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_settings_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("atm-cli-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.banks, vec!["National Bank", "Cairo Bank", "Bank Misr"]);
        assert!(settings.credential_cost.is_none());
    }

    #[test]
    fn test_missing_banks_key_falls_back_to_defaults() {
        let settings: Settings = from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let settings: Settings = from_str(
            r#"{"banks":["Nile Bank"],"credentialCost":{"memoryKib":8,"iterations":1,"parallelism":1}}"#,
        )
        .unwrap();
        assert_eq!(settings.banks, vec!["Nile Bank"]);
        let params = settings.credential_params().unwrap();
        assert_eq!(params.m_cost(), 8);
        assert_eq!(params.t_cost(), 1);
    }

    #[test]
    fn test_invalid_credential_cost() {
        let cost = CredentialCost {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        assert!(cost.params().is_err());
    }

    #[test]
    fn test_json_store_save_then_load() {
        let path = temp_settings_path("store");
        let store = JsonFileSettingsStore::new(path.clone());
        let settings = Settings {
            banks: vec!["Alexandria Bank".to_string()],
            credential_cost: None,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_json_store_missing_file() {
        let store = JsonFileSettingsStore::new(temp_settings_path("missing"));
        let err = store.load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read settings file"));
    }
}
