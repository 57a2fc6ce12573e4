//! User settings for My Wallet
//!
//! Manages user preferences: currency symbol, store location, the suggested
//! category list, and how an unparsable amount is reported.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;

/// Categories offered as suggestions when recording an expense
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Rent",
    "Supplies",
    "Transport",
    "Utilities",
    "Entertainment",
    "Education",
    "Other",
];

/// User settings for My Wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Override for the expense store location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,

    /// Suggested categories (any non-empty category is still accepted)
    #[serde(default = "default_categories")]
    pub suggested_categories: Vec<String>,

    /// Suppress the message for an unparsable amount, as the old GUI did
    #[serde(default)]
    pub silent_invalid_amount: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            store_file: None,
            suggested_categories: default_categories(),
            silent_invalid_amount: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WalletError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the expense store path, honoring the override
    ///
    /// A relative override is taken relative to the base directory.
    pub fn store_path(&self, paths: &WalletPaths) -> PathBuf {
        match &self.store_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.expenses_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.suggested_categories.len(), 8);
        assert_eq!(settings.suggested_categories[0], "Food");
        assert!(!settings.silent_invalid_amount);
        assert!(settings.store_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.silent_invalid_amount = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.silent_invalid_amount);
    }

    #[test]
    fn test_load_missing_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.suggested_categories.len(), 8);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }

    #[test]
    fn test_store_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.store_path(&paths), paths.expenses_file());

        settings.store_file = Some(PathBuf::from("mine.csv"));
        assert_eq!(settings.store_path(&paths), temp_dir.path().join("mine.csv"));

        let absolute = temp_dir.path().join("elsewhere.csv");
        settings.store_file = Some(absolute.clone());
        assert_eq!(settings.store_path(&paths), absolute);
    }
}
