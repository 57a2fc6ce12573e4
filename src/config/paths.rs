//! Path management for My Wallet
//!
//! Provides XDG-compliant path resolution for settings, the expense store,
//! and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `MY_WALLET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/my-wallet` or `~/.config/my-wallet`
//! 3. Windows: `%APPDATA%\my-wallet`

use std::path::PathBuf;

use crate::error::WalletError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MY_WALLET_DATA_DIR";

/// Manages all paths used by My Wallet
#[derive(Debug, Clone)]
pub struct WalletPaths {
    /// Base directory for all My Wallet data
    base_dir: PathBuf,
}

impl WalletPaths {
    /// Create a new WalletPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WalletError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WalletPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/my-wallet/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/my-wallet/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the default path of the expense store
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WalletError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WalletError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WalletError> {
    unix_default_path(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

/// Empty variables count as unset so they never yield a relative path
#[cfg(not(windows))]
fn unix_default_path(xdg: Option<String>, home: Option<String>) -> Result<PathBuf, WalletError> {
    if let Some(xdg) = xdg.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join("my-wallet"));
    }
    let home = home
        .filter(|v| !v.is_empty())
        .ok_or_else(|| WalletError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("my-wallet"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WalletError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WalletError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("my-wallet"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.csv")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_empty_xdg_falls_back_to_home() {
        let path = unix_default_path(Some(String::new()), Some("/home/alice".into())).unwrap();
        assert_eq!(path, PathBuf::from("/home/alice/.config/my-wallet"));

        let path = unix_default_path(Some("/xdg".into()), Some("/home/alice".into())).unwrap();
        assert_eq!(path, PathBuf::from("/xdg/my-wallet"));

        let err = unix_default_path(Some(String::new()), Some(String::new())).unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }
}
