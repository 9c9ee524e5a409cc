/// Configuration for the Vodara client
use std::env;
use std::path::PathBuf;

/// Account store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Location of the credential store file
    pub accounts_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            accounts_file: PathBuf::from("./vodara-accounts.json"),
        }
    }
}

impl StoreConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            accounts_file: env::var("VODARA_ACCOUNTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./vodara-accounts.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.accounts_file, PathBuf::from("./vodara-accounts.json"));
    }
}
