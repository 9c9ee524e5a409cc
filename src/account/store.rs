/// File-backed credential storage
///
/// Persists named account entries the way platform credential storage
/// expects them: the token fields plus the user profile as an opaque
/// JSON string (the output of [`Account::user_json`]).
use crate::account::Account;
use crate::config::StoreConfig;
use crate::error::{ClientError, ClientResult};
use crate::user::User;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One persisted credential entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,

    /// User profile as stored JSON, re-decoded on load
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,

    saved_at: DateTime<Utc>,
}

/// Store of named session credentials, persisted to a JSON file
pub struct AccountStore {
    path: PathBuf,
    accounts: HashMap<String, StoredAccount>,
}

impl AccountStore {
    /// Open a store at `path`, loading existing entries if the file exists
    pub fn open(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();

        let accounts: HashMap<String, StoredAccount> = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                ClientError::Storage(format!(
                    "corrupt account store {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            HashMap::new()
        };

        info!(
            "opened account store {} ({} entries)",
            path.display(),
            accounts.len()
        );

        Ok(Self { path, accounts })
    }

    /// Open the store at the configured location
    pub fn from_config(config: &StoreConfig) -> ClientResult<Self> {
        Self::open(config.accounts_file.clone())
    }

    /// Persist `account` under `name`, replacing any previous entry
    pub fn put(&mut self, name: &str, account: &Account) -> ClientResult<()> {
        let entry = StoredAccount {
            access_token: account.access_token().map(str::to_owned),
            token_type: account.token_type().map(str::to_owned),
            scope: account.scope().map(str::to_owned),
            user_data: account.user_json()?.map(str::to_owned),
            saved_at: Utc::now(),
        };

        self.accounts.insert(name.to_owned(), entry);
        self.flush()?;

        debug!("stored account entry '{}'", name);
        Ok(())
    }

    /// Reconstruct the account stored under `name`
    pub fn get(&self, name: &str) -> ClientResult<Option<Account>> {
        let Some(entry) = self.accounts.get(name) else {
            return Ok(None);
        };

        let user: Option<User> = match entry.user_data.as_deref() {
            Some(raw) => serde_json::from_str(raw)?,
            None => None,
        };

        Ok(Some(Account {
            access_token: entry.access_token.clone(),
            token_type: entry.token_type.clone(),
            scope: entry.scope.clone(),
            user,
            user_json: OnceCell::new(),
        }))
    }

    /// Remove the entry under `name`; returns whether one existed
    pub fn remove(&mut self, name: &str) -> ClientResult<bool> {
        let removed = self.accounts.remove(name).is_some();
        if removed {
            self.flush()?;
            info!("removed account entry '{}'", name);
        }
        Ok(removed)
    }

    /// Names of all stored entries
    pub fn names(&self) -> Vec<String> {
        self.accounts.keys().cloned().collect()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.accounts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("accounts.json")
    }

    #[test]
    fn test_put_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let user_json = json!({"uri": "/users/7", "name": "Ada"}).to_string();
        let account =
            Account::authenticated("tok-7", "bearer", "public private", &user_json).unwrap();

        let mut store = AccountStore::open(store_path(&dir)).unwrap();
        store.put("ada", &account).unwrap();

        // Reopen from disk to prove persistence
        let reopened = AccountStore::open(store_path(&dir)).unwrap();
        assert_eq!(reopened.len(), 1);

        let loaded = reopened.get("ada").unwrap().expect("entry should exist");
        assert_eq!(loaded, account);
        assert!(loaded.is_authenticated());
    }

    #[test]
    fn test_client_credentials_entry_has_no_user() {
        let dir = tempfile::tempdir().unwrap();
        let account = Account::from_access_token(Some("app-token".to_string()));

        let mut store = AccountStore::open(store_path(&dir)).unwrap();
        store.put("app", &account).unwrap();

        let loaded = store.get("app").unwrap().unwrap();
        assert!(loaded.user().is_none());
        assert_eq!(loaded.user_json().unwrap(), None);
        assert_eq!(loaded.access_token(), Some("app-token"));
    }

    #[test]
    fn test_get_missing_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::open(store_path(&dir)).unwrap();
        assert!(store.get("nobody").unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = AccountStore::open(store_path(&dir)).unwrap();
        store
            .put("ada", &Account::from_access_token(Some("tok".to_string())))
            .unwrap();

        assert!(store.remove("ada").unwrap());
        assert!(!store.remove("ada").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            accounts_file: dir.path().join("accounts.json"),
        };

        let store = AccountStore::from_config(&config).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.path(), config.accounts_file.as_path());
    }

    #[test]
    fn test_corrupt_store_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "{not json").unwrap();

        let result = AccountStore::open(&path);
        assert!(matches!(result, Err(ClientError::Storage(_))));
    }
}
