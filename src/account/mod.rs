/// Account credential model
///
/// The session credential handed out by the platform's token exchange,
/// either for a logged-in user or for client credentials.

mod store;

pub use store::AccountStore;

use crate::error::{ClientError, ClientResult};
use crate::user::User;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An authenticated or anonymous session credential
///
/// Carries the bearer token issued by the authentication service along
/// with the token type, granted scope, and (for truly authenticated
/// sessions) the embedded user record. An account without a user is a
/// valid client-credentials account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,

    /// Serialized form of `user`, populated at most once by `user_json`.
    /// Never part of the wire format.
    #[serde(skip)]
    user_json: OnceCell<String>,
}

impl Account {
    /// Create an empty account, to be populated by deserialization
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account holding only an access token
    ///
    /// `None` or an empty token is accepted; the resulting account
    /// reports itself as unauthenticated.
    pub fn from_access_token(access_token: Option<String>) -> Self {
        Self {
            access_token,
            ..Self::default()
        }
    }

    /// Create a fully authenticated account from a token exchange result
    ///
    /// All three credential fields must be non-empty. `user_json` is the
    /// JSON-encoded user record from the exchange response; the literal
    /// `null` is accepted and yields an account without a user. Decode
    /// failures surface as [`ClientError::Json`], untranslated.
    pub fn authenticated(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        scope: impl Into<String>,
        user_json: &str,
    ) -> ClientResult<Self> {
        let access_token = access_token.into();
        let token_type = token_type.into();
        let scope = scope.into();

        require_non_empty("access_token", &access_token)?;
        require_non_empty("token_type", &token_type)?;
        require_non_empty("scope", &scope)?;

        let user: Option<User> = serde_json::from_str(user_json)?;

        Ok(Self {
            access_token: Some(access_token),
            token_type: Some(token_type),
            scope: Some(scope),
            user,
            user_json: OnceCell::new(),
        })
    }

    /// Whether this credential represents an authenticated session
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .map_or(false, |token| !token.is_empty())
    }

    /// Bearer token, if any
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Token type reported by the exchange (e.g. "bearer")
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Granted scope, opaque at this layer
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Embedded user record, absent for client-credentials accounts
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replace the embedded user record
    ///
    /// A serialization already cached by [`Account::user_json`] is kept
    /// as-is; callers persisting the returned string see the user that
    /// was current when the cache was first populated.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// JSON-encoded form of the embedded user, for credential storage
    ///
    /// Returns `None` when no user is present. The encoding is computed
    /// once and reused on later calls.
    pub fn user_json(&self) -> ClientResult<Option<&str>> {
        let Some(user) = self.user.as_ref() else {
            return Ok(None);
        };

        let cached = self.user_json.get_or_try_init(|| {
            debug!("serializing embedded user for credential storage");
            serde_json::to_string(user)
        })?;

        Ok(Some(cached.as_str()))
    }
}

/// The serialization cache is derived state and takes no part in equality.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.access_token == other.access_token
            && self.token_type == other.token_type
            && self.scope == other.scope
            && self.user == other.user
    }
}

fn require_non_empty(field: &str, value: &str) -> ClientResult<()> {
    if value.is_empty() {
        return Err(ClientError::Validation(format!(
            "{} is required for an authenticated account",
            field
        )));
    }
    Ok(())
}
