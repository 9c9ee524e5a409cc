/// Vodara Client - account and session credential model
///
/// Client-side core of the Vodara video platform SDK: the credential
/// object returned by a token exchange, its JSON wire contract, and
/// file-backed credential storage. Transport, endpoint routing, and the
/// OAuth exchange itself live in the consuming application.

pub mod account;
pub mod config;
pub mod error;
pub mod user;

pub use account::{Account, AccountStore};
pub use config::StoreConfig;
pub use error::{ClientError, ClientResult};
pub use user::User;
