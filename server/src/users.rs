//! User lookup — the authorization collaborator for the index handler.
//!
//! The handler only checks existence: a request naming an unknown user is
//! rejected with 401. The trait seam lets a real directory service replace
//! the TOML-backed store without touching the handler.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::types::User;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Resolve a user by id, or `None` if no such user exists.
    async fn get_user_by_id(&self, id: &str) -> Option<User>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("could not read users file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse users file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("users file '{path}' is missing a [users] section")]
    MissingUsersSection { path: String },
}

/// In-memory store loaded once at startup from a TOML file with one
/// `[users.<id>]` table per user:
///
/// ```toml
/// [users.u-100]
/// email = "ada@example.com"
/// ```
#[derive(Debug)]
pub struct TomlUserStore {
    users: HashMap<String, User>,
}

impl TomlUserStore {
    /// Load a store from a `users.toml` file. Any failure is fatal to the
    /// caller — the gateway refuses to start without its user list.
    pub fn load(path: &Path) -> Result<Self, UserStoreError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|source| UserStoreError::Read { path: display.clone(), source })?;
        Self::parse(&content, &display)
    }

    fn parse(content: &str, path: &str) -> Result<Self, UserStoreError> {
        let table: toml::Table = content
            .parse()
            .map_err(|source| UserStoreError::Parse { path: path.to_string(), source })?;

        let users_table = table
            .get("users")
            .and_then(|v| v.as_table())
            .ok_or_else(|| UserStoreError::MissingUsersSection { path: path.to_string() })?;

        let mut users = HashMap::new();
        for (id, value) in users_table {
            let email =
                value.get("email").and_then(|v| v.as_str()).map(|s| s.to_string());
            users.insert(id.clone(), User { id: id.clone(), email });
        }

        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for TomlUserStore {
    async fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }
}
