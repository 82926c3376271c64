use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::models::UserProfile;

/// On-disk shape: two entries, mirrored on every change.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
struct PersistedSession {
    user: Option<UserProfile>,
    logged_in: bool,
}

/// The one piece of state shared across views: the current user and a
/// logged-in flag, persisted to durable storage. Owned by the application
/// root and injected where needed, not an ambient singleton. Mutations go
/// through the setters so the persisted copy never diverges from memory.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    user: Option<UserProfile>,
    logged_in: bool,
}

impl SessionStore {
    /// Read the persisted session. Missing or malformed data initializes
    /// to (no user, logged out); this never fails.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let persisted = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<PersistedSession>(&raw).ok())
            .unwrap_or_default();

        // A logged-in flag without a user is treated as logged out.
        let logged_in = persisted.logged_in && persisted.user.is_some();
        if persisted.logged_in && !logged_in {
            warn!("Persisted session marked logged in without a user; treating as logged out");
        }

        Self {
            path,
            user: persisted.user,
            logged_in,
        }
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in && self.user.is_some()
    }

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.user = user;
        self.flush();
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
        self.flush();
    }

    /// The contract consumed by protected pages on mount: callers redirect
    /// to the login entry point on `NotLoggedIn`.
    pub fn require_session(&self) -> ClientResult<&UserProfile> {
        if !self.logged_in {
            return Err(ClientError::NotLoggedIn);
        }
        self.user.as_ref().ok_or(ClientError::NotLoggedIn)
    }

    /// Persist both entries as a single best-effort write. Failures are
    /// logged and swallowed; in-memory state stays authoritative.
    fn flush(&self) {
        if let Err(err) = self.try_flush() {
            warn!("Failed to persist session: {}", err);
        }
    }

    fn try_flush(&self) -> ClientResult<()> {
        let persisted = PersistedSession {
            user: self.user.clone(),
            logged_in: self.logged_in,
        };
        let raw = serde_json::to_string(&persisted)
            .map_err(|err| ClientError::Serialization(err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| ClientError::Persistence(err.to_string()))?;
            }
        }
        fs::write(&self.path, raw).map_err(|err| ClientError::Persistence(err.to_string()))?;
        debug!("Session persisted to {}", self.path.display());
        Ok(())
    }
}
