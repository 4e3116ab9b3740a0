use anyhow::{Context, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Overrides the default session file location (mainly for tests and
/// scripted use).
pub const SESSION_FILE_ENV_VAR: &str = "SMART_RECIPE_SESSION_FILE";

const SESSION_FILE_NAME: &str = "user_session";

/// Stores the one opaque session token that scopes saved recipes to this
/// machine, the way the browser build kept it in a single local-storage
/// key. The token is a correlation key, not a credential.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Resolves the session file: the env override if set, otherwise
    /// `<data dir>/smart_recipe/user_session`.
    pub fn from_env() -> Result<SessionStore> {
        if let Ok(path) = env::var(SESSION_FILE_ENV_VAR) {
            return Ok(SessionStore { path: path.into() });
        }
        let data_dir = dirs::data_dir().context("Could not determine a data directory")?;
        Ok(SessionStore {
            path: data_dir.join("smart_recipe").join(SESSION_FILE_NAME),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> SessionStore {
        SessionStore { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the persisted token, or None if no save action has ever
    /// created one. An empty or whitespace-only file counts as absent.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                Ok(if token.is_empty() { None } else { Some(token) })
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| {
                format!("Failed to read session file '{}'", self.path.display())
            }),
        }
    }

    /// Returns the existing token or mints a new one. A new token is
    /// persisted before it is handed back, so a save request never uses a
    /// token the next run cannot see.
    pub fn get_or_create(&self) -> Result<String> {
        if let Some(token) = self.load()? {
            return Ok(token);
        }
        let token = new_session_token();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory '{}'", parent.display())
            })?;
        }
        fs::write(&self.path, &token).with_context(|| {
            format!("Failed to write session file '{}'", self.path.display())
        })?;
        Ok(token)
    }
}

/// `user_<unix millis>_<9 random alphanumerics>`, matching the token shape
/// the original client minted.
fn new_session_token() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("user_{}_{}", millis, suffix.to_lowercase())
}
