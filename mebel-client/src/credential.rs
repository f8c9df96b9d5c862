// mebel-client/src/credential.rs
// Session storage - JSON file standing in for browser local storage

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Session;

/// Default file name inside the credential directory
pub const SESSION_FILE: &str = "session.json";

/// Stored session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub session: Session,
    pub saved_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            saved_at: Utc::now(),
        }
    }

    pub fn token(&self) -> &str {
        &self.session.token
    }
}

/// Credential storage
#[derive(Debug, Clone)]
pub struct CredentialStorage {
    path: PathBuf,
}

impl CredentialStorage {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    /// Storage at `<dir>/session.json`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, SESSION_FILE)
    }

    /// Ensure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, credential: &Credential) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(credential)?;
        fs::write(&self.path, json)
    }

    /// Load the stored credential; a missing or unreadable file reads as none
    pub fn load(&self) -> Option<Credential> {
        if !self.path.exists() {
            return None;
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read credential");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(credential) => Some(credential),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt credential");
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
