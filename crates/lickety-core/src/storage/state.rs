//! Persisted active session.
//!
//! The app proper holds its session in memory, but a CLI process exits
//! between commands, so the active [`TimerSession`] is parked as JSON at
//! `session.json` under the data dir and reloaded on the next invocation.
//! Clearing the store is how "the outcome screen was exited" looks from
//! the command line.

use std::path::PathBuf;

use super::data_dir;
use crate::timer::TimerSession;

const SESSION_FILE: &str = "session.json";

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store in the default data directory.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            path: data_dir()?.join(SESSION_FILE),
        })
    }

    /// Store backed by an explicit file (tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The parked session, if one exists, parses, and satisfies the
    /// session invariants. A corrupt or tampered file reads as no session.
    pub fn load(&self) -> Option<TimerSession> {
        let json = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<TimerSession>(&json) {
            Ok(session) if session.is_consistent() => Some(session),
            Ok(_) => {
                log::warn!("discarding inconsistent session file");
                None
            }
            Err(e) => {
                log::warn!("discarding unreadable session file: {e}");
                None
            }
        }
    }

    pub fn save(&self, session: &TimerSession) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Discard the parked session. A missing file is fine.
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
