use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::TimerMode;
use crate::outcome::Outcome;
use crate::timer::SessionStatus;

/// Every session state change produces an Event.
/// The CLI prints them; a GUI shell would consume them the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        task_title: String,
        task_emoji: String,
        mode: TimerMode,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    /// The clock ran out. Always a success, in either mode.
    SessionCompleted {
        outcome: Outcome,
        at: DateTime<Utc>,
    },
    /// The user pressed "I Stopped" in countdown mode with time remaining.
    SessionStoppedEarly {
        outcome: Outcome,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        status: SessionStatus,
        task_title: String,
        task_emoji: String,
        mode: TimerMode,
        remaining_secs: u64,
        total_secs: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The outcome carried by a terminal event, if any.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Event::SessionCompleted { outcome, .. } => Some(outcome),
            Event::SessionStoppedEarly { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}
