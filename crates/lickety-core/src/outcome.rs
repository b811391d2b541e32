//! Session outcome: derived once at the terminal transition, never stored
//! by the engine beyond that.

use serde::{Deserialize, Serialize};

use crate::catalog::Task;

/// Why a session ended without success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    StoppedEarly,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::StoppedEarly => write!(f, "stopped-early"),
        }
    }
}

/// The verdict handed to the result screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub task: Task,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<StopReason>,
}

impl Outcome {
    pub fn success(task: Task) -> Self {
        Self {
            task,
            succeeded: true,
            reason: None,
        }
    }

    pub fn stopped_early(task: Task) -> Self {
        Self {
            task,
            succeeded: false,
            reason: Some(StopReason::StoppedEarly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TimerMode};

    #[test]
    fn stop_reason_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&StopReason::StoppedEarly).unwrap(),
            "\"stopped-early\""
        );
    }

    #[test]
    fn success_outcome_has_no_reason() {
        let task = Catalog::get(TimerMode::BeatTimer, 0).unwrap();
        let o = Outcome::success(task);
        assert!(o.succeeded);
        assert!(o.reason.is_none());
        // `reason` is omitted from JSON when absent.
        let json = serde_json::to_value(&o).unwrap();
        assert!(json.get("reason").is_none());
    }
}
