//! Timer session implementation.
//!
//! The session is a counter-based state machine. It does not use internal
//! threads or wall-clock reads - the caller drives it by calling `tick()`
//! once per elapsed second (see [`super::Ticker`] for the scheduling side).
//!
//! ## State Transitions
//!
//! ```text
//! Pending -> Running -> (Completed | StoppedEarly)
//! ```
//!
//! Completed and StoppedEarly are terminal; every operation on a terminal
//! session is rejected without changing state, and exactly one [`Outcome`]
//! is produced per session, at the terminal transition.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::{Task, TimerMode};
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Pending,
    Running,
    Completed,
    StoppedEarly,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::StoppedEarly)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Pending => write!(f, "pending"),
            SessionStatus::Running => write!(f, "running"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::StoppedEarly => write!(f, "stopped-early"),
        }
    }
}

/// One run of one task against the clock.
///
/// Created when a task is selected, discarded when the result screen is
/// left. Serializable so a CLI invocation can pick up where the last one
/// stopped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    task: Task,
    mode: TimerMode,
    status: SessionStatus,
    total_secs: u64,
    /// Invariant: 0 <= remaining_secs <= total_secs; decrements by exactly
    /// one per `tick()` while Running.
    remaining_secs: u64,
    /// Set exactly once, at the terminal transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
}

impl TimerSession {
    /// Create a session in `Pending` with the full duration on the clock.
    pub fn new(task: Task, mode: TimerMode) -> Result<Self> {
        if task.duration_min == 0 {
            return Err(CoreError::InvalidDuration {
                minutes: task.duration_min,
            });
        }
        let total_secs = task.duration_secs();
        Ok(Self {
            task,
            mode,
            status: SessionStatus::Pending,
            total_secs,
            remaining_secs: total_secs,
            outcome: None,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// The outcome, once the session has ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Whether the state satisfies the session invariants.
    ///
    /// Always true for sessions driven through this API; a deserialized
    /// session (hand-edited or corrupted on disk) may violate them and
    /// should be discarded.
    pub fn is_consistent(&self) -> bool {
        self.remaining_secs <= self.total_secs
            && (self.status != SessionStatus::Running || self.remaining_secs > 0)
            && (self.status != SessionStatus::Pending || self.remaining_secs == self.total_secs)
            && (self.status.is_terminal() == self.outcome.is_some())
    }

    /// 0.0 .. 1.0 progress through the session.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / self.total_secs as f64)
    }

    /// Remaining time as "M:SS", the way the timer dial shows it.
    pub fn format_remaining(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{}:{:02}", mins, secs)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            status: self.status,
            task_title: self.task.title.clone(),
            task_emoji: self.task.emoji.clone(),
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the countdown. Legal only from `Pending`.
    pub fn start(&mut self) -> Result<Event> {
        if self.status != SessionStatus::Pending {
            return Err(self.rejected("start"));
        }
        self.status = SessionStatus::Running;
        Ok(Event::SessionStarted {
            task_title: self.task.title.clone(),
            task_emoji: self.task.emoji.clone(),
            mode: self.mode,
            total_secs: self.total_secs,
            at: Utc::now(),
        })
    }

    /// Advance the clock by one second. Legal only while `Running`.
    ///
    /// Returns `Ok(Some(event))` when the clock reaches zero: the session
    /// auto-completes as a success in either mode, since running out the
    /// clock is the natural end of both games.
    pub fn tick(&mut self) -> Result<Option<Event>> {
        if self.status != SessionStatus::Running {
            return Err(self.rejected("tick"));
        }
        // Running implies remaining > 0; a deserialized session may lie.
        self.remaining_secs = match self.remaining_secs.checked_sub(1) {
            Some(n) => n,
            None => return Err(self.rejected("tick")),
        };
        if self.remaining_secs == 0 {
            return Ok(Some(self.finish(Outcome::success(self.task.clone()))));
        }
        Ok(None)
    }

    /// The user's "I Did It!" / "I Stopped" press. Legal only while
    /// `Running` (at zero remaining, `tick` has already ended the session).
    ///
    /// Beat-the-timer: any press before the clock expires is a win. The
    /// self-report is trusted; there is no independent completion signal.
    /// Countdown: a press before the clock expires is an early stop and
    /// loses.
    pub fn request_completion(&mut self) -> Result<Event> {
        if self.status != SessionStatus::Running || self.remaining_secs == 0 {
            return Err(self.rejected("request completion"));
        }
        let event = match self.mode {
            TimerMode::BeatTimer => self.finish(Outcome::success(self.task.clone())),
            TimerMode::Countdown => self.finish(Outcome::stopped_early(self.task.clone())),
        };
        Ok(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Terminal transition: record the outcome once and emit its event.
    fn finish(&mut self, outcome: Outcome) -> Event {
        let at = Utc::now();
        let event = if outcome.succeeded {
            self.status = SessionStatus::Completed;
            Event::SessionCompleted {
                outcome: outcome.clone(),
                at,
            }
        } else {
            self.status = SessionStatus::StoppedEarly;
            Event::SessionStoppedEarly {
                outcome: outcome.clone(),
                at,
            }
        };
        self.outcome = Some(outcome);
        event
    }

    fn rejected(&self, op: &'static str) -> CoreError {
        log::debug!("ignoring {op} while {}", self.status);
        CoreError::InvalidTransition {
            op,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn brush_teeth() -> Task {
        Catalog::find(TimerMode::Countdown, "Brush Teeth").unwrap()
    }

    fn session(mode: TimerMode) -> TimerSession {
        TimerSession::new(brush_teeth(), mode).unwrap()
    }

    #[test]
    fn new_session_is_pending_with_full_clock() {
        let s = session(TimerMode::Countdown);
        assert_eq!(s.status(), SessionStatus::Pending);
        assert_eq!(s.total_secs(), 120);
        assert_eq!(s.remaining_secs(), 120);
        assert!(s.outcome().is_none());
    }

    #[test]
    fn new_rejects_zero_duration_task() {
        let task = Task {
            title: "Nothing".into(),
            emoji: "🫥".into(),
            duration_min: 0,
        };
        let err = TimerSession::new(task, TimerMode::BeatTimer).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDuration { minutes: 0 }));
    }

    #[test]
    fn start_only_from_pending() {
        let mut s = session(TimerMode::Countdown);
        assert!(s.start().is_ok());
        let err = s.start().unwrap_err();
        assert!(err.is_benign());
        assert_eq!(s.status(), SessionStatus::Running);
    }

    #[test]
    fn tick_rejected_before_start() {
        let mut s = session(TimerMode::Countdown);
        assert!(s.tick().is_err());
        assert_eq!(s.remaining_secs(), 120);
    }

    #[test]
    fn running_out_the_clock_wins_in_countdown_mode() {
        let mut s = session(TimerMode::Countdown);
        s.start().unwrap();
        for _ in 0..119 {
            assert!(s.tick().unwrap().is_none());
        }
        let event = s.tick().unwrap().expect("final tick completes");
        assert_eq!(s.status(), SessionStatus::Completed);
        assert!(event.outcome().unwrap().succeeded);
        assert!(event.outcome().unwrap().reason.is_none());
    }

    #[test]
    fn running_out_the_clock_wins_in_beat_timer_mode() {
        let task = Catalog::find(TimerMode::BeatTimer, "Ready to Go").unwrap();
        let mut s = TimerSession::new(task, TimerMode::BeatTimer).unwrap();
        s.start().unwrap();
        for _ in 0..299 {
            assert!(s.tick().unwrap().is_none());
        }
        assert!(s.tick().unwrap().is_some());
        assert_eq!(s.status(), SessionStatus::Completed);
        assert!(s.outcome().unwrap().succeeded);
    }

    #[test]
    fn i_did_it_with_time_left_wins_beat_timer() {
        let task = Catalog::find(TimerMode::BeatTimer, "Ready to Go").unwrap();
        let mut s = TimerSession::new(task, TimerMode::BeatTimer).unwrap();
        s.start().unwrap();
        for _ in 0..60 {
            s.tick().unwrap();
        }
        assert_eq!(s.remaining_secs(), 240);
        let event = s.request_completion().unwrap();
        assert_eq!(s.status(), SessionStatus::Completed);
        assert!(event.outcome().unwrap().succeeded);
    }

    #[test]
    fn i_stopped_with_time_left_loses_countdown() {
        let mut s = session(TimerMode::Countdown);
        s.start().unwrap();
        assert_eq!(s.remaining_secs(), 120);
        let event = s.request_completion().unwrap();
        assert_eq!(s.status(), SessionStatus::StoppedEarly);
        let outcome = event.outcome().unwrap();
        assert!(!outcome.succeeded);
        assert_eq!(outcome.reason, Some(crate::outcome::StopReason::StoppedEarly));
    }

    #[test]
    fn terminal_states_reject_everything_and_keep_one_outcome() {
        let mut s = session(TimerMode::Countdown);
        s.start().unwrap();
        s.request_completion().unwrap();
        let before = s.outcome().cloned();

        assert!(s.tick().is_err());
        assert!(s.request_completion().is_err());
        assert!(s.start().is_err());

        assert_eq!(s.status(), SessionStatus::StoppedEarly);
        assert_eq!(s.outcome().cloned(), before);
    }

    #[test]
    fn progress_and_format() {
        let mut s = session(TimerMode::Countdown);
        assert_eq!(s.format_remaining(), "2:00");
        assert_eq!(s.progress(), 0.0);
        s.start().unwrap();
        for _ in 0..30 {
            s.tick().unwrap();
        }
        assert_eq!(s.format_remaining(), "1:30");
        assert!((s.progress() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn session_serde_roundtrip_preserves_state() {
        let mut s = session(TimerMode::Countdown);
        s.start().unwrap();
        s.tick().unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: TimerSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status(), SessionStatus::Running);
        assert_eq!(back.remaining_secs(), 119);
        assert_eq!(back.task().title, "Brush Teeth");
    }

    #[test]
    fn tampered_running_session_at_zero_is_rejected_not_underflowed() {
        // A session file can claim Running with an empty clock; tick and
        // the completion press must reject it instead of wrapping around.
        let json = r#"{
            "task": {"title": "Brush Teeth", "emoji": "🦷", "duration_min": 2},
            "mode": "countdown",
            "status": "running",
            "total_secs": 120,
            "remaining_secs": 0
        }"#;
        let mut s: TimerSession = serde_json::from_str(json).unwrap();
        assert!(!s.is_consistent());

        assert!(s.tick().unwrap_err().is_benign());
        assert!(s.request_completion().unwrap_err().is_benign());
        assert_eq!(s.remaining_secs(), 0);
        assert_eq!(s.status(), SessionStatus::Running);
        assert!(s.outcome().is_none());
    }

    #[test]
    fn consistency_holds_through_a_normal_run() {
        let mut s = session(TimerMode::Countdown);
        assert!(s.is_consistent());
        s.start().unwrap();
        for _ in 0..119 {
            s.tick().unwrap();
            assert!(s.is_consistent());
        }
        s.tick().unwrap();
        assert!(s.is_consistent());
        assert_eq!(s.status(), SessionStatus::Completed);
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let s = session(TimerMode::Countdown);
        match s.snapshot() {
            Event::StateSnapshot {
                status,
                remaining_secs,
                total_secs,
                ..
            } => {
                assert_eq!(status, SessionStatus::Pending);
                assert_eq!(remaining_secs, 120);
                assert_eq!(total_secs, 120);
            }
            _ => panic!("expected StateSnapshot"),
        }
    }
}
