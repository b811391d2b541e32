//! The task catalog: the fixed set of kid-sized chores per timer mode.
//!
//! Pure lookup data. Each mode has its own ordered list, defined at build
//! time and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Which game the timer is playing.
///
/// `BeatTimer` rewards finishing before the clock runs out; `Countdown`
/// rewards keeping at it until the clock runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    BeatTimer,
    Countdown,
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerMode::BeatTimer => write!(f, "beat-timer"),
            TimerMode::Countdown => write!(f, "countdown"),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub emoji: String,
    /// Duration in minutes. Always positive for catalog entries.
    pub duration_min: u64,
}

impl Task {
    /// Build a task, rejecting a zero duration.
    pub fn new(title: impl Into<String>, emoji: impl Into<String>, duration_min: u64) -> Result<Self> {
        if duration_min == 0 {
            return Err(CoreError::InvalidDuration {
                minutes: duration_min,
            });
        }
        Ok(Self {
            title: title.into(),
            emoji: emoji.into(),
            duration_min,
        })
    }

    /// Task duration in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self) -> u64 {
        self.duration_min.saturating_mul(60)
    }
}

/// Static per-mode task lookup.
pub struct Catalog;

impl Catalog {
    /// Ordered task list for a mode.
    pub fn tasks(mode: TimerMode) -> Vec<Task> {
        match mode {
            TimerMode::BeatTimer => vec![
                task("Ready to Go", "🚀", 5),
                task("Make Bed", "🛏️", 3),
                task("Mealtime", "🍽️", 15),
                task("Put on PJs", "👘", 3),
                task("Brush Teeth", "🦷", 2),
                task("Get Dressed", "👕", 4),
            ],
            TimerMode::Countdown => vec![
                task("Take Turns", "🤝", 5),
                task("Take Turns", "🤝", 5),
                task("Brush Teeth", "🦷", 2),
                task("Practice Piano", "🎹", 15),
                task("Read Book", "📚", 10),
                task("Meditation", "🧘‍♀️", 5),
                task("Exercise", "🏃‍♂️", 20),
                task("Homework", "📝", 30),
            ],
        }
    }

    /// Task at `index` within a mode's list.
    pub fn get(mode: TimerMode, index: usize) -> Option<Task> {
        Self::tasks(mode).into_iter().nth(index)
    }

    /// First task whose title matches (case-insensitive).
    pub fn find(mode: TimerMode, title: &str) -> Option<Task> {
        Self::tasks(mode)
            .into_iter()
            .find(|t| t.title.eq_ignore_ascii_case(title))
    }
}

// Catalog data is fixed and validated by test; literals keep the table flat.
fn task(title: &str, emoji: &str, duration_min: u64) -> Task {
    Task {
        title: title.into(),
        emoji: emoji.into(),
        duration_min,
    }
}
