//! Navigation shell: which screen is showing and with what parameters.
//!
//! An explicit state object owned by the top-level controller, not a
//! process-wide singleton. The shell treats params as opaque payloads; it
//! never interprets them beyond routing.

use serde::{Deserialize, Serialize};

use crate::catalog::{Task, TimerMode};
use crate::outcome::{Outcome, StopReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Home,
    BeatTimer,
    Countdown,
    TaskTimer,
    Success,
    Failure,
    Guide,
    Language,
}

/// Where the timer's music comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MusicMode {
    Default,
    CustomTime,
    CustomSong,
}

impl Default for MusicMode {
    fn default() -> Self {
        MusicMode::Default
    }
}

/// Payload for navigating into the task-timer screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerParams {
    pub task_title: String,
    pub task_emoji: String,
    pub duration_min: u64,
    pub mode: TimerMode,
    #[serde(default)]
    pub music_mode: MusicMode,
}

impl TimerParams {
    pub fn for_task(task: &Task, mode: TimerMode, music_mode: MusicMode) -> Self {
        Self {
            task_title: task.title.clone(),
            task_emoji: task.emoji.clone(),
            duration_min: task.duration_min,
            mode,
            music_mode,
        }
    }
}

/// Payload for navigating into the success/failure screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultParams {
    pub task_title: String,
    pub task_emoji: String,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<StopReason>,
}

impl From<&Outcome> for ResultParams {
    fn from(outcome: &Outcome) -> Self {
        Self {
            task_title: outcome.task.title.clone(),
            task_emoji: outcome.task.emoji.clone(),
            succeeded: outcome.succeeded,
            reason: outcome.reason,
        }
    }
}

/// Params attached to a navigation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavParams {
    Timer(TimerParams),
    Result(ResultParams),
}

/// Current screen plus the params each parameterized screen was entered
/// with. Single-writer, single-reader, one per app instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavShell {
    current: Screen,
    stack: Vec<Screen>,
    timer_params: Option<TimerParams>,
    result_params: Option<ResultParams>,
}

impl NavShell {
    pub fn new() -> Self {
        Self {
            current: Screen::Home,
            stack: Vec::new(),
            timer_params: None,
            result_params: None,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Params for the active task-timer screen, if any.
    pub fn timer_params(&self) -> Option<&TimerParams> {
        self.timer_params.as_ref()
    }

    /// Params for the active result screen, if any.
    pub fn result_params(&self) -> Option<&ResultParams> {
        self.result_params.as_ref()
    }

    /// Route to a screen, remembering where we came from.
    pub fn navigate(&mut self, screen: Screen, params: Option<NavParams>) {
        match (&params, screen) {
            (Some(NavParams::Timer(p)), Screen::TaskTimer) => {
                // A new selection implicitly discards any prior session.
                self.timer_params = Some(p.clone());
                self.result_params = None;
            }
            (Some(NavParams::Result(p)), Screen::Success | Screen::Failure) => {
                self.result_params = Some(p.clone());
            }
            _ => {}
        }
        self.stack.push(self.current);
        self.current = screen;
    }

    /// Pop back one screen; stays on Home at the bottom of the stack.
    pub fn back(&mut self) {
        self.current = self.stack.pop().unwrap_or(Screen::Home);
    }

    /// Jump straight home, clearing history (the result screens' Home
    /// button).
    pub fn home(&mut self) {
        self.stack.clear();
        self.current = Screen::Home;
        self.timer_params = None;
        self.result_params = None;
    }

    /// Convenience: open the timer for a catalog task.
    pub fn open_timer(&mut self, task: &Task, mode: TimerMode, music_mode: MusicMode) {
        self.navigate(
            Screen::TaskTimer,
            Some(NavParams::Timer(TimerParams::for_task(task, mode, music_mode))),
        );
    }

    /// Convenience: route an outcome to the matching result screen.
    pub fn show_outcome(&mut self, outcome: &Outcome) {
        let screen = if outcome.succeeded {
            Screen::Success
        } else {
            Screen::Failure
        };
        self.navigate(screen, Some(NavParams::Result(ResultParams::from(outcome))));
    }
}

impl Default for NavShell {
    fn default() -> Self {
        Self::new()
    }
}
