//! # Lickety Split Core Library
//!
//! Core business logic for Lickety Split, a kids' task-timer game. All
//! behavior lives here; the CLI binary (and any GUI shell) is a thin layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **Catalog**: fixed per-mode task lists (beat-the-timer vs. countdown)
//! - **Timer**: a counter-based session state machine driven by an external
//!   once-per-second `tick()`, plus a scoped ticker that guarantees the
//!   periodic callback dies with its owner
//! - **Presentation**: pure outcome-to-display mapping for the result and
//!   guide screens
//! - **Shell**: explicit navigation state (current screen + params)
//! - **Storage**: TOML configuration and the CLI's parked session
//!
//! ## Key Components
//!
//! - [`TimerSession`]: the session state machine
//! - [`Catalog`]: task lookup per [`TimerMode`]
//! - [`ResultScreen`]: success/failure display data
//! - [`NavShell`]: screen routing state

pub mod audio;
pub mod catalog;
pub mod error;
pub mod events;
pub mod outcome;
pub mod presentation;
pub mod shell;
pub mod storage;
pub mod timer;

pub use audio::AudioManager;
pub use catalog::{Catalog, Task, TimerMode};
pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use outcome::{Outcome, StopReason};
pub use presentation::{guide_cards, GuideCard, ResultScreen};
pub use shell::{MusicMode, NavShell, ResultParams, Screen, TimerParams};
pub use storage::{Config, Language, SessionStore};
pub use timer::{SessionStatus, Ticker, TimerSession};
