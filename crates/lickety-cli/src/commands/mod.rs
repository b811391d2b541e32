pub mod config;
pub mod guide;
pub mod language;
pub mod task;
pub mod timer;

use clap::ValueEnum;
use lickety_core::TimerMode;

/// CLI-facing mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    BeatTimer,
    Countdown,
}

impl From<ModeArg> for TimerMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::BeatTimer => TimerMode::BeatTimer,
            ModeArg::Countdown => TimerMode::Countdown,
        }
    }
}
