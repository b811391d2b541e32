//! Result and guide presentation data.
//!
//! Pure functions from outcome to display copy. No state, no styling -
//! the shell (or the CLI) decides how to paint it.

use serde::{Deserialize, Serialize};

use crate::outcome::{Outcome, StopReason};

/// Display data for the success/failure screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultScreen {
    /// Big headline ("Amazing Work!" / "Not quite there!").
    pub heading: String,
    pub task_title: String,
    pub task_emoji: String,
    /// The star for a win, the duck for a miss.
    pub mascot: String,
    pub message: String,
    pub encouragement: String,
    pub celebration: bool,
}

impl ResultScreen {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        if outcome.succeeded {
            Self {
                heading: "Amazing Work!".into(),
                task_title: outcome.task.title.clone(),
                task_emoji: outcome.task.emoji.clone(),
                mascot: "⭐".into(),
                message: format!("You completed: {}", outcome.task.title),
                encouragement: "You're absolutely fantastic! 🌈".into(),
                celebration: true,
            }
        } else {
            Self {
                heading: "Not quite there!".into(),
                task_title: outcome.task.title.clone(),
                task_emoji: outcome.task.emoji.clone(),
                mascot: "🦆".into(),
                message: failure_message(outcome.reason),
                encouragement: "Keep practicing - you've got this! 💪".into(),
                celebration: false,
            }
        }
    }
}

fn failure_message(reason: Option<StopReason>) -> String {
    match reason {
        Some(StopReason::StoppedEarly) => {
            "Oops! You stopped too early. Try to keep going next time!".into()
        }
        None => "Time's up! Don't worry, you'll get it next time!".into(),
    }
}

/// One card on the how-to-play screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// The four guide cards, in screen order.
pub fn guide_cards() -> Vec<GuideCard> {
    let card = |icon: &str, title: &str, description: &str| GuideCard {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    };
    vec![
        card(
            "⚡",
            "Beat the Timer",
            "Choose a task and try to finish it before the music ends! \
             Tap \"I Did It!\" when you complete your task.",
        ),
        card(
            "⏳",
            "Countdown Mode",
            "Keep doing your task for the entire duration! \
             Don't stop until the timer reaches zero.",
        ),
        card(
            "🎵",
            "Custom Songs",
            "You can choose your own favorite songs from your music library \
             to make tasks even more fun!",
        ),
        card(
            "⭐",
            "Rewards",
            "Complete tasks successfully to see amazing celebration \
             animations and earn stars!",
        ),
    ]
}
