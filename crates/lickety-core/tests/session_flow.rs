//! End-to-end flows through catalog, session, outcome and presentation,
//! plus property tests over the session state machine.

use lickety_core::{
    Catalog, CoreError, NavShell, Outcome, ResultScreen, Screen, SessionStatus, StopReason, Task,
    TimerMode, TimerSession,
};

fn run_ticks(session: &mut TimerSession, n: u64) {
    for _ in 0..n {
        session.tick().unwrap();
    }
}

#[test]
fn brush_teeth_countdown_runs_to_success() {
    // Task{"Brush Teeth","🦷",2min}, countdown, 120 uninterrupted ticks.
    let task = Catalog::find(TimerMode::Countdown, "Brush Teeth").unwrap();
    let mut session = TimerSession::new(task, TimerMode::Countdown).unwrap();
    session.start().unwrap();
    run_ticks(&mut session, 119);
    let event = session.tick().unwrap().expect("120th tick completes");

    assert_eq!(session.status(), SessionStatus::Completed);
    let outcome = event.outcome().unwrap();
    assert!(outcome.succeeded);
    assert!(outcome.reason.is_none());
}

#[test]
fn brush_teeth_countdown_immediate_stop_fails() {
    let task = Catalog::find(TimerMode::Countdown, "Brush Teeth").unwrap();
    let mut session = TimerSession::new(task, TimerMode::Countdown).unwrap();
    session.start().unwrap();
    assert_eq!(session.remaining_secs(), 120);

    let event = session.request_completion().unwrap();
    assert_eq!(session.status(), SessionStatus::StoppedEarly);
    let outcome = event.outcome().unwrap();
    assert!(!outcome.succeeded);
    assert_eq!(outcome.reason, Some(StopReason::StoppedEarly));
}

#[test]
fn ready_to_go_beat_timer_early_finish_wins() {
    // Task{"Ready to Go","🚀",5min}, beat-timer; 60 ticks then "I Did It!".
    let task = Catalog::find(TimerMode::BeatTimer, "Ready to Go").unwrap();
    let mut session = TimerSession::new(task, TimerMode::BeatTimer).unwrap();
    session.start().unwrap();
    run_ticks(&mut session, 60);
    assert_eq!(session.remaining_secs(), 240);

    let event = session.request_completion().unwrap();
    assert_eq!(session.status(), SessionStatus::Completed);
    assert!(event.outcome().unwrap().succeeded);
}

#[test]
fn outcome_drives_shell_and_result_screen() {
    let task = Catalog::find(TimerMode::Countdown, "Practice Piano").unwrap();
    let mut session = TimerSession::new(task.clone(), TimerMode::Countdown).unwrap();
    let mut shell = NavShell::new();

    shell.navigate(Screen::Countdown, None);
    shell.open_timer(&task, TimerMode::Countdown, Default::default());
    session.start().unwrap();

    let event = session.request_completion().unwrap();
    let outcome = event.outcome().unwrap();
    shell.show_outcome(outcome);
    assert_eq!(shell.current(), Screen::Failure);

    let screen = ResultScreen::from_outcome(outcome);
    assert_eq!(screen.task_title, "Practice Piano");
    assert_eq!(screen.mascot, "🦆");
    assert!(screen.message.contains("stopped too early"));
}

#[test]
fn every_catalog_task_creates_a_valid_session() {
    for mode in [TimerMode::BeatTimer, TimerMode::Countdown] {
        for task in Catalog::tasks(mode) {
            let expected = task.duration_min * 60;
            let session = TimerSession::new(task, mode).unwrap();
            assert_eq!(session.status(), SessionStatus::Pending);
            assert_eq!(session.total_secs(), expected);
            assert_eq!(session.remaining_secs(), expected);
        }
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    fn task(duration_min: u64) -> Task {
        Task {
            title: "Any Task".into(),
            emoji: "⏱️".into(),
            duration_min,
        }
    }

    proptest! {
        /// Ticking the full duration with no interruption always completes
        /// with success, in either mode.
        #[test]
        fn full_run_always_succeeds(
            duration_min in 1u64..=30,
            beat_timer in any::<bool>(),
        ) {
            let mode = if beat_timer { TimerMode::BeatTimer } else { TimerMode::Countdown };
            let mut session = TimerSession::new(task(duration_min), mode).unwrap();
            session.start().unwrap();

            let total = duration_min * 60;
            for i in 1..=total {
                let event = session.tick().unwrap();
                prop_assert_eq!(event.is_some(), i == total);
            }
            prop_assert_eq!(session.status(), SessionStatus::Completed);
            prop_assert!(session.outcome().unwrap().succeeded);
        }

        /// No matter where the button press lands, exactly one outcome is
        /// produced and later operations cannot change or duplicate it.
        #[test]
        fn at_most_one_outcome(
            duration_min in 1u64..=10,
            press_at in proptest::option::of(0u64..600),
            beat_timer in any::<bool>(),
        ) {
            let mode = if beat_timer { TimerMode::BeatTimer } else { TimerMode::Countdown };
            let mut session = TimerSession::new(task(duration_min), mode).unwrap();
            session.start().unwrap();

            let total = duration_min * 60;
            let mut outcomes = 0u32;
            for i in 0..total {
                if press_at == Some(i) && !session.status().is_terminal() {
                    if session.request_completion().is_ok() {
                        outcomes += 1;
                    }
                }
                match session.tick() {
                    Ok(Some(_)) => outcomes += 1,
                    Ok(None) => {}
                    Err(CoreError::InvalidTransition { .. }) => {}
                    Err(e) => return Err(TestCaseError::fail(e.to_string())),
                }
            }
            // Late duplicate presses are rejected without a second outcome.
            prop_assert!(session.request_completion().is_err());
            prop_assert_eq!(outcomes, 1);
            prop_assert!(session.status().is_terminal());
            prop_assert!(session.outcome().is_some());
        }

        /// remaining_secs decreases by exactly one per tick while running.
        #[test]
        fn tick_decrements_exactly_one(duration_min in 1u64..=10, ticks in 0u64..=120) {
            let mut session = TimerSession::new(task(duration_min), TimerMode::Countdown).unwrap();
            session.start().unwrap();
            let total = duration_min * 60;
            let ticks = ticks.min(total - 1);
            for _ in 0..ticks {
                session.tick().unwrap();
            }
            prop_assert_eq!(session.remaining_secs(), total - ticks);
        }
    }
}
