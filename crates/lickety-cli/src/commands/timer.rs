use clap::Subcommand;
use lickety_core::{
    AudioManager, Catalog, Config, Event, ResultScreen, SessionStore, Task, Ticker, TimerMode,
    TimerSession,
};

use super::ModeArg;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Pick a task and start its session
    Start {
        /// Timer mode
        #[arg(long, value_enum, default_value = "beat-timer")]
        mode: ModeArg,
        /// Task index or title
        task: String,
    },
    /// Advance the session clock by whole seconds
    Tick {
        /// How many seconds to advance
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// The "I Did It!" / "I Stopped" press
    Done,
    /// Print current session state as JSON
    Status,
    /// Discard the session (leave the outcome screen)
    Reset,
    /// Run a session live against a real 1-second clock
    Run {
        /// Timer mode
        #[arg(long, value_enum, default_value = "countdown")]
        mode: ModeArg,
        /// Task index or title
        task: String,
    },
}

fn resolve_task(mode: TimerMode, selector: &str) -> Result<Task, Box<dyn std::error::Error>> {
    let found = if let Ok(index) = selector.parse::<usize>() {
        Catalog::get(mode, index)
    } else {
        Catalog::find(mode, selector)
    };
    found.ok_or_else(|| format!("no {mode} task matching '{selector}'").into())
}

fn print_terminal(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    if let Some(outcome) = event.outcome() {
        let screen = ResultScreen::from_outcome(outcome);
        println!("{}", serde_json::to_string_pretty(&screen)?);
    }
    Ok(())
}

fn load_session(store: &SessionStore) -> Result<TimerSession, Box<dyn std::error::Error>> {
    store.load().ok_or_else(|| "no active session".into())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;

    match action {
        TimerAction::Start { mode, task } => {
            let mode: TimerMode = mode.into();
            let task = resolve_task(mode, &task)?;
            let mut session = TimerSession::new(task, mode)?;
            let event = session.start()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            store.save(&session)?;
        }
        TimerAction::Tick { count } => {
            let mut session = load_session(&store)?;
            let mut ended = None;
            for _ in 0..count {
                match session.tick() {
                    Ok(Some(event)) => {
                        ended = Some(event);
                        break;
                    }
                    Ok(None) => {}
                    // Late ticks against a finished session are harmless.
                    Err(e) if e.is_benign() => break,
                    Err(e) => return Err(Box::new(e)),
                }
            }
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            if let Some(event) = ended {
                print_terminal(&event)?;
            }
            store.save(&session)?;
        }
        TimerAction::Done => {
            let mut session = load_session(&store)?;
            match session.request_completion() {
                Ok(event) => print_terminal(&event)?,
                // A double press; show where things stand instead.
                Err(e) if e.is_benign() => {
                    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
                }
                Err(e) => return Err(Box::new(e)),
            }
            store.save(&session)?;
        }
        TimerAction::Status => match store.load() {
            Some(session) => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            }
            None => println!("{}", serde_json::json!({ "type": "Idle" })),
        },
        TimerAction::Reset => {
            store.clear()?;
            println!("{}", serde_json::json!({ "type": "SessionDiscarded" }));
        }
        TimerAction::Run { mode, task } => {
            let mode: TimerMode = mode.into();
            let task = resolve_task(mode, &task)?;
            run_live(task, mode)?;
        }
    }

    Ok(())
}

/// Drive a session with the real clock until it completes. The ticker is
/// scoped to this call, so an early exit cannot leave it running.
fn run_live(task: Task, mode: TimerMode) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut audio = AudioManager::new();

    let mut session = TimerSession::new(task, mode)?;
    let event = session.start()?;
    println!("{}", serde_json::to_string_pretty(&event)?);

    if config.sound.enabled {
        audio.play_for(
            config.sound.music_mode,
            session.task().duration_min,
            config.sound.custom_song.as_deref(),
        );
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let completed = runtime.block_on(async {
        let mut ticker = Ticker::per_second();
        loop {
            ticker.tick().await;
            match session.tick() {
                Ok(Some(event)) => break Ok(event),
                Ok(None) => {
                    println!("{} {}", session.task().emoji, session.format_remaining());
                }
                Err(e) => break Err(e),
            }
        }
    })?;

    audio.stop();
    print_terminal(&completed)?;
    Ok(())
}
