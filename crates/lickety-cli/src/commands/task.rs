use clap::Subcommand;
use lickety_core::Catalog;

use super::ModeArg;

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks for a mode
    List {
        /// Timer mode
        #[arg(long, value_enum, default_value = "beat-timer")]
        mode: ModeArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one task by its position in the list
    Show {
        /// Timer mode
        #[arg(long, value_enum, default_value = "beat-timer")]
        mode: ModeArg,
        /// Zero-based index
        index: usize,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::List { mode, json } => {
            let tasks = Catalog::tasks(mode.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for (i, task) in tasks.iter().enumerate() {
                    println!("{:>2}. {} {} ({}min)", i, task.emoji, task.title, task.duration_min);
                }
            }
        }
        TaskAction::Show { mode, index } => {
            match Catalog::get(mode.into(), index) {
                Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
                None => {
                    eprintln!("no task at index {index}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
