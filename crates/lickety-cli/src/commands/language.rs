use clap::Subcommand;
use lickety_core::{Config, Language};

#[derive(Subcommand)]
pub enum LanguageAction {
    /// List available languages, marking the current one
    List,
    /// Select the display language
    Set {
        /// Language name (e.g. "English", "Español")
        name: String,
    },
    /// Show the current language
    Show,
}

pub fn run(action: LanguageAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LanguageAction::List => {
            let config = Config::load_or_default();
            for lang in Language::ALL {
                let marker = if lang == config.language { "*" } else { " " };
                println!("{marker} {} {}", lang.flag(), lang.label());
            }
        }
        LanguageAction::Set { name } => {
            let mut config = Config::load_or_default();
            match Language::parse(&name) {
                Some(lang) => {
                    config.language = lang;
                    config.save()?;
                    println!("{} {}", lang.flag(), lang.label());
                }
                None => {
                    eprintln!("unknown language: {name}");
                    std::process::exit(1);
                }
            }
        }
        LanguageAction::Show => {
            let config = Config::load_or_default();
            println!("{} {}", config.language.flag(), config.language.label());
        }
    }
    Ok(())
}
