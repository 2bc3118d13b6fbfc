//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::state::Screen;

/// Command-line options for the TUI.
#[derive(Debug, Parser)]
#[command(name = "banchan", version, about)]
pub struct Args {
    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
    /// Screen shown at startup.
    #[arg(long, value_enum, default_value_t = StartScreen::Home)]
    pub screen: StartScreen,
}

/// Startup screen choices on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    /// Featured feeds.
    #[default]
    Home,
    /// Recipe search.
    Recipes,
    /// Shopping search.
    Shopping,
    /// Category browser.
    Categories,
}

impl From<StartScreen> for Screen {
    fn from(value: StartScreen) -> Self {
        match value {
            StartScreen::Home => Self::Home,
            StartScreen::Recipes => Self::Recipes,
            StartScreen::Shopping => Self::Shopping,
            StartScreen::Categories => Self::Categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults and explicit flags parse as expected
    ///
    /// - Input: No flags, then `--screen categories --settings x.toml`
    /// - Output: Home default; explicit values honored
    fn args_parse_defaults_and_flags() {
        let args = Args::try_parse_from(["banchan"]).expect("parse");
        assert_eq!(args.screen, StartScreen::Home);
        assert!(args.settings.is_none());

        let args =
            Args::try_parse_from(["banchan", "--screen", "categories", "--settings", "x.toml"])
                .expect("parse");
        assert_eq!(args.screen, StartScreen::Categories);
        assert_eq!(args.settings.as_deref(), Some(std::path::Path::new("x.toml")));
        assert_eq!(Screen::from(args.screen), Screen::Categories);
    }
}
