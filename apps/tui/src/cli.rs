//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use termfolio_core::{Locale, LocaleSetting};

use crate::config::TuiConfig;

/// A terminal-style SRE portfolio.
#[derive(Parser, Debug, Default)]
#[command(name = "termfolio", version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.termfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML profile to present instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Interface language
    #[arg(long, value_name = "en|es", value_parser = parse_locale)]
    pub lang: Option<Locale>,

    /// Run a command line and print its output instead of opening the window
    #[arg(short = 'e', long = "exec", value_name = "LINE")]
    pub exec: Vec<String>,

    /// No ANSI styling in --exec output
    #[arg(long)]
    pub plain: bool,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::parse(value).ok_or_else(|| format!("unsupported language '{}' (expected en or es)", value))
}

impl Args {
    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut TuiConfig) {
        if let Some(ref path) = self.profile {
            config.profile.path = Some(path.clone());
        }
        if let Some(locale) = self.lang {
            config.shell.locale = LocaleSetting::Fixed(locale);
        }
    }
}
