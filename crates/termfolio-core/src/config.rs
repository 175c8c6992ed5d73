//! Shell configuration.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, Result};
use crate::history::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
use crate::locale::Locale;

/// Language preference: a fixed locale or environment detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocaleSetting {
    #[default]
    Auto,
    Fixed(Locale),
}

impl LocaleSetting {
    /// Resolves `Auto` through [`Locale::detect`].
    pub fn resolve(self) -> Locale {
        match self {
            Self::Auto => Locale::detect(),
            Self::Fixed(locale) => locale,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("auto") {
            return Some(Self::Auto);
        }
        Locale::parse(value).map(Self::Fixed)
    }
}

impl fmt::Display for LocaleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(locale) => write!(f, "{}", locale),
        }
    }
}

impl Serialize for LocaleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocaleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown locale '{}', expected auto, en or es", value))
        })
    }
}

/// Settings for the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// User shown in the prompt and as file owner in `ls`.
    #[serde(default = "default_prompt_user")]
    pub prompt_user: String,
    /// Host shown in the prompt.
    #[serde(default = "default_prompt_host")]
    pub prompt_host: String,
    /// Submitted lines kept for recall.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Starting language.
    #[serde(default)]
    pub locale: LocaleSetting,
}

fn default_prompt_user() -> String {
    "guest".to_string()
}

fn default_prompt_host() -> String {
    "sre".to_string()
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_user: default_prompt_user(),
            prompt_host: default_prompt_host(),
            history_capacity: default_history_capacity(),
            locale: LocaleSetting::Auto,
        }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(CoreError::Config("history_capacity must be at least 1".to_string()));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(CoreError::Config(format!(
                "history_capacity {} exceeds the limit of {}",
                self.history_capacity, MAX_HISTORY_CAPACITY
            )));
        }
        if self.prompt_user.trim().is_empty() || self.prompt_user.contains(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "prompt_user '{}' must be a single non-empty word",
                self.prompt_user
            )));
        }
        if self.prompt_host.trim().is_empty() || self.prompt_host.contains(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "prompt_host '{}' must be a single non-empty word",
                self.prompt_host
            )));
        }
        Ok(())
    }

    pub fn resolved_locale(&self) -> Locale {
        self.locale.resolve()
    }
}
