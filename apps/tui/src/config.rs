//! TUI configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use termfolio_core::{ProfileData, ShellConfig};

/// TUI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Prompt, history and language
    #[serde(default)]
    pub shell: ShellConfig,
    /// Incident simulation
    #[serde(default)]
    pub incident: IncidentConfig,
    /// Where the portfolio data comes from
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Rendering
    #[serde(default)]
    pub ui: UiConfig,
}

/// Incident simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentConfig {
    /// Seconds a resolved incident stays on screen (default: 5)
    #[serde(default = "default_acknowledge_after_secs")]
    pub acknowledge_after_secs: u64,
}

fn default_acknowledge_after_secs() -> u64 {
    5
}

impl Default for IncidentConfig {
    fn default() -> Self {
        Self { acknowledge_after_secs: default_acknowledge_after_secs() }
    }
}

/// Profile data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// TOML profile file; the built-in portfolio when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250)
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Scrollback kept on screen (default: 1000)
    #[serde(default = "default_scrollback_lines")]
    pub scrollback_lines: usize,
    /// Palette overrides
    #[serde(default)]
    pub colors: Option<CustomColors>,
}

fn default_tick_millis() -> u64 {
    250
}

fn default_scrollback_lines() -> usize {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            scrollback_lines: default_scrollback_lines(),
            colors: None,
        }
    }
}

/// Custom color configuration, `"#RRGGBB"` strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomColors {
    pub red: Option<String>,
    pub green: Option<String>,
    pub yellow: Option<String>,
    pub blue: Option<String>,
    pub magenta: Option<String>,
    pub cyan: Option<String>,
    pub white: Option<String>,
    pub gray: Option<String>,
    pub background: Option<String>,
}

impl CustomColors {
    /// Overrides that are set, by palette name.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("red", &self.red),
            ("green", &self.green),
            ("yellow", &self.yellow),
            ("blue", &self.blue),
            ("magenta", &self.magenta),
            ("cyan", &self.cyan),
            ("white", &self.white),
            ("gray", &self.gray),
            ("background", &self.background),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
        .collect()
    }
}

/// A TOML basic string with quotes and backslashes escaped.
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl TuiConfig {
    /// The config directory, `~/.termfolio`.
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".termfolio"))
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, generating a commented
    /// default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`. A missing file means defaults; nothing
    /// is written.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: TuiConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.shell.validate().context("Invalid [shell] section")?;
        if self.ui.tick_millis == 0 {
            anyhow::bail!("Invalid [ui] section: tick_millis must be at least 1");
        }
        Ok(())
    }

    /// The configured profile file, or the built-in portfolio.
    pub fn load_profile(&self) -> Result<ProfileData> {
        match &self.profile.path {
            Some(path) => ProfileData::load(path)
                .with_context(|| format!("Failed to load profile: {}", path.display())),
            None => Ok(ProfileData::builtin()),
        }
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        fs::write(path, self.to_toml_string())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Configuration as TOML with comments.
    pub fn to_toml_string(&self) -> String {
        let mut toml = String::new();
        toml.push_str("# Termfolio Configuration\n\n");

        toml.push_str("[shell]\n");
        toml.push_str("# User and host shown in the prompt (default: guest@sre)\n");
        toml.push_str(&format!("prompt_user = {}\n", quoted(&self.shell.prompt_user)));
        toml.push_str(&format!("prompt_host = {}\n", quoted(&self.shell.prompt_host)));
        toml.push_str("# Commands kept for up/down recall (default: 50)\n");
        toml.push_str(&format!("history_capacity = {}\n", self.shell.history_capacity));
        toml.push_str("# Language: \"auto\" (default, from LANG), \"en\" or \"es\"\n");
        toml.push_str(&format!("locale = \"{}\"\n\n", self.shell.locale));

        toml.push_str("[incident]\n");
        toml.push_str("# Seconds a resolved incident stays on screen (default: 5)\n");
        toml.push_str(&format!(
            "acknowledge_after_secs = {}\n\n",
            self.incident.acknowledge_after_secs
        ));

        toml.push_str("[profile]\n");
        toml.push_str("# Optional: TOML file with your own portfolio data\n");
        if let Some(ref path) = self.profile.path {
            toml.push_str(&format!("path = {}\n\n", quoted(&path.display().to_string())));
        } else {
            toml.push_str("# path = \"/path/to/profile.toml\"\n\n");
        }

        toml.push_str("[ui]\n");
        toml.push_str("# Redraw interval in milliseconds (default: 250)\n");
        toml.push_str(&format!("tick_millis = {}\n", self.ui.tick_millis));
        toml.push_str("# Lines of scrollback kept on screen (default: 1000)\n");
        toml.push_str(&format!("scrollback_lines = {}\n", self.ui.scrollback_lines));

        if let Some(ref colors) = self.ui.colors {
            toml.push_str("\n# Colors should be in hex format: \"#RRGGBB\"\n");
            toml.push_str("[ui.colors]\n");
            for (name, value) in colors.entries() {
                toml.push_str(&format!("{} = {}\n", name, quoted(value)));
            }
        }

        toml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use termfolio_core::{Locale, LocaleSetting};

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.shell.prompt_user, "guest");
        assert_eq!(config.incident.acknowledge_after_secs, 5);
        assert_eq!(config.ui.tick_millis, 250);
        assert!(config.profile.path.is_none());
    }

    #[test]
    fn test_generated_file_parses_back() {
        let mut config = TuiConfig::default();
        config.shell.locale = LocaleSetting::Fixed(Locale::Es);
        config.profile.path = Some(PathBuf::from("/tmp/profile.toml"));
        config.ui.colors =
            Some(CustomColors { green: Some("#00ff00".to_string()), ..CustomColors::default() });

        let parsed: TuiConfig = toml::from_str(&config.to_toml_string()).unwrap();
        assert_eq!(parsed.shell, config.shell);
        assert_eq!(parsed.profile.path, config.profile.path);
        assert_eq!(parsed.ui.colors.unwrap().green.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_save_escapes_strings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = TuiConfig::default();
        config.shell.prompt_user = "o\"brien\\".to_string();
        config.ui.colors =
            Some(CustomColors { red: Some("#ff\"00".to_string()), ..CustomColors::default() });
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.shell.prompt_user, "o\"brien\\");
        assert_eq!(loaded.ui.colors.unwrap().red.as_deref(), Some("#ff\"00"));
    }

    #[test]
    fn test_load_from_missing_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.shell.history_capacity, 50);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = TuiConfig::default();
        config.incident.acknowledge_after_secs = 9;
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.incident.acknowledge_after_secs, 9);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[shell]\nprompt_user = \"fabian\"\n").unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.shell.prompt_user, "fabian");
        assert_eq!(config.shell.prompt_host, "sre");
        assert_eq!(config.ui.scrollback_lines, 1000);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[shell\n").unwrap();
        let err = TuiConfig::load_from(&path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate() {
        let mut config = TuiConfig::default();
        assert!(config.validate().is_ok());
        config.ui.tick_millis = 0;
        assert!(config.validate().is_err());
        config.ui.tick_millis = 100;
        config.shell.history_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_profile_builtin() {
        let data = TuiConfig::default().load_profile().unwrap();
        assert_eq!(data.experience.len(), 3);
    }
}
