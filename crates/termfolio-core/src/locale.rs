//! Display language selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// The code typed after `lang`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parses a locale code, case-insensitively.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Picks the locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order; the first one
    /// set decides. Anything starting with `es` is Spanish, the rest English.
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map_or(Self::En, |tag| Self::from_tag(&tag))
    }

    /// Maps a POSIX/BCP-47 style tag such as `es_CL.UTF-8` to a locale.
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("es") {
            Self::Es
        } else {
            Self::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A static string in both languages.
///
/// Both fields are required, so a catalog entry cannot miss a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub es: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es }
    }

    pub const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Es => self.es,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Locale::parse("es"), Some(Locale::Es));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse(" es "), Some(Locale::Es));
        assert_eq!(Locale::parse("xx"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("es_CL.UTF-8"), Locale::Es);
        assert_eq!(Locale::from_tag("ES"), Locale::Es);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("C"), Locale::En);
    }

    #[test]
    fn test_localized_get() {
        let text = Localized::new("Hello", "Hola");
        assert_eq!(text.get(Locale::En), "Hello");
        assert_eq!(text.get(Locale::Es), "Hola");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Locale::Es.to_string(), "es");
        assert_eq!(Locale::default(), Locale::En);
    }
}
