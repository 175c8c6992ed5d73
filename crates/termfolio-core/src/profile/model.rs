//! Read-only portfolio data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Owned text in both display languages, as loaded from a profile file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub es: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self { en: en.into(), es: es.into() }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub bio: LocalizedText,
    /// Day the career started, used for uptime.
    pub career_start: NaiveDate,
}

impl Profile {
    /// First word of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Lifecycle tag of an experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperienceStatus {
    Active,
    Stable,
    Legacy,
}

impl ExperienceStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Stable => "STABLE",
            Self::Legacy => "LEGACY",
        }
    }
}

/// One job, rendered as a pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub version: String,
    pub status: ExperienceStatus,
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub period: String,
    pub namespace: String,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ExperienceEntry {
    /// Company name lower-cased with whitespace runs turned into `-`.
    pub fn pod_name(&self) -> String {
        self.company.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
    }

    /// The part of `period` before ` - `, e.g. `Oct 2025`.
    pub fn started(&self) -> &str {
        self.period.split(" - ").next().unwrap_or(&self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, `0..=100`.
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self { name: name.into(), level }
    }
}

/// A named category of skills, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Short identifier such as `observability`.
    pub key: String,
    /// Heading shown above the group.
    pub title: LocalizedText,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub url: String,
    pub tech: String,
    pub description: String,
}
