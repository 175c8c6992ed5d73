//! Portfolio data model and loading.
//!
//! The shell only ever reads this data. It is either the built-in portfolio or
//! a TOML file with the same shape:
//!
//! ```toml
//! certifications = ["AWS Certified Cloud Practitioner"]
//!
//! [profile]
//! name = "Ada Lovelace"
//! career_start = "2020-01-15"
//! # role, company, location, email, linkedin, github ...
//! bio = { en = "...", es = "..." }
//!
//! [[experience]]
//! status = "ACTIVE"
//! company = "Acme"
//! namespace = "banking"
//! period = "Oct 2025 - Present"
//!
//! [[skills]]
//! key = "cloud"
//! title = { en = "Cloud", es = "Cloud" }
//! skills = [{ name = "AWS", level = 90 }]
//! ```

mod builtin;
mod model;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

pub use model::{
    ExperienceEntry, ExperienceStatus, LocalizedText, Profile, Project, Skill, SkillGroup,
};

/// Everything the commands render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub profile: Profile,
    /// Most recent first.
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl ProfileData {
    /// The portfolio shipped with the binary.
    pub fn builtin() -> Self {
        builtin::data()
    }

    /// Parses and validates profile data from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let data: Self = toml::from_str(text)?;
        data.validate()?;
        Ok(data)
    }

    /// Reads and validates a TOML profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading profile data");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "rejected profile data");
        })
    }

    /// Checks the invariants the renderers rely on.
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(CoreError::InvalidProfile("profile name is empty".to_string()));
        }

        for entry in &self.experience {
            if entry.company.trim().is_empty() {
                return Err(CoreError::InvalidProfile(
                    "experience entry with empty company".to_string(),
                ));
            }
        }

        for group in &self.skills {
            if group.key.trim().is_empty() {
                return Err(CoreError::InvalidProfile("skill group with empty key".to_string()));
            }
            for skill in &group.skills {
                if skill.name.trim().is_empty() {
                    return Err(CoreError::InvalidProfile(format!(
                        "skill with empty name in group '{}'",
                        group.key
                    )));
                }
                if skill.level > 100 {
                    return Err(CoreError::InvalidProfile(format!(
                        "skill '{}' has level {} (must be 0-100)",
                        skill.name, skill.level
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn skill_group(&self, key: &str) -> Option<&SkillGroup> {
        self.skills.iter().find(|group| group.key == key)
    }

    /// Finds an experience entry by its pod name.
    pub fn experience_by_pod(&self, pod: &str) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.pod_name() == pod.to_lowercase())
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whole days from the start of `start` (UTC midnight) to `now`, floored and
/// never negative.
pub fn career_days(start: chrono::NaiveDate, now: DateTime<Utc>) -> i64 {
    let start = start.and_time(chrono::NaiveTime::MIN).and_utc();
    (now - start).num_days().max(0)
}
