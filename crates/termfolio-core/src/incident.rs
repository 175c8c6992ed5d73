//! Incident simulation: a toy alert lifecycle.
//!
//! ```text
//! Idle --trigger--> Active --investigate--> Investigating
//!                     |                          |
//!                     +---------resolve----------+--> Resolved --acknowledge--> Idle
//! ```
//!
//! `Resolved` is a rest state. The display layer shows the resolution and then
//! calls [`IncidentTracker::acknowledge`]; a new incident can only start from
//! `Idle`.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::info;

/// Lifecycle position of the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IncidentState {
    /// No incident (`none`).
    #[default]
    Idle,
    Active,
    Investigating,
    Resolved,
}

impl IncidentState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "none",
            Self::Active => "active",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
        }
    }

    /// Whether an incident is open (active or under investigation).
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Active | Self::Investigating)
    }
}

impl fmt::Display for IncidentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentKind {
    Latency,
    Pods,
    Db,
    Memory,
}

impl IncidentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latency => "latency",
            Self::Pods => "pods",
            Self::Db => "db",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    /// Upper-case badge text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

/// A catalog entry incidents are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncidentTemplate {
    pub kind: IncidentKind,
    pub severity: Severity,
    pub message: &'static str,
}

/// Every incident the simulation can raise.
pub const INCIDENT_CATALOG: [IncidentTemplate; 4] = [
    IncidentTemplate {
        kind: IncidentKind::Latency,
        severity: Severity::Critical,
        message: "API latency spike detected (p99 > 500ms)",
    },
    IncidentTemplate {
        kind: IncidentKind::Pods,
        severity: Severity::Critical,
        message: "Pod portfolio-main-x7a2k CrashLoopBackOff",
    },
    IncidentTemplate {
        kind: IncidentKind::Db,
        severity: Severity::Warning,
        message: "PostgreSQL connection pool exhausted",
    },
    IncidentTemplate {
        kind: IncidentKind::Memory,
        severity: Severity::Warning,
        message: "Memory usage exceeding 85% threshold",
    },
];

/// The incident currently tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRecord {
    pub kind: IncidentKind,
    pub severity: Severity,
    pub message: String,
    pub started_at: DateTime<Utc>,
}

impl IncidentRecord {
    fn from_template(template: &IncidentTemplate, started_at: DateTime<Utc>) -> Self {
        Self {
            kind: template.kind,
            severity: template.severity,
            message: template.message.to_string(),
            started_at,
        }
    }
}

/// Outcome of a successful `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: IncidentRecord,
    /// Time from trigger to resolution.
    pub mttr: TimeDelta,
    /// Resolved count including this one.
    pub total_resolved: u32,
}

/// Rejected transitions. These are expected user navigation, not bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncidentError {
    #[error("incident already active")]
    AlreadyActive,

    #[error("previous incident awaiting acknowledgement")]
    AwaitingAcknowledgement,

    #[error("nothing to investigate")]
    NothingToInvestigate,

    #[error("nothing to resolve")]
    NothingToResolve,
}

/// State machine plus the running resolved counter.
#[derive(Debug, Clone, Default)]
pub struct IncidentTracker {
    state: IncidentState,
    current: Option<IncidentRecord>,
    resolved_at: Option<DateTime<Utc>>,
    resolved_total: u32,
}

impl IncidentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> IncidentState {
        self.state
    }

    /// The open or just-resolved incident.
    pub fn current(&self) -> Option<&IncidentRecord> {
        self.current.as_ref()
    }

    pub fn resolved_total(&self) -> u32 {
        self.resolved_total
    }

    /// `Idle -> Active`, picking a template uniformly at random.
    pub fn trigger<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<&IncidentRecord, IncidentError> {
        match self.state {
            IncidentState::Idle => {}
            IncidentState::Resolved => return Err(IncidentError::AwaitingAcknowledgement),
            IncidentState::Active | IncidentState::Investigating => {
                return Err(IncidentError::AlreadyActive);
            }
        }

        let template = &INCIDENT_CATALOG[rng.gen_range(0..INCIDENT_CATALOG.len())];
        info!(kind = template.kind.as_str(), severity = template.severity.label(), "incident triggered");

        self.state = IncidentState::Active;
        self.resolved_at = None;
        Ok(self.current.insert(IncidentRecord::from_template(template, now)))
    }

    /// `Active -> Investigating`.
    pub fn investigate(&mut self) -> Result<&IncidentRecord, IncidentError> {
        if self.state != IncidentState::Active {
            return Err(IncidentError::NothingToInvestigate);
        }
        let record = self.current.as_ref().ok_or(IncidentError::NothingToInvestigate)?;
        info!(kind = record.kind.as_str(), "incident under investigation");
        self.state = IncidentState::Investigating;
        Ok(record)
    }

    /// `Active | Investigating -> Resolved`, bumping the counter once.
    pub fn resolve(&mut self, now: DateTime<Utc>) -> Result<Resolution, IncidentError> {
        if !self.state.is_open() {
            return Err(IncidentError::NothingToResolve);
        }
        let record = self.current.clone().ok_or(IncidentError::NothingToResolve)?;

        let mttr = (now - record.started_at).max(TimeDelta::zero());
        self.state = IncidentState::Resolved;
        self.resolved_at = Some(now);
        self.resolved_total += 1;
        info!(
            kind = record.kind.as_str(),
            mttr_secs = mttr.num_seconds(),
            total = self.resolved_total,
            "incident resolved"
        );

        Ok(Resolution { record, mttr, total_resolved: self.resolved_total })
    }

    /// `Resolved -> Idle`, dropping the record. Returns whether anything changed.
    pub fn acknowledge(&mut self) -> bool {
        if self.state != IncidentState::Resolved {
            return false;
        }
        self.state = IncidentState::Idle;
        self.current = None;
        self.resolved_at = None;
        true
    }

    /// Forces `Idle` from any state. The resolved counter survives.
    pub fn reset(&mut self) {
        self.state = IncidentState::Idle;
        self.current = None;
        self.resolved_at = None;
    }

    /// Time on the incident clock: running while open, frozen once resolved.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        let record = self.current.as_ref()?;
        let end = self.resolved_at.unwrap_or(now);
        Some((end - record.started_at).max(TimeDelta::zero()))
    }
}

/// Formats a duration as `mm:ss`. Minutes keep growing past 99.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
