//! Per-session mutable state handed to every command.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::incident::{IncidentError, IncidentRecord, IncidentTracker, Resolution};
use crate::locale::Locale;

/// Locale, incident simulation, and the injected clock and randomness.
pub struct Session {
    locale: Locale,
    incidents: IncidentTracker,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl Session {
    /// A session on the system clock with OS-seeded randomness.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            incidents: IncidentTracker::new(),
            clock: Arc::new(SystemClock),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Makes incident selection reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            info!(from = %self.locale, to = %locale, "locale changed");
        }
        self.locale = locale;
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn incidents(&self) -> &IncidentTracker {
        &self.incidents
    }

    pub fn trigger_incident(&mut self) -> Result<&IncidentRecord, IncidentError> {
        let now = self.clock.now();
        self.incidents.trigger(&mut self.rng, now)
    }

    pub fn investigate_incident(&mut self) -> Result<&IncidentRecord, IncidentError> {
        self.incidents.investigate()
    }

    pub fn resolve_incident(&mut self) -> Result<Resolution, IncidentError> {
        let now = self.clock.now();
        self.incidents.resolve(now)
    }

    /// Display-layer acknowledgement of a shown resolution.
    pub fn acknowledge_incident(&mut self) -> bool {
        self.incidents.acknowledge()
    }

    /// Drops any incident and returns to idle. The resolved total survives.
    pub fn reset_incident(&mut self) {
        self.incidents.reset();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("locale", &self.locale)
            .field("incidents", &self.incidents)
            .finish_non_exhaustive()
    }
}
