//! Source of "today".
//!
//! Which calendar day counts as today depends on a time zone. The server uses
//! the device-local zone unless configured for UTC; tests pin a fixed day.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    #[default]
    Local,
    Utc,
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the configured zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: DateZone,
}

impl SystemClock {
    pub fn new(zone: DateZone) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.zone {
            DateZone::Local => Local::now().date_naive(),
            DateZone::Utc => Utc::now().date_naive(),
        }
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
