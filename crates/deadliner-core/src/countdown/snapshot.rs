//! Remaining-time snapshot computation.
//!
//! A [`Snapshot`] is a pure function of `(now, target)` -- no hidden state.
//! The caller supplies both instants, so the same inputs always produce an
//! identical snapshot.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Remaining duration at or below which the countdown is "approaching".
pub const APPROACHING_SECS: i64 = 60 * 60;
/// Remaining duration at or below which the countdown is "urgent".
pub const URGENT_SECS: i64 = 15 * 60;
/// Remaining duration at or below which the countdown is "imminent".
pub const IMMINENT_SECS: i64 = 5 * 60;

/// Refresh-cadence tier, derived from how close the target is.
///
/// Tiers only tighten (or stay equal) as wall-clock time advances toward a
/// fixed target. Variants are ordered loosest to tightest, so `Ord`
/// compares tightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// More than 15 minutes remaining.
    Default,
    /// 15 minutes or less remaining.
    Urgent,
    /// 5 minutes or less remaining.
    Imminent,
}

impl Tier {
    /// Built-in refresh interval for this tier.
    ///
    /// `Config` can override these; the defaults are 60s / 10s / 1s.
    pub fn default_refresh(self) -> Duration {
        match self {
            Tier::Default => Duration::from_secs(60),
            Tier::Urgent => Duration::from_secs(10),
            Tier::Imminent => Duration::from_secs(1),
        }
    }
}

/// One immutable remaining-time breakdown, valid as of the instant it was
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Total remaining whole seconds, clamped to zero.
    pub total_secs: i64,
    /// Whole days remaining.
    pub days: i64,
    /// Hours of the remaining day (0-23).
    pub hours: u32,
    /// Minutes of the remaining hour (0-59).
    pub minutes: u32,
    /// Seconds of the remaining minute (0-59).
    pub seconds: u32,
    /// One hour or less remaining.
    pub approaching: bool,
    /// Fifteen minutes or less remaining.
    pub urgent: bool,
    /// Five minutes or less remaining.
    pub imminent: bool,
    /// The target instant is at or before `computed_at`.
    pub passed: bool,
    /// Human-readable remaining-time label.
    pub label: String,
    /// Instant this snapshot was computed at.
    pub computed_at: DateTime<Utc>,
}

impl Snapshot {
    /// Compute the breakdown of `target - now`.
    ///
    /// The unclamped sign decides `passed` (a target exactly at `now`
    /// reports zero remaining and `passed == true`); the clamped value
    /// feeds the unit decomposition. Threshold comparisons are inclusive,
    /// so exactly 5 minutes remaining is already imminent.
    pub fn compute(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = target.signed_duration_since(now);
        let passed = diff <= TimeDelta::zero();
        let total_secs = diff.num_seconds().max(0);

        let days = total_secs / 86_400;
        let hours = (total_secs % 86_400) / 3_600;
        let minutes = (total_secs % 3_600) / 60;
        let seconds = total_secs % 60;

        // Nested thresholds: imminent implies urgent implies approaching.
        let approaching = total_secs <= APPROACHING_SECS;
        let urgent = total_secs <= URGENT_SECS;
        let imminent = total_secs <= IMMINENT_SECS;

        let label = if passed {
            "Started".to_string()
        } else if days > 0 {
            format!("{days}d {hours}h")
        } else if hours > 0 {
            format!("{hours}h {minutes}m")
        } else if minutes > 0 {
            format!("{minutes} min")
        } else {
            format!("{seconds}s")
        };

        Self {
            total_secs,
            days,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            approaching,
            urgent,
            imminent,
            passed,
            label,
            computed_at: now,
        }
    }

    /// Cadence tier implied by this snapshot's proximity flags.
    pub fn tier(&self) -> Tier {
        if self.imminent {
            Tier::Imminent
        } else if self.urgent {
            Tier::Urgent
        } else {
            Tier::Default
        }
    }
}
