//! Adaptive countdown watcher.
//!
//! A watcher is a single self-rescheduling task: it publishes a snapshot,
//! sleeps for the cadence of the snapshot's tier, recomputes, and re-arms
//! itself with a delay chosen from the freshly computed snapshot. At most
//! one sleep is ever pending per watcher.
//!
//! ```text
//! spawn -> publish -> (passed? stop) -> sleep(tier) -> recompute -> publish -> ...
//! ```
//!
//! Changing the target has no carryover semantics: tear the watcher down
//! and spawn a new one.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::snapshot::{Snapshot, Tier};

/// Refresh intervals per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// More than 15 minutes out.
    pub default: Duration,
    /// 15 minutes or less out.
    pub urgent: Duration,
    /// 5 minutes or less out.
    pub imminent: Duration,
}

impl Cadence {
    pub fn for_tier(&self, tier: Tier) -> Duration {
        match tier {
            Tier::Default => self.default,
            Tier::Urgent => self.urgent,
            Tier::Imminent => self.imminent,
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            default: Tier::Default.default_refresh(),
            urgent: Tier::Urgent.default_refresh(),
            imminent: Tier::Imminent.default_refresh(),
        }
    }
}

/// Handle to one running countdown.
///
/// Owns the background task; dropping the handle aborts it, cancelling any
/// pending sleep. Once the target passes the task terminates on its own
/// and the passed snapshot stays as the final published value.
#[derive(Debug)]
pub struct Watcher {
    rx: watch::Receiver<Snapshot>,
    task: Option<JoinHandle<()>>,
}

impl Watcher {
    /// Start watching `target`.
    ///
    /// The initial snapshot is computed synchronously before this returns;
    /// a subscriber never waits a full tick for the first value. If the
    /// target has already passed, no task is spawned and no timer is ever
    /// armed.
    pub fn spawn(target: DateTime<Utc>, cadence: Cadence) -> Self {
        let first = Snapshot::compute(target, Utc::now());
        let (tx, rx) = watch::channel(first.clone());

        if first.passed {
            tracing::debug!(%target, "target already passed; not arming a timer");
            return Self { rx, task: None };
        }

        tracing::debug!(%target, tier = ?first.tier(), "countdown watcher started");
        let task = tokio::spawn(async move {
            let mut snap = first;
            loop {
                tokio::time::sleep(cadence.for_tier(snap.tier())).await;
                let next = Snapshot::compute(target, Utc::now());
                if next.tier() != snap.tier() {
                    tracing::debug!(from = ?snap.tier(), to = ?next.tier(), "cadence tier changed");
                }
                let done = next.passed;
                snap = next;
                if tx.send(snap.clone()).is_err() {
                    return;
                }
                if done {
                    tracing::debug!(%target, "target passed; watcher stopping");
                    return;
                }
            }
        });

        Self { rx, task: Some(task) }
    }

    /// Start watching with the built-in tier cadences (60s / 10s / 1s).
    pub fn spawn_default(target: DateTime<Utc>) -> Self {
        Self::spawn(target, Cadence::default())
    }

    /// Latest published snapshot.
    pub fn latest(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    /// A receiver over every subsequently published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.rx.clone()
    }

    /// True once the watcher will publish no further snapshots.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
