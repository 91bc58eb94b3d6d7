use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::{Snapshot, Tier};

/// Every state change in a countdown produces an Event.
/// The CLI prints them; embedding callers may subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CountdownStarted {
        target: DateTime<Utc>,
        snapshot: Snapshot,
        at: DateTime<Utc>,
    },
    SnapshotPublished {
        snapshot: Snapshot,
        at: DateTime<Utc>,
    },
    /// The refresh cadence tightened as the target drew closer.
    TierChanged {
        from: Tier,
        to: Tier,
        at: DateTime<Utc>,
    },
    /// Terminal: the target instant is now at or before the clock.
    TargetPassed {
        target: DateTime<Utc>,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_tag_by_type() {
        let event = Event::TargetPassed {
            target: Utc::now(),
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"TargetPassed\""));
    }

    #[test]
    fn snapshot_event_round_trips() {
        let snapshot = Snapshot::compute(Utc::now() + chrono::TimeDelta::minutes(42), Utc::now());
        let event = Event::SnapshotPublished {
            snapshot: snapshot.clone(),
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        match serde_json::from_str::<Event>(&json).unwrap() {
            Event::SnapshotPublished { snapshot: decoded, .. } => {
                assert_eq!(decoded, snapshot);
            }
            other => panic!("expected SnapshotPublished, got {other:?}"),
        }
    }
}
