//! Countdown engine: snapshot computation, target parsing, and the
//! adaptive watcher.

pub mod snapshot;
pub mod target;
pub mod watcher;

pub use snapshot::{Snapshot, Tier, APPROACHING_SECS, IMMINENT_SECS, URGENT_SECS};
pub use target::parse_target;
pub use watcher::{Cadence, Watcher};
