//! # Deadliner Core Library
//!
//! Core logic for Deadliner, an adaptive countdown engine: given a target
//! instant, compute a structured remaining-time snapshot and keep it fresh
//! on a self-adjusting cadence -- coarse while the deadline is far off,
//! fine-grained as it approaches, stopping for good once it has passed.
//! All operations are available via a standalone CLI binary, which is a
//! thin layer over this library.
//!
//! ## Key Components
//!
//! - [`Snapshot`]: pure remaining-time breakdown of `(now, target)`
//! - [`Watcher`]: one tokio task per countdown, re-armed after every tick
//!   with a delay chosen from the freshly computed snapshot's [`Tier`]
//! - [`Config`]: TOML cadence configuration
//! - [`Event`]: serialized state changes for CLI and embedding callers

pub mod countdown;
pub mod config;
pub mod events;
pub mod error;

pub use countdown::{parse_target, Cadence, Snapshot, Tier, Watcher};
pub use config::Config;
pub use events::Event;
pub use error::{ConfigError, CoreError, ParseError};
