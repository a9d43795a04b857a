//! Match lifecycle around the turn engine.
//!
//! - `store`: `MatchStore` trait and the in-memory store
//! - `manager`: `MatchManager`, single-owner create/join/start/play
//! - `registry`: `SharedMatches`, per-match locking for multi-threaded hosts

pub mod manager;
pub mod registry;
pub mod store;

pub use manager::{ColorPreference, MatchManager, CODE_ALPHABET};
pub use registry::SharedMatches;
pub use store::{InMemoryMatchStore, MatchStore};
