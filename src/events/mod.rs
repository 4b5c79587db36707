//! Event log and match records.
//!
//! - `MatchEvent` / `EventRecord`: what drivers poll after each engine call
//! - `MatchRecord`: a finished (or interrupted) match packaged for storage

pub mod event;
pub mod record;

pub use event::{EventRecord, MatchEvent};
pub use record::MatchRecord;
