//! Match records for persistence collaborators.
//!
//! A record is the configuration plus the full event log and result. Since
//! the engine is deterministic for a given seed and policy, replaying the
//! configuration must reproduce the same log.

use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, Result};
use crate::policy::MovePolicy;
use crate::rules::{MatchEngine, MatchResult};

use super::event::EventRecord;

/// Everything needed to store and later audit a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Configuration the match was created with.
    pub config: MatchConfig,

    /// Every event in order.
    pub events: Vec<EventRecord>,

    /// Result, if the match finished.
    pub result: Option<MatchResult>,
}

impl MatchRecord {
    /// Capture the current state of an engine's log.
    #[must_use]
    pub fn from_engine<P: MovePolicy>(engine: &MatchEngine<P>) -> Self {
        Self {
            config: engine.config().clone(),
            events: engine.events().iter().cloned().collect(),
            result: engine.result().cloned(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`MatchRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Re-run the match from its configuration with `policy` and compare
    /// logs.
    ///
    /// Only meaningful for records of matches started with `setup`, played
    /// with a deterministic policy equivalent to `policy`.
    pub fn replays_identically<P: MovePolicy>(&self, policy: P) -> Result<bool> {
        let mut engine = MatchEngine::with_policy(self.config.clone(), policy)?;
        engine.setup()?;
        while !engine.is_finished() && engine.events().len() < self.events.len() {
            engine.play_turn()?;
        }
        Ok(engine.events().iter().eq(self.events.iter()))
    }
}
