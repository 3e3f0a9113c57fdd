//! Error types for the scoreboard engine.

use tally_types::{EntityUid, IdentityId, ObjectiveId};
use thiserror::Error;

/// Result type for scoreboard operations.
pub type ScoreboardResult<T> = Result<T, ScoreboardError>;

/// Errors that can occur in scoreboard operations.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// The world is in read-only mode; all mutations are rejected.
    #[error("world is in read-only mode")]
    ReadOnly,

    /// An objective with this id is already registered.
    #[error("objective already registered: {0}")]
    DuplicateObjective(ObjectiveId),

    /// The objective handle refers to an objective that has been removed.
    #[error("objective no longer registered: {0}")]
    StaleObjective(ObjectiveId),

    /// The identity handle has been superseded by a newer identity.
    #[error("identity superseded: {0}")]
    StaleIdentity(IdentityId),

    /// The entity is unknown to the world and holds no score history.
    #[error("no score holder for entity: {0}")]
    UnresolvableParticipant(EntityUid),
}
