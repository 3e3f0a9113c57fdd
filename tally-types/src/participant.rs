//! Participant classification.
//!
//! An identity is minted for one participant, but the identity is not the
//! participant: identities are superseded over a participant's lifetime,
//! while the [`ParticipantKey`] is what stays constant across remints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EntityUid;

/// The kind of participant an identity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityKind {
    /// A player-controlled entity.
    Player,
    /// A non-player world entity.
    Entity,
    /// A virtual score holder with no backing entity.
    FakePlayer,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Player => "player",
            Self::Entity => "entity",
            Self::FakePlayer => "fake_player",
        };
        f.write_str(name)
    }
}

/// The stable key naming the underlying participant of an identity.
///
/// Entity-backed participants (players and other entities) are keyed by the
/// host's entity uid; fake players are keyed by their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKey {
    /// An entity-backed participant.
    Entity(EntityUid),
    /// A fake-player participant.
    Name(String),
}

impl fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(uid) => write!(f, "entity:{uid}"),
            Self::Name(name) => write!(f, "name:{name}"),
        }
    }
}
