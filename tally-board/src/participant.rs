//! Participant designators accepted by scoreboard operations.

use tally_types::{EntityRef, EntityUid};

use crate::identity::Identity;

/// Anything a scoreboard call can score against.
///
/// Operations take `impl Into<Participant>`, so call sites can pass an
/// entity id, a previously obtained [`Identity`], or a fake player name
/// without ceremony.
#[derive(Debug, Clone)]
pub enum Participant {
    /// A live or remembered world entity.
    Entity(EntityUid),
    /// A previously minted identity handle.
    Identity(Identity),
    /// A fake player, addressed by name.
    Name(String),
}

impl From<EntityUid> for Participant {
    fn from(uid: EntityUid) -> Self {
        Self::Entity(uid)
    }
}

impl From<&EntityRef> for Participant {
    fn from(entity: &EntityRef) -> Self {
        Self::Entity(entity.uid)
    }
}

impl From<EntityRef> for Participant {
    fn from(entity: EntityRef) -> Self {
        Self::Entity(entity.uid)
    }
}

impl From<Identity> for Participant {
    fn from(identity: Identity) -> Self {
        Self::Identity(identity)
    }
}

impl From<&Identity> for Participant {
    fn from(identity: &Identity) -> Self {
        Self::Identity(identity.clone())
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
