//! World-entity snapshot passed across the host boundary.

use serde::{Deserialize, Serialize};

use crate::EntityUid;

/// A snapshot of a live world entity as the host reports it.
///
/// The scoreboard holds no live entity state; it sees entities only through
/// these snapshots, re-requested from the host whenever one is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Host-assigned unique id.
    pub uid: EntityUid,
    /// Player-visible name.
    pub name: String,
    /// Whether the entity is a player.
    pub is_player: bool,
}
