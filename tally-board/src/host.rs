//! Integration seam between the scoreboard and the embedding world.
//!
//! The scoreboard never reaches into global state. Every operation that
//! needs world information receives a [`TickContext`] borrowed from the
//! game loop for the duration of that one call.

use tally_types::{EntityRef, EntityUid};

/// View of the embedding world required by the scoreboard.
///
/// The game loop implements this once. The scoreboard only queries it;
/// it never mutates the world.
pub trait WorldHost {
    /// Current game tick.
    fn tick(&self) -> u64;

    /// Whether the world currently rejects all mutations.
    fn is_read_only(&self) -> bool;

    /// Look up a live entity by its unique id.
    ///
    /// Returns `None` for entities that have despawned or never existed.
    fn entity(&self, uid: EntityUid) -> Option<EntityRef>;
}

/// Borrowed world state for a single scoreboard call.
///
/// Construct a fresh one per call; it is a thin `Copy` wrapper around the
/// host reference.
#[derive(Clone, Copy)]
pub struct TickContext<'w> {
    host: &'w dyn WorldHost,
}

impl<'w> TickContext<'w> {
    /// Wrap a world host for one call.
    #[must_use]
    pub fn new(host: &'w dyn WorldHost) -> Self {
        Self { host }
    }

    /// Current game tick.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.host.tick()
    }

    /// Whether mutations are currently rejected.
    #[must_use]
    pub fn read_only(&self) -> bool {
        self.host.is_read_only()
    }

    /// Live-entity lookup, delegated to the host.
    #[must_use]
    pub fn entity(&self, uid: EntityUid) -> Option<EntityRef> {
        self.host.entity(uid)
    }
}
