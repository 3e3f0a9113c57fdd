//! Shared test world for scoreboard tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use tally_board::{TickContext, WorldHost};
use tally_types::{EntityRef, EntityUid};

/// In-memory stand-in for the host world: a handful of entities, a tick
/// counter and the read-only flag.
#[derive(Default)]
pub struct FakeWorld {
    read_only: Cell<bool>,
    tick: Cell<u64>,
    entities: RefCell<HashMap<EntityUid, EntityRef>>,
}

impl FakeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows this world as the context for one scoreboard call.
    pub fn ctx(&self) -> TickContext<'_> {
        TickContext::new(self)
    }

    /// Adds a live player and returns its uid.
    pub fn spawn_player(&self, uid: u64, name: &str) -> EntityUid {
        self.spawn(uid, name, true)
    }

    /// Adds a live non-player entity and returns its uid.
    pub fn spawn_entity(&self, uid: u64, name: &str) -> EntityUid {
        self.spawn(uid, name, false)
    }

    fn spawn(&self, uid: u64, name: &str, is_player: bool) -> EntityUid {
        let uid = EntityUid::from_raw(uid);
        self.entities.borrow_mut().insert(
            uid,
            EntityRef {
                uid,
                name: name.to_owned(),
                is_player,
            },
        );
        uid
    }

    /// Removes an entity from the world.
    pub fn despawn(&self, uid: EntityUid) {
        self.entities.borrow_mut().remove(&uid);
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn advance_tick(&self) {
        self.tick.set(self.tick.get() + 1);
    }
}

impl WorldHost for FakeWorld {
    fn tick(&self) -> u64 {
        self.tick.get()
    }

    fn is_read_only(&self) -> bool {
        self.read_only.get()
    }

    fn entity(&self, uid: EntityUid) -> Option<EntityRef> {
        self.entities.borrow().get(&uid).cloned()
    }
}
