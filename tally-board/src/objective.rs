//! Objectives and their per-participant score tables.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tally_types::{ObjectiveId, ParticipantKey};

use crate::identity::Identity;

/// Handle to a registered objective.
///
/// Handles compare equal only when they refer to the same registration. A
/// handle left over from a removed objective never matches a later one, even
/// when the same objective id is registered again.
#[derive(Debug, Clone)]
pub struct Objective {
    slot: u32,
    generation: u32,
    id: ObjectiveId,
    display_name: String,
}

impl Objective {
    pub(crate) fn new(slot: u32, generation: u32, id: ObjectiveId, display_name: String) -> Self {
        Self {
            slot,
            generation,
            id,
            display_name,
        }
    }

    /// Identifier the objective was registered under.
    #[must_use]
    pub const fn id(&self) -> &ObjectiveId {
        &self.id
    }

    /// Human-readable name shown in display slots.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub(crate) const fn slot(&self) -> u32 {
        self.slot
    }

    pub(crate) const fn generation(&self) -> u32 {
        self.generation
    }
}

impl PartialEq for Objective {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.generation == other.generation
    }
}

impl Eq for Objective {}

/// One participant's score in one objective.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    /// Identity holding the score.
    pub participant: Identity,
    /// The score itself.
    pub score: i32,
}

/// Scores arrive as doubles from script but are stored as `i32`: rounded
/// toward negative infinity and saturated at the `i32` range, with `NaN`
/// mapping to zero.
pub(crate) fn floor_score(value: f64) -> i32 {
    value.floor() as i32
}

/// Score entries of a single objective, keyed by participant.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScoreTable {
    scores: HashMap<ParticipantKey, i32>,
}

impl ScoreTable {
    pub(crate) fn get(&self, key: &ParticipantKey) -> Option<i32> {
        self.scores.get(key).copied()
    }

    pub(crate) fn contains(&self, key: &ParticipantKey) -> bool {
        self.scores.contains_key(key)
    }

    /// Sets the score, returning `true` when this created the entry.
    pub(crate) fn set(&mut self, key: ParticipantKey, score: i32) -> bool {
        self.scores.insert(key, score).is_none()
    }

    /// Adds to the score, starting from zero for a new entry and saturating
    /// at the `i32` range. Returns the new score and whether the entry was
    /// created.
    pub(crate) fn add(&mut self, key: ParticipantKey, delta: i32) -> (i32, bool) {
        match self.scores.entry(key) {
            Entry::Occupied(mut entry) => {
                let updated = entry.get().saturating_add(delta);
                entry.insert(updated);
                (updated, false)
            }
            Entry::Vacant(entry) => {
                entry.insert(delta);
                (delta, true)
            }
        }
    }

    pub(crate) fn remove(&mut self, key: &ParticipantKey) -> Option<i32> {
        self.scores.remove(key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&ParticipantKey, i32)> {
        self.scores.iter().map(|(key, score)| (key, *score))
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &ParticipantKey> {
        self.scores.keys()
    }
}

/// Stored state of one registered objective.
#[derive(Debug, Clone)]
pub(crate) struct ObjectiveData {
    pub(crate) id: ObjectiveId,
    pub(crate) display_name: String,
    pub(crate) scores: ScoreTable,
}
