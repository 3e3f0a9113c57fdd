//! Generation-tagged slot store for registered objectives.
//!
//! Objective handles carry the slot index and the generation observed at
//! registration. Removal bumps the slot generation, so every handle minted
//! before the removal stops matching in O(1), without a graveyard of dead
//! ids and without reference counting.

use std::collections::HashMap;

use tally_types::ObjectiveId;

use crate::objective::{Objective, ObjectiveData, ScoreTable};

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    data: Option<ObjectiveData>,
}

/// Objective storage, preserving registration order for listings.
#[derive(Debug, Default)]
pub(crate) struct ObjectiveStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    by_id: HashMap<ObjectiveId, u32>,
    order: Vec<u32>,
}

impl ObjectiveStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Registers a new objective. The caller checks id uniqueness first.
    pub(crate) fn insert(&mut self, id: ObjectiveId, display_name: String) -> Objective {
        let data = ObjectiveData {
            id: id.clone(),
            display_name: display_name.clone(),
            scores: ScoreTable::default(),
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize].data = Some(data);
                slot
            }
            None => {
                let slot =
                    u32::try_from(self.slots.len()).expect("objective slot space exhausted");
                self.slots.push(Slot {
                    generation: 1,
                    data: Some(data),
                });
                slot
            }
        };
        let generation = self.slots[slot as usize].generation;
        self.by_id.insert(id.clone(), slot);
        self.order.push(slot);
        Objective::new(slot, generation, id, display_name)
    }

    /// Removes the objective behind a still-current handle, returning its
    /// stored state. Stale handles remove nothing.
    pub(crate) fn remove(&mut self, objective: &Objective) -> Option<ObjectiveData> {
        let slot = objective.slot();
        let entry = self.slots.get_mut(slot as usize)?;
        if entry.generation != objective.generation() {
            return None;
        }
        let data = entry.data.take()?;
        entry.generation += 1;
        self.free.push(slot);
        self.by_id.remove(data.id.as_str());
        self.order.retain(|&occupied| occupied != slot);
        Some(data)
    }

    pub(crate) fn get(&self, objective: &Objective) -> Option<&ObjectiveData> {
        let entry = self.slots.get(objective.slot() as usize)?;
        if entry.generation == objective.generation() {
            entry.data.as_ref()
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, objective: &Objective) -> Option<&mut ObjectiveData> {
        let entry = self.slots.get_mut(objective.slot() as usize)?;
        if entry.generation == objective.generation() {
            entry.data.as_mut()
        } else {
            None
        }
    }

    pub(crate) fn is_current(&self, objective: &Objective) -> bool {
        self.get(objective).is_some()
    }

    pub(crate) fn handle_by_id(&self, id: &str) -> Option<Objective> {
        let slot = *self.by_id.get(id)?;
        let entry = &self.slots[slot as usize];
        let data = entry.data.as_ref()?;
        Some(Objective::new(
            slot,
            entry.generation,
            data.id.clone(),
            data.display_name.clone(),
        ))
    }

    /// Handles for all registered objectives, in registration order.
    pub(crate) fn handles(&self) -> Vec<Objective> {
        self.order
            .iter()
            .filter_map(|&slot| {
                let entry = &self.slots[slot as usize];
                let data = entry.data.as_ref()?;
                Some(Objective::new(
                    slot,
                    entry.generation,
                    data.id.clone(),
                    data.display_name.clone(),
                ))
            })
            .collect()
    }
}
