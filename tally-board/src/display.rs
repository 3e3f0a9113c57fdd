//! Bindings from display slots to objectives.

use tally_types::{DisplaySlotId, SortOrder};

use crate::objective::Objective;

/// How an objective is presented in a display slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Objective shown in the slot.
    pub objective: Objective,
    /// Ordering applied when the slot renders its entries. `None` leaves the
    /// ordering to the renderer.
    pub sort_order: Option<SortOrder>,
}

/// The fixed table of display slot bindings.
#[derive(Debug, Default)]
pub(crate) struct DisplaySlots {
    bindings: [Option<DisplayOptions>; 3],
}

impl DisplaySlots {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, slot: DisplaySlotId) -> Option<&DisplayOptions> {
        self.bindings[slot.index()].as_ref()
    }

    /// Binds a slot, returning the previously bound options.
    pub(crate) fn set(
        &mut self,
        slot: DisplaySlotId,
        options: DisplayOptions,
    ) -> Option<DisplayOptions> {
        self.bindings[slot.index()].replace(options)
    }

    /// Clears a slot, returning what was bound.
    pub(crate) fn clear(&mut self, slot: DisplaySlotId) -> Option<DisplayOptions> {
        self.bindings[slot.index()].take()
    }

    /// Unbinds every slot currently showing this objective.
    pub(crate) fn clear_objective(&mut self, objective: &Objective) {
        for binding in &mut self.bindings {
            let bound = binding
                .as_ref()
                .map(|options| &options.objective == objective)
                .unwrap_or(false);
            if bound {
                *binding = None;
            }
        }
    }
}
