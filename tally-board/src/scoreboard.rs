//! Scoreboard facade: composes objective storage, identity minting and
//! display slot bindings behind one surface.
//!
//! Every mutating call takes a [`TickContext`] and checks the world's
//! read-only flag before touching any state, so a rejected call leaves the
//! scoreboard exactly as it was. Read-only queries are never gated.

use tally_types::{DisplaySlotId, ObjectiveId};
use tracing::{debug, trace};

use crate::display::{DisplayOptions, DisplaySlots};
use crate::error::{ScoreboardError, ScoreboardResult};
use crate::host::TickContext;
use crate::identity::{Identity, IdentityRegistry};
use crate::objective::{floor_score, Objective, ScoreEntry};
use crate::participant::Participant;
use crate::store::ObjectiveStore;

/// Selects an objective either by registered id or by handle.
#[derive(Debug, Clone)]
pub enum ObjectiveSelector {
    /// Select by registered id.
    Id(ObjectiveId),
    /// Select by a previously obtained handle.
    Handle(Objective),
}

impl From<ObjectiveId> for ObjectiveSelector {
    fn from(id: ObjectiveId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ObjectiveSelector {
    fn from(id: &str) -> Self {
        Self::Id(ObjectiveId::new(id))
    }
}

impl From<String> for ObjectiveSelector {
    fn from(id: String) -> Self {
        Self::Id(ObjectiveId::from(id))
    }
}

impl From<Objective> for ObjectiveSelector {
    fn from(objective: Objective) -> Self {
        Self::Handle(objective)
    }
}

impl From<&Objective> for ObjectiveSelector {
    fn from(objective: &Objective) -> Self {
        Self::Handle(objective.clone())
    }
}

/// Per-world scoreboard state.
#[derive(Debug, Default)]
pub struct Scoreboard {
    objectives: ObjectiveStore,
    display: DisplaySlots,
    identities: IdentityRegistry,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objectives: ObjectiveStore::new(),
            display: DisplaySlots::new(),
            identities: IdentityRegistry::new(),
        }
    }

    /// Registers a new objective under a unique id.
    pub fn add_objective(
        &mut self,
        ctx: &TickContext<'_>,
        id: impl Into<ObjectiveId>,
        display_name: impl Into<String>,
    ) -> ScoreboardResult<Objective> {
        self.ensure_mutable(ctx)?;
        let id = id.into();
        if self.objectives.contains_id(id.as_str()) {
            return Err(ScoreboardError::DuplicateObjective(id));
        }
        debug!("Registering objective {} at tick {}", id, ctx.tick());
        Ok(self.objectives.insert(id, display_name.into()))
    }

    /// Looks up a registered objective by id.
    #[must_use]
    pub fn objective(&self, id: &str) -> Option<Objective> {
        self.objectives.handle_by_id(id)
    }

    /// All registered objectives, in registration order.
    #[must_use]
    pub fn objectives(&self) -> Vec<Objective> {
        self.objectives.handles()
    }

    /// Removes an objective, clearing any display slot bound to it and
    /// releasing every score entry it held.
    ///
    /// Returns whether an objective was actually removed; an unknown id or
    /// an already-stale handle removes nothing.
    pub fn remove_objective(
        &mut self,
        ctx: &TickContext<'_>,
        objective: impl Into<ObjectiveSelector>,
    ) -> ScoreboardResult<bool> {
        self.ensure_mutable(ctx)?;
        let handle = match objective.into() {
            ObjectiveSelector::Id(id) => match self.objectives.handle_by_id(id.as_str()) {
                Some(handle) => handle,
                None => return Ok(false),
            },
            ObjectiveSelector::Handle(handle) => handle,
        };
        let Some(data) = self.objectives.remove(&handle) else {
            return Ok(false);
        };
        self.display.clear_objective(&handle);
        for key in data.scores.keys() {
            self.identities.detach(key);
        }
        debug!("Removed objective {} at tick {}", data.id, ctx.tick());
        Ok(true)
    }

    /// Creates or overwrites the participant's entry with `floor(value)`.
    pub fn set_score(
        &mut self,
        ctx: &TickContext<'_>,
        objective: &Objective,
        participant: impl Into<Participant>,
        value: f64,
    ) -> ScoreboardResult<()> {
        self.ensure_mutable(ctx)?;
        let participant = participant.into();
        let Some(data) = self.objectives.get_mut(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let resolved = self.identities.resolve_for_attach(ctx, &participant)?;
        let score = floor_score(value);
        let created = data.scores.set(resolved.key.clone(), score);
        trace!(
            "Set score {} for {} in objective {} at tick {}",
            score,
            resolved.key,
            data.id,
            ctx.tick()
        );
        if created {
            self.identities.attach(resolved, ctx.tick());
        }
        Ok(())
    }

    /// Adds `floor(delta)` to the participant's entry, creating it from zero
    /// if absent. Returns the resulting score.
    pub fn add_score(
        &mut self,
        ctx: &TickContext<'_>,
        objective: &Objective,
        participant: impl Into<Participant>,
        delta: f64,
    ) -> ScoreboardResult<i32> {
        self.ensure_mutable(ctx)?;
        let participant = participant.into();
        let Some(data) = self.objectives.get_mut(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let resolved = self.identities.resolve_for_attach(ctx, &participant)?;
        let (score, created) = data.scores.add(resolved.key.clone(), floor_score(delta));
        trace!(
            "Adjusted score to {} for {} in objective {} at tick {}",
            score,
            resolved.key,
            data.id,
            ctx.tick()
        );
        if created {
            self.identities.attach(resolved, ctx.tick());
        }
        Ok(score)
    }

    /// The participant's score, or `None` if it holds no entry here.
    pub fn score(
        &self,
        ctx: &TickContext<'_>,
        objective: &Objective,
        participant: impl Into<Participant>,
    ) -> ScoreboardResult<Option<i32>> {
        let Some(data) = self.objectives.get(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let participant = participant.into();
        match self.identities.resolve_existing(ctx, &participant)? {
            Some(identity) => Ok(data.scores.get(identity.key())),
            None => Ok(None),
        }
    }

    /// Snapshot of every score entry in the objective, ordered by identity
    /// id. Later mutations do not affect a snapshot already taken.
    pub fn scores(&self, objective: &Objective) -> ScoreboardResult<Vec<ScoreEntry>> {
        let Some(data) = self.objectives.get(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let mut entries: Vec<ScoreEntry> = data
            .scores
            .iter()
            .map(|(key, score)| {
                let participant = self
                    .identities
                    .handle_for(key)
                    .expect("score entry without a registered identity");
                ScoreEntry { participant, score }
            })
            .collect();
        entries.sort_by_key(|entry| entry.participant.id());
        Ok(entries)
    }

    /// Whether the participant holds an entry in this objective.
    pub fn has_participant(
        &self,
        ctx: &TickContext<'_>,
        objective: &Objective,
        participant: impl Into<Participant>,
    ) -> ScoreboardResult<bool> {
        let Some(data) = self.objectives.get(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let participant = participant.into();
        match self.identities.resolve_existing(ctx, &participant)? {
            Some(identity) => Ok(data.scores.contains(identity.key())),
            None => Ok(false),
        }
    }

    /// Identities holding an entry in this objective, ordered by identity id.
    pub fn participants_of(&self, objective: &Objective) -> ScoreboardResult<Vec<Identity>> {
        let Some(data) = self.objectives.get(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let mut handles: Vec<Identity> = data
            .scores
            .keys()
            .map(|key| {
                self.identities
                    .handle_for(key)
                    .expect("score entry without a registered identity")
            })
            .collect();
        handles.sort_by_key(|identity| identity.id());
        Ok(handles)
    }

    /// Removes the participant's entry from the objective.
    ///
    /// Returns whether an entry was removed. The participant's identity
    /// handle stays valid; only scoring again after its last entry anywhere
    /// is gone supersedes it.
    pub fn remove_participant(
        &mut self,
        ctx: &TickContext<'_>,
        objective: &Objective,
        participant: impl Into<Participant>,
    ) -> ScoreboardResult<bool> {
        self.ensure_mutable(ctx)?;
        let participant = participant.into();
        let Some(data) = self.objectives.get_mut(objective) else {
            return Err(ScoreboardError::StaleObjective(objective.id().clone()));
        };
        let Some(identity) = self.identities.resolve_existing(ctx, &participant)? else {
            return Ok(false);
        };
        if data.scores.remove(identity.key()).is_none() {
            return Ok(false);
        }
        self.identities.detach(identity.key());
        trace!(
            "Removed {} from objective {} at tick {}",
            identity.key(),
            data.id,
            ctx.tick()
        );
        Ok(true)
    }

    /// Every identity holding at least one entry across all objectives,
    /// deduplicated and ordered by identity id.
    #[must_use]
    pub fn participants(&self) -> Vec<Identity> {
        let mut handles = self.identities.active_handles();
        handles.sort_by_key(|identity| identity.id());
        handles
    }

    /// Whether this handle still refers to a registered objective.
    #[must_use]
    pub fn is_objective_valid(&self, objective: &Objective) -> bool {
        self.objectives.is_current(objective)
    }

    /// Whether this handle is still its participant's current identity.
    ///
    /// Once false, it stays false for the life of the scoreboard.
    #[must_use]
    pub fn is_identity_valid(&self, identity: &Identity) -> bool {
        self.identities.is_current(identity)
    }

    /// Binds an objective to a display slot, returning the objective that
    /// was bound there before.
    pub fn set_display_slot(
        &mut self,
        ctx: &TickContext<'_>,
        slot: DisplaySlotId,
        options: DisplayOptions,
    ) -> ScoreboardResult<Option<Objective>> {
        self.ensure_mutable(ctx)?;
        if !self.objectives.is_current(&options.objective) {
            return Err(ScoreboardError::StaleObjective(options.objective.id().clone()));
        }
        debug!(
            "Binding objective {} to display slot {} at tick {}",
            options.objective.id(),
            slot,
            ctx.tick()
        );
        Ok(self.display.set(slot, options).map(|previous| previous.objective))
    }

    /// What is currently bound to a display slot.
    #[must_use]
    pub fn display_slot(&self, slot: DisplaySlotId) -> Option<&DisplayOptions> {
        self.display.get(slot)
    }

    /// Clears a display slot, returning the objective that was bound there.
    pub fn clear_display_slot(
        &mut self,
        ctx: &TickContext<'_>,
        slot: DisplaySlotId,
    ) -> ScoreboardResult<Option<Objective>> {
        self.ensure_mutable(ctx)?;
        let previous = self.display.clear(slot);
        if previous.is_some() {
            debug!("Cleared display slot {} at tick {}", slot, ctx.tick());
        }
        Ok(previous.map(|previous| previous.objective))
    }

    fn ensure_mutable(&self, ctx: &TickContext<'_>) -> ScoreboardResult<()> {
        if ctx.read_only() {
            debug!("Rejecting scoreboard mutation while world is read-only");
            return Err(ScoreboardError::ReadOnly);
        }
        Ok(())
    }
}
