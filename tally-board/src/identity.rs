//! Score holder identities and the registry that mints them.
//!
//! Every participant that holds at least one score entry is represented by an
//! [`Identity`]: a stable, numbered handle minted the moment the participant
//! goes from zero score entries to one. Removing the last entry does not
//! invalidate the handle; the next time the same participant gains an entry,
//! a fresh identity with a new id supersedes it, and the old handle becomes
//! stale forever.
//!
//! Identity ids are never reused. Validity is a pure lookup: a handle is
//! current while its generation matches the registry's generation for its
//! participant key, so stale handles answer `false` indefinitely without any
//! liveness bookkeeping on the world side.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tally_types::{EntityRef, EntityUid, IdentityId, IdentityKind, ParticipantKey};
use tracing::debug;

use crate::error::{ScoreboardError, ScoreboardResult};
use crate::host::TickContext;
use crate::participant::Participant;

/// A minted score holder identity.
///
/// Handles are cheap to clone and compare equal by id alone, so a superseded
/// handle never compares equal to its replacement even though both refer to
/// the same participant.
#[derive(Debug, Clone)]
pub struct Identity {
    id: IdentityId,
    kind: IdentityKind,
    display_name: String,
    key: ParticipantKey,
    generation: u32,
}

impl Identity {
    /// Unique numeric id of this identity.
    #[must_use]
    pub const fn id(&self) -> IdentityId {
        self.id
    }

    /// What sort of participant this identity stands for.
    #[must_use]
    pub const fn kind(&self) -> IdentityKind {
        self.kind
    }

    /// Display name captured when the identity was minted.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The live entity behind this identity, if there is one right now.
    ///
    /// Fake players never have one. A despawned entity yields `None`
    /// without affecting the identity's validity.
    #[must_use]
    pub fn entity(&self, ctx: &TickContext<'_>) -> Option<EntityRef> {
        match self.key {
            ParticipantKey::Entity(uid) => ctx.entity(uid),
            ParticipantKey::Name(_) => None,
        }
    }

    pub(crate) const fn key(&self) -> &ParticipantKey {
        &self.key
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Identity {}

impl std::hash::Hash for Identity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Per-key registry record. Survives even when the participant holds no
/// entries, so history ("this key was once tracked") is never forgotten.
#[derive(Debug, Clone)]
struct Registration {
    id: IdentityId,
    kind: IdentityKind,
    display_name: String,
    generation: u32,
    entries: u32,
}

/// A participant resolved far enough to attach a score entry to it.
#[derive(Debug)]
pub(crate) struct ResolvedWrite {
    pub(crate) key: ParticipantKey,
    pub(crate) kind: IdentityKind,
    pub(crate) display_name: String,
}

/// Mints identities and tracks which generation is current per participant.
#[derive(Debug)]
pub(crate) struct IdentityRegistry {
    next_id: u32,
    registrations: HashMap<ParticipantKey, Registration>,
}

impl IdentityRegistry {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 1,
            registrations: HashMap::new(),
        }
    }

    /// Resolves a participant for a read. Never mints.
    ///
    /// `Ok(None)` means the participant is real but holds no identity yet.
    pub(crate) fn resolve_existing(
        &self,
        ctx: &TickContext<'_>,
        participant: &Participant,
    ) -> ScoreboardResult<Option<Identity>> {
        match participant {
            Participant::Entity(uid) => {
                let key = ParticipantKey::Entity(*uid);
                if let Some(handle) = self.handle_for(&key) {
                    Ok(Some(handle))
                } else if ctx.entity(*uid).is_some() {
                    Ok(None)
                } else {
                    Err(ScoreboardError::UnresolvableParticipant(*uid))
                }
            }
            Participant::Identity(identity) => {
                if self.is_current(identity) {
                    Ok(Some(identity.clone()))
                } else {
                    Err(ScoreboardError::StaleIdentity(identity.id()))
                }
            }
            Participant::Name(name) => Ok(self.handle_for(&ParticipantKey::Name(name.clone()))),
        }
    }

    /// Resolves a participant for a write, without touching the registry yet.
    ///
    /// Validation happens here so callers can fail before mutating anything;
    /// the returned [`ResolvedWrite`] is then fed to [`Self::attach`] once the
    /// score mutation is known to go ahead.
    pub(crate) fn resolve_for_attach(
        &self,
        ctx: &TickContext<'_>,
        participant: &Participant,
    ) -> ScoreboardResult<ResolvedWrite> {
        match participant {
            Participant::Entity(uid) => self.resolve_entity_write(ctx, *uid),
            Participant::Identity(identity) => {
                if !self.is_current(identity) {
                    return Err(ScoreboardError::StaleIdentity(identity.id()));
                }
                match identity.key() {
                    ParticipantKey::Entity(uid) => self.resolve_entity_write(ctx, *uid),
                    ParticipantKey::Name(_) => Ok(ResolvedWrite {
                        key: identity.key().clone(),
                        kind: IdentityKind::FakePlayer,
                        display_name: identity.display_name().to_owned(),
                    }),
                }
            }
            Participant::Name(name) => Ok(ResolvedWrite {
                key: ParticipantKey::Name(name.clone()),
                kind: IdentityKind::FakePlayer,
                display_name: name.clone(),
            }),
        }
    }

    fn resolve_entity_write(
        &self,
        ctx: &TickContext<'_>,
        uid: EntityUid,
    ) -> ScoreboardResult<ResolvedWrite> {
        let key = ParticipantKey::Entity(uid);
        if let Some(entity) = ctx.entity(uid) {
            let kind = if entity.is_player {
                IdentityKind::Player
            } else {
                IdentityKind::Entity
            };
            Ok(ResolvedWrite {
                key,
                kind,
                display_name: entity.name,
            })
        } else if let Some(reg) = self.registrations.get(&key) {
            // Despawned but remembered: keep the mint-time kind and name.
            Ok(ResolvedWrite {
                key,
                kind: reg.kind,
                display_name: reg.display_name.clone(),
            })
        } else {
            Err(ScoreboardError::UnresolvableParticipant(uid))
        }
    }

    /// Records one more score entry for the resolved participant, minting or
    /// superseding its identity when this is the first entry.
    pub(crate) fn attach(&mut self, resolved: ResolvedWrite, tick: u64) -> Identity {
        let ResolvedWrite {
            key,
            kind,
            display_name,
        } = resolved;
        match self.registrations.entry(key.clone()) {
            Entry::Vacant(vacant) => {
                let id = IdentityId::from_raw(self.next_id);
                self.next_id = self
                    .next_id
                    .checked_add(1)
                    .expect("identity id space exhausted");
                debug!("Minted identity {} for {} at tick {}", id, key, tick);
                vacant.insert(Registration {
                    id,
                    kind,
                    display_name: display_name.clone(),
                    generation: 1,
                    entries: 1,
                });
                Identity {
                    id,
                    kind,
                    display_name,
                    key,
                    generation: 1,
                }
            }
            Entry::Occupied(mut occupied) => {
                let reg = occupied.get_mut();
                if reg.entries == 0 {
                    let id = IdentityId::from_raw(self.next_id);
                    self.next_id = self
                        .next_id
                        .checked_add(1)
                        .expect("identity id space exhausted");
                    debug!(
                        "Identity {} supersedes {} for {} at tick {}",
                        id, reg.id, key, tick
                    );
                    reg.id = id;
                    reg.kind = kind;
                    reg.display_name = display_name;
                    reg.generation += 1;
                    reg.entries = 1;
                } else {
                    reg.entries += 1;
                }
                Identity {
                    id: reg.id,
                    kind: reg.kind,
                    display_name: reg.display_name.clone(),
                    key,
                    generation: reg.generation,
                }
            }
        }
    }

    /// Records that one score entry for this key went away.
    pub(crate) fn detach(&mut self, key: &ParticipantKey) {
        if let Some(reg) = self.registrations.get_mut(key) {
            reg.entries = reg.entries.saturating_sub(1);
        }
    }

    /// Whether this handle is the current identity for its participant.
    pub(crate) fn is_current(&self, identity: &Identity) -> bool {
        self.registrations
            .get(identity.key())
            .map(|reg| reg.generation == identity.generation)
            .unwrap_or(false)
    }

    /// Builds a handle for the current identity of `key`, if one was ever
    /// minted.
    pub(crate) fn handle_for(&self, key: &ParticipantKey) -> Option<Identity> {
        self.registrations.get(key).map(|reg| Identity {
            id: reg.id,
            kind: reg.kind,
            display_name: reg.display_name.clone(),
            key: key.clone(),
            generation: reg.generation,
        })
    }

    /// Handles for every identity that currently holds at least one entry.
    pub(crate) fn active_handles(&self) -> Vec<Identity> {
        self.registrations
            .iter()
            .filter(|(_, reg)| reg.entries > 0)
            .map(|(key, reg)| Identity {
                id: reg.id,
                kind: reg.kind,
                display_name: reg.display_name.clone(),
                key: key.clone(),
                generation: reg.generation,
            })
            .collect()
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
