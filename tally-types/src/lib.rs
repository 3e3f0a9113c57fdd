//! Core type definitions for Tally.
//!
//! This crate defines the fundamental, host-agnostic vocabulary used by the
//! scoreboard engine:
//! - Identity, entity, and objective identifiers
//! - Participant classification (player / entity / fake player)
//! - Display-slot and sort-order enums
//! - The world-entity snapshot exchanged with the host simulation
//!
//! Everything with behavior (the identity registry, score tables, the
//! `Scoreboard` facade) lives in `tally-board`, not here.

mod display;
mod entity;
mod ids;
mod participant;

pub use display::{DisplaySlotId, SortOrder};
pub use entity::EntityRef;
pub use ids::{EntityUid, IdentityId, ObjectiveId};
pub use participant::{IdentityKind, ParticipantKey};
