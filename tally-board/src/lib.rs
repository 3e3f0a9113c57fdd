//! Per-world scoreboard engine for Tally.
//!
//! Tracks named objectives holding integer scores keyed by dynamically
//! minted participant identities, plus a fixed table of display slot
//! bindings:
//!
//! - [`Scoreboard`]: the facade every caller goes through
//! - [`Objective`] and [`ScoreEntry`]: registered objectives and their entries
//! - [`Identity`]: a minted score holder handle
//! - [`DisplayOptions`]: what a display slot shows and how
//! - [`WorldHost`] and [`TickContext`]: the seam to the embedding world
//!
//! Identities are the subtle part. A participant gets a fresh [`Identity`]
//! whenever it goes from holding zero score entries to holding one; removing
//! its last entry leaves the handle valid, but the next score mints a
//! replacement and the old handle is stale forever. Handle validity checks
//! ([`Scoreboard::is_objective_valid`], [`Scoreboard::is_identity_valid`])
//! are pure O(1) generation comparisons and answer correctly for the life of
//! the process.
//!
//! All state is in-memory and single-threaded; the host serializes calls on
//! the world's simulation step and supplies the read-only flag through
//! [`TickContext`].

mod display;
mod error;
mod host;
mod identity;
mod objective;
mod participant;
mod scoreboard;
mod store;

pub use display::DisplayOptions;
pub use error::{ScoreboardError, ScoreboardResult};
pub use host::{TickContext, WorldHost};
pub use identity::Identity;
pub use objective::{Objective, ScoreEntry};
pub use participant::Participant;
pub use scoreboard::{ObjectiveSelector, Scoreboard};
