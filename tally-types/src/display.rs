//! Display-slot vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed on-screen locations that can present an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplaySlotId {
    /// The player-list overlay.
    List,
    /// The sidebar panel.
    Sidebar,
    /// The space under entity nameplates.
    BelowName,
}

impl DisplaySlotId {
    /// Every slot, in a fixed order.
    pub const ALL: [DisplaySlotId; 3] = [Self::List, Self::Sidebar, Self::BelowName];

    /// Stable index of this slot within [`DisplaySlotId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::List => 0,
            Self::Sidebar => 1,
            Self::BelowName => 2,
        }
    }
}

impl fmt::Display for DisplaySlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Sidebar => "sidebar",
            Self::BelowName => "below_name",
        };
        f.write_str(name)
    }
}

/// Presentation order for scores within a display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lowest score first.
    Ascending,
    /// Highest score first.
    Descending,
}
