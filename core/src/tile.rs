use serde::{Deserialize, Serialize};

/// A single board position: empty, or a tile holding a positive power-of-two
/// value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Value(u32),
}

impl Tile {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Empty
    }
}
