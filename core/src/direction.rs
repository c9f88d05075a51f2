use serde::{Deserialize, Serialize};

/// The four cardinal moves a player can make. Fixed, closed set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Counter-clockwise rotation that maps this direction onto the canonical
    /// leftward shift.
    pub const fn to_canonical(self) -> Rotation {
        use Direction::*;
        match self {
            Left => Rotation::R0,
            Up => Rotation::R90,
            Right => Rotation::R180,
            Down => Rotation::R270,
        }
    }

    /// Rotation that maps a canonically shifted board back to this direction's
    /// original orientation.
    pub const fn from_canonical(self) -> Rotation {
        self.to_canonical().inverse()
    }
}

/// Counter-clockwise quarter-turn board rotations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Rotating by `self` and then by `self.inverse()` is the identity.
    pub const fn inverse(self) -> Rotation {
        use Rotation::*;
        match self {
            R0 => R0,
            R90 => R270,
            R180 => R180,
            R270 => R90,
        }
    }
}
