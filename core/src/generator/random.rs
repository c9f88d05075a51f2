use alloc::vec::Vec;
use rand::rngs::SmallRng;

use super::*;

/// Spawns into a uniformly random empty cell: a 2 with probability 0.9, a 4
/// with probability 0.1.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: SmallRng,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn place(&mut self, board: &Board) -> Board {
        use rand::prelude::*;

        let empty: Vec<Coord2> = board.iter_empty().collect();
        if empty.is_empty() {
            log::warn!("Board already full, spawned nothing");
            return board.clone();
        }

        // one draw picks both the cell and the 2-vs-4 weighting
        let roll = self.rng.random_range(0..empty.len() * 10);
        let coords = empty[roll / 10];
        let value = if roll % 10 == 0 { 4 } else { 2 };

        let mut next = board.clone();
        next[coords] = Tile::Value(value);
        log::debug!("Spawned {} at {:?}", value, coords);
        next
    }
}
