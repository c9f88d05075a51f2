use alloc::vec::Vec;
use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Row buffer with inline capacity covering common board widths.
pub type RowBuf = SmallVec<[Tile; 8]>;

/// Result of collapsing a single row leftward.
#[derive(Clone, Debug, PartialEq)]
pub struct RowShift {
    pub tiles: RowBuf,
    pub moved: bool,
    pub gained: Score,
}

/// Result of shifting a whole board in some direction. `board` always has the
/// same dimensions as the input.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftResult {
    pub board: Board,
    pub moved: bool,
    pub gained: Score,
}

struct RowAcc {
    out: RowBuf,
    pending: Tile,
    gained: Score,
}

/// Collapses one row toward the left with classic single-merge semantics:
/// empty cells are skipped without breaking later merges, a tile equal to the
/// pending one merges into a doubled output tile, and any other tile flushes
/// the pending one and takes its place.
pub fn shift_row_left(row: &[Tile]) -> RowShift {
    let acc = row.iter().fold(
        RowAcc {
            out: RowBuf::new(),
            pending: Tile::Empty,
            gained: 0,
        },
        |mut acc, &tile| {
            match (acc.pending, tile) {
                (_, Tile::Empty) => {}
                (Tile::Empty, incoming) => acc.pending = incoming,
                (Tile::Value(held), Tile::Value(value)) if held == value => {
                    // a merged tile leaves the pending slot, so it can never
                    // merge a second time within the same pass
                    acc.out.push(Tile::Value(held * 2));
                    acc.gained += held * 2;
                    acc.pending = Tile::Empty;
                }
                (held, incoming) => {
                    acc.out.push(held);
                    acc.pending = incoming;
                }
            }
            acc
        },
    );

    let mut tiles = acc.out;
    if !acc.pending.is_empty() {
        tiles.push(acc.pending);
    }
    tiles.resize(row.len(), Tile::Empty);

    let moved = tiles.as_slice() != row;
    RowShift {
        tiles,
        moved,
        gained: acc.gained,
    }
}

/// Shifts the whole board in `direction`: rotate into the canonical leftward
/// orientation, collapse every row independently, rotate back. Never mutates
/// its input and holds no state between calls.
pub fn shift(board: &Board, direction: Direction) -> ShiftResult {
    let rotated = board.rotate_ccw(direction.to_canonical());
    let (rows, cols) = {
        let size = rotated.size();
        (usize::from(size.0), usize::from(size.1))
    };

    let mut shifted_rows: Vec<RowBuf> = Vec::with_capacity(rows);
    let mut moved = false;
    let mut gained: Score = 0;
    for row in rotated.iter_rows() {
        let row_shift = shift_row_left(row);
        moved |= row_shift.moved;
        gained += row_shift.gained;
        shifted_rows.push(row_shift.tiles);
    }

    let merged = Board {
        tiles: Array2::from_shape_fn((rows, cols), |(r, c)| shifted_rows[r][c]),
    };
    let board = merged.rotate_ccw(direction.from_canonical());
    ShiftResult {
        board,
        moved,
        gained,
    }
}
