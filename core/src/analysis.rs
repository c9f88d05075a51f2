use crate::*;

/// True while the player still has a legal move: any empty cell, or any two
/// orthogonally adjacent tiles of equal value. The inverse signals that no
/// moves remain.
pub fn has_moves(board: &Board) -> bool {
    board.iter_tiles().any(|(coords, tile)| {
        if tile.is_empty() {
            return true;
        }
        board
            .tiles
            .iter_neighbor_cells(coords)
            .any(|neighbor| neighbor == tile)
    })
}

/// Highest tile value present, 0 for an all-empty board.
pub fn highest_tile(board: &Board) -> u32 {
    board
        .iter_tiles()
        .filter_map(|(_, tile)| tile.value())
        .max()
        .unwrap_or(0)
}

/// Whether some tile has reached `target`. The winning value is a product
/// decision, so it is taken as a parameter rather than baked in.
pub fn has_reached(board: &Board, target: u32) -> bool {
    highest_tile(board) >= target
}
