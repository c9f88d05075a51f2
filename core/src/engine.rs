use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions: `InProgress -> Won`, `InProgress -> Lost`, and either
/// terminal state back to `InProgress` through `undo`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a player shift.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShiftOutcome {
    NoChange,
    Shifted,
    Won,
    Lost,
}

impl ShiftOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ShiftOutcome::*;
        match self {
            NoChange => false,
            Shifted => true,
            Won => true,
            Lost => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    board: Board,
    score: Score,
}

/// A play session from setup to win or loss: the current board, cumulative
/// score, and the undo history of prior `(board, score)` snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    score: Score,
    state: GameState,
    history: Vec<Snapshot>,
}

impl Game {
    /// Starts a session on an empty board with two spawned tiles.
    pub fn new(config: GameConfig, spawner: &mut impl TileSpawner) -> Self {
        let board = Board::empty(config.size);
        let board = spawner.place(&board);
        let board = spawner.place(&board);
        Self {
            config,
            board,
            score: 0,
            state: Default::default(),
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.board[coords]
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Applies one player move: shift, then spawn, then resolve the state.
    /// A shift that changes nothing spawns nothing and records no snapshot.
    pub fn shift(
        &mut self,
        direction: Direction,
        spawner: &mut impl TileSpawner,
    ) -> Result<ShiftOutcome> {
        self.check_not_finished()?;

        let result = shift(&self.board, direction);
        if !result.moved {
            return Ok(ShiftOutcome::NoChange);
        }

        self.history.push(Snapshot {
            board: self.board.clone(),
            score: self.score,
        });
        self.score += result.gained;
        self.board = spawner.place(&result.board);
        log::debug!(
            "Shift {:?}, gained {}, score {}",
            direction,
            result.gained,
            self.score
        );

        Ok(if has_reached(&self.board, self.config.win_value) {
            self.state = GameState::Won;
            ShiftOutcome::Won
        } else if !has_moves(&self.board) {
            self.state = GameState::Lost;
            ShiftOutcome::Lost
        } else {
            ShiftOutcome::Shifted
        })
    }

    /// Restores the most recent snapshot, reopening a finished session.
    pub fn undo(&mut self) -> Result<()> {
        let snapshot = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board = snapshot.board;
        self.score = snapshot.score;
        self.state = GameState::InProgress;
        log::debug!("Undo, score back to {}", self.score);
        Ok(())
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Tile = Tile::Empty;

    const fn t(value: u32) -> Tile {
        Tile::Value(value)
    }

    /// Writes a fixed value into the first empty cell, so the tests stay
    /// independent of RNG draws.
    struct FixedSpawner(u32);

    impl TileSpawner for FixedSpawner {
        fn place(&mut self, board: &Board) -> Board {
            let mut next = board.clone();
            if let Some(coords) = board.iter_empty().next() {
                next[coords] = Tile::Value(self.0);
            }
            next
        }
    }

    fn game_with_board(board: Board, win_value: u32) -> Game {
        let size = board.size();
        Game {
            config: GameConfig::new(size, win_value),
            board,
            score: 0,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    #[test]
    fn new_game_spawns_two_tiles() {
        let mut spawner = RandomTileSpawner::new(42);
        let game = Game::new(GameConfig::classic(), &mut spawner);

        let occupied = game.board().iter_tiles().filter(|(_, t)| !t.is_empty());
        assert_eq!(occupied.count(), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(!game.can_undo());
    }

    #[test]
    fn unmoved_shift_changes_nothing() {
        let board = Board::from_rows(&[[t(2), E], [E, E]]).unwrap();
        let mut game = game_with_board(board.clone(), 2048);

        let outcome = game.shift(Direction::Up, &mut FixedSpawner(2)).unwrap();

        assert_eq!(outcome, ShiftOutcome::NoChange);
        assert!(!outcome.has_update());
        assert_eq!(game.board(), &board);
        assert_eq!(game.score(), 0);
        assert!(!game.can_undo());
    }

    #[test]
    fn shift_merges_spawns_and_scores() {
        let board = Board::from_rows(&[[t(2), t(2)], [E, E]]).unwrap();
        let mut game = game_with_board(board, 2048);

        let outcome = game.shift(Direction::Left, &mut FixedSpawner(2)).unwrap();

        assert_eq!(outcome, ShiftOutcome::Shifted);
        assert_eq!(game.score(), 4);
        assert_eq!(game.tile_at((0, 0)), t(4));
        // the spawner filled the first freed cell
        assert_eq!(game.tile_at((0, 1)), t(2));
        assert!(game.can_undo());
    }

    #[test]
    fn undo_restores_board_and_score() {
        let board = Board::from_rows(&[[t(2), t(2)], [E, E]]).unwrap();
        let mut game = game_with_board(board.clone(), 2048);

        game.shift(Direction::Left, &mut FixedSpawner(2)).unwrap();
        game.undo().unwrap();

        assert_eq!(game.board(), &board);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn reaching_the_win_value_ends_the_session() {
        let board = Board::from_rows(&[[t(4), t(4)]]).unwrap();
        let mut game = game_with_board(board, 8);

        let outcome = game.shift(Direction::Left, &mut FixedSpawner(2)).unwrap();

        assert_eq!(outcome, ShiftOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
        assert!(game.is_finished());
        assert_eq!(
            game.shift(Direction::Left, &mut FixedSpawner(2)),
            Err(GameError::AlreadyEnded)
        );
    }

    #[test]
    fn running_out_of_moves_ends_the_session() {
        let board = Board::from_rows(&[[t(4), E]]).unwrap();
        let mut game = game_with_board(board, 2048);

        // the spawned 2 fills the last cell and nothing is mergeable
        let outcome = game.shift(Direction::Right, &mut FixedSpawner(2)).unwrap();

        assert_eq!(outcome, ShiftOutcome::Lost);
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn undo_reopens_a_finished_session() {
        let board = Board::from_rows(&[[t(4), E]]).unwrap();
        let mut game = game_with_board(board.clone(), 2048);

        game.shift(Direction::Right, &mut FixedSpawner(2)).unwrap();
        game.undo().unwrap();

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.board(), &board);
    }
}
