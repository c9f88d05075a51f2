use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board rows have unequal lengths")]
    RaggedRows,
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("No snapshot to undo")]
    NothingToUndo,
    #[error("Saved game data is invalid")]
    CorruptSave,
}

pub type Result<T> = core::result::Result<T, GameError>;
