//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Board, CellState, Coordinate, GameError, GameMode, GameSession, GameStatus,
    Orientation, Side, StandardKind, Statistics, Vessel, VesselKind, BOARD_SIZE, STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_board, Console};
