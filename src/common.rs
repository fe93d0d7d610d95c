//! Common types: attack outcomes and engine errors.

use crate::coordinate::Coordinate;
use crate::vessel::VesselKind;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Water, an already resolved cell, or a cell off the board.
    Miss,
    /// Struck a vessel that is still afloat.
    Hit,
    /// Struck the last intact cell of a vessel, carrying its kind.
    Sunk(VesselKind),
}

impl AttackResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// Errors returned by board and session operations.
///
/// Every variant is recoverable: the failing call leaves all state untouched
/// and the caller may retry with different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate falls outside the 10×10 grid.
    OutOfBounds(Coordinate),
    /// Placement collides with an existing vessel at this coordinate.
    Overlap(Coordinate),
    /// Custom vessel length outside `1..=MAX_VESSEL_LENGTH`.
    InvalidLength(usize),
    /// Custom fleet size outside `1..=MAX_CUSTOM_FLEET`.
    FleetSize(usize),
    /// This coordinate was already resolved as a hit.
    AlreadyAttacked(Coordinate),
    /// A rejection-sampling loop gave up.
    SamplingExhausted { attempts: usize },
    /// Placement call does not match the prepared game mode.
    WrongMode,
    /// Every vessel of the prepared fleet has already been placed.
    SetupComplete,
    /// Placement already began under the prepared fleet.
    SetupStarted,
    /// Attack requested before the human fleet is complete.
    SetupIncomplete,
    /// The opponent fleet was already deployed for this match.
    FleetAlreadyDeployed,
    /// The other side is due to fire.
    OutOfTurn,
    /// One fleet is already destroyed.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds(c) => write!(f, "Coordinate {} is outside the board", c),
            GameError::Overlap(c) => write!(f, "Vessel overlaps another vessel at {}", c),
            GameError::InvalidLength(len) => write!(f, "Invalid vessel length {}", len),
            GameError::FleetSize(n) => write!(f, "Invalid fleet size {}", n),
            GameError::AlreadyAttacked(c) => write!(f, "Coordinate {} was already attacked", c),
            GameError::SamplingExhausted { attempts } => {
                write!(f, "No valid random choice after {} attempts", attempts)
            }
            GameError::WrongMode => write!(f, "Placement does not match the game mode"),
            GameError::SetupComplete => write!(f, "All vessels are already placed"),
            GameError::SetupStarted => write!(f, "Fleet placement has already started"),
            GameError::SetupIncomplete => write!(f, "Fleet setup is not finished"),
            GameError::FleetAlreadyDeployed => write!(f, "Opponent fleet is already deployed"),
            GameError::OutOfTurn => write!(f, "It is not this side's turn"),
            GameError::GameOver => write!(f, "The game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
