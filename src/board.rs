//! Board state: a 10×10 cell grid plus the vessels placed on it.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, GameError};
use crate::config::{BOARD_SIZE, MAX_SAMPLING_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Water,
    /// Untouched vessel segment.
    Occupied,
    /// Struck segment of a vessel still afloat.
    Hit,
    /// Segment of a vessel that has been sunk.
    Sunk,
}

impl CellState {
    /// Integer encoding used by plain-matrix renderers:
    /// 0 water, 1 occupied, 2 hit, 3 sunk.
    pub fn code(self) -> u8 {
        match self {
            CellState::Water => 0,
            CellState::Occupied => 1,
            CellState::Hit => 2,
            CellState::Sunk => 3,
        }
    }

    /// The state as seen by the enemy: intact segments look like water.
    pub fn concealed(self) -> Self {
        match self {
            CellState::Occupied => CellState::Water,
            other => other,
        }
    }

    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Sunk)
    }
}

/// Row-major copy of a board, indexed `grid[y - 1][x - 1]`.
pub type Grid = [[CellState; GRID_SIZE]; GRID_SIZE];

/// Convert a grid to the integer matrix of [`CellState::code`].
pub fn grid_codes(grid: &Grid) -> [[u8; GRID_SIZE]; GRID_SIZE] {
    core::array::from_fn(|r| core::array::from_fn(|c| grid[r][c].code()))
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    vessels: Vec<Vessel>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board: all water, no vessels.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Water; GRID_SIZE]; GRID_SIZE],
            vessels: Vec::new(),
        }
    }

    /// Grid indices `(row, col)` for an in-range coordinate.
    fn index(coord: Coordinate) -> Option<(usize, usize)> {
        let size = BOARD_SIZE as i32;
        if (1..=size).contains(&coord.x) && (1..=size).contains(&coord.y) {
            Some(((coord.y - 1) as usize, (coord.x - 1) as usize))
        } else {
            None
        }
    }

    /// `true` if the coordinate lies within `[1,10]×[1,10]`.
    pub fn in_bounds(coord: Coordinate) -> bool {
        Self::index(coord).is_some()
    }

    /// Cell state at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        Self::index(coord).map(|(r, c)| self.cells[r][c])
    }

    pub fn snapshot(&self) -> Grid {
        self.cells
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels still afloat.
    pub fn remaining(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_sunk()).count()
    }

    /// Place a vessel. The whole footprint must be on the board and on
    /// water; otherwise nothing changes.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), GameError> {
        if let Some(&c) = vessel.footprint().iter().find(|&&c| !Self::in_bounds(c)) {
            return Err(GameError::OutOfBounds(c));
        }
        if let Some(&c) = vessel
            .footprint()
            .iter()
            .find(|&&c| self.cell(c) != Some(CellState::Water))
        {
            return Err(GameError::Overlap(c));
        }
        for &c in vessel.footprint() {
            self.set(c, CellState::Occupied);
        }
        log::debug!("placed {} at {}", vessel.kind().name(), vessel.origin());
        self.vessels.push(vessel);
        Ok(())
    }

    /// Keep drawing random origins until `build` yields a vessel the board
    /// accepts. Errors from `build` are returned immediately.
    pub fn place_randomly<R, F>(&mut self, rng: &mut R, mut build: F) -> Result<Coordinate, GameError>
    where
        R: Rng + ?Sized,
        F: FnMut(Coordinate) -> Result<Vessel, GameError>,
    {
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let origin = random_coordinate(rng);
            let vessel = build(origin)?;
            match self.place(vessel) {
                Ok(()) => return Ok(origin),
                Err(GameError::OutOfBounds(_)) | Err(GameError::Overlap(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        log::warn!("random placement gave up after {} attempts", MAX_SAMPLING_ATTEMPTS);
        Err(GameError::SamplingExhausted {
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }

    /// Fire at `coord`.
    ///
    /// Off-board, water and already resolved cells are misses and leave the
    /// board unchanged. Striking the last intact segment of a vessel sinks it
    /// and turns its whole footprint to `Sunk`.
    pub fn attack(&mut self, coord: Coordinate) -> AttackResult {
        if self.cell(coord) != Some(CellState::Occupied) {
            return AttackResult::Miss;
        }
        self.set(coord, CellState::Hit);

        let owner = self.vessels.iter().position(|v| v.contains(coord));
        debug_assert!(owner.is_some(), "occupied cell {} has no vessel", coord);
        let Some(idx) = owner else {
            return AttackResult::Hit;
        };
        let destroyed = self.vessels[idx]
            .footprint()
            .iter()
            .all(|&c| self.cell(c) == Some(CellState::Hit));
        if !destroyed {
            return AttackResult::Hit;
        }

        let vessel = &mut self.vessels[idx];
        vessel.mark_sunk();
        let kind = vessel.kind();
        for &c in vessel.footprint() {
            if let Some((r, col)) = Self::index(c) {
                self.cells[r][col] = CellState::Sunk;
            }
        }
        log::debug!("{} sunk by shot at {}", kind.name(), coord);
        AttackResult::Sunk(kind)
    }

    /// `true` if `coord` holds a struck segment.
    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_some_and(CellState::is_attacked)
    }

    /// `true` when every placed vessel is sunk. An empty board counts as
    /// defeated.
    pub fn all_sunk(&self) -> bool {
        self.vessels.iter().all(Vessel::is_sunk)
    }

    /// Uniformly random coordinate that has not been attacked yet.
    pub fn random_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coordinate, GameError> {
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let coord = random_coordinate(rng);
            if !self.is_attacked(coord) {
                return Ok(coord);
            }
        }
        log::warn!("random targeting gave up after {} attempts", MAX_SAMPLING_ATTEMPTS);
        Err(GameError::SamplingExhausted {
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }

    fn set(&mut self, coord: Coordinate, state: CellState) {
        if let Some((r, c)) = Self::index(coord) {
            self.cells[r][c] = state;
        }
    }
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let size = BOARD_SIZE as i32;
    Coordinate::new(rng.random_range(1..=size), rng.random_range(1..=size))
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in grid_codes(&self.cells).iter() {
            write!(f, "  ")?;
            for code in row {
                write!(f, "{}", code)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  vessels: {:?}", self.vessels)?;
        write!(f, "}}")
    }
}
