//! Vessel kinds and footprint generation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::MAX_VESSEL_LENGTH;
use crate::coordinate::Coordinate;

/// Axis a vessel extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "Horizontal"),
            Orientation::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Entries of the standard catalog, each with a fixed length and axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardKind {
    PatrolBoat,
    HospitalShip,
    SupplyShip,
    MunitionsShip,
    Warship,
    AircraftCarrier,
}

impl StandardKind {
    pub const fn name(self) -> &'static str {
        match self {
            StandardKind::PatrolBoat => "Patrol Boat",
            StandardKind::HospitalShip => "Hospital Ship",
            StandardKind::SupplyShip => "Supply Ship",
            StandardKind::MunitionsShip => "Munitions Ship",
            StandardKind::Warship => "Warship",
            StandardKind::AircraftCarrier => "Aircraft Carrier",
        }
    }

    pub const fn length(self) -> usize {
        match self {
            StandardKind::PatrolBoat => 1,
            StandardKind::HospitalShip => 2,
            StandardKind::SupplyShip | StandardKind::MunitionsShip => 3,
            StandardKind::Warship => 4,
            StandardKind::AircraftCarrier => 5,
        }
    }

    pub const fn orientation(self) -> Orientation {
        match self {
            StandardKind::PatrolBoat | StandardKind::SupplyShip | StandardKind::Warship => {
                Orientation::Horizontal
            }
            StandardKind::HospitalShip
            | StandardKind::MunitionsShip
            | StandardKind::AircraftCarrier => Orientation::Vertical,
        }
    }
}

/// Type tag carried by every placed vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselKind {
    Standard(StandardKind),
    Custom,
}

impl VesselKind {
    pub fn name(&self) -> &'static str {
        match self {
            VesselKind::Standard(kind) => kind.name(),
            VesselKind::Custom => "Custom Vessel",
        }
    }
}

/// A vessel: its footprint and whether it has been sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    kind: VesselKind,
    footprint: Vec<Coordinate>,
    sunk: bool,
}

impl Vessel {
    /// Build a catalog vessel anchored at `origin`, extending along the
    /// kind's fixed axis. Bounds are checked by the board on placement;
    /// a footprint running past the integer range fails with `OutOfBounds`.
    pub fn standard(kind: StandardKind, origin: Coordinate) -> Result<Self, GameError> {
        Ok(Self {
            kind: VesselKind::Standard(kind),
            footprint: footprint(origin, kind.length(), kind.orientation())?,
            sunk: false,
        })
    }

    /// Build a custom vessel. `length` must be in `1..=MAX_VESSEL_LENGTH`.
    pub fn custom(
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        if length == 0 || length > MAX_VESSEL_LENGTH {
            return Err(GameError::InvalidLength(length));
        }
        Ok(Self {
            kind: VesselKind::Custom,
            footprint: footprint(origin, length, orientation)?,
            sunk: false,
        })
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    /// Occupied coordinates, starting at the origin.
    pub fn footprint(&self) -> &[Coordinate] {
        &self.footprint
    }

    pub fn len(&self) -> usize {
        self.footprint.len()
    }

    /// Footprints are never empty; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.footprint.is_empty()
    }

    pub fn origin(&self) -> Coordinate {
        self.footprint[0]
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.footprint.contains(&coord)
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// One-way transition; nothing resets it.
    pub(crate) fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}

fn footprint(
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, GameError> {
    (0..length as i32)
        .map(|i| origin.step(i, orientation.is_vertical()))
        .collect::<Option<Vec<_>>>()
        .ok_or(GameError::OutOfBounds(origin))
}
