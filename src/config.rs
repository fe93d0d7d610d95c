use crate::vessel::StandardKind;

pub const BOARD_SIZE: u8 = 10;

/// Standard catalog, in placement order.
pub const STANDARD_FLEET: [StandardKind; 6] = [
    StandardKind::PatrolBoat,
    StandardKind::HospitalShip,
    StandardKind::SupplyShip,
    StandardKind::MunitionsShip,
    StandardKind::Warship,
    StandardKind::AircraftCarrier,
];

/// Longest vessel allowed, standard or custom.
pub const MAX_VESSEL_LENGTH: usize = 5;

/// Largest fleet a custom game may declare.
pub const MAX_CUSTOM_FLEET: usize = 10;

/// Ceiling for the random placement and random targeting loops.
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Total number of vessel cells in the standard fleet.
pub const STANDARD_FLEET_CELLS: usize = 1 + 2 + 3 + 3 + 4 + 5;
