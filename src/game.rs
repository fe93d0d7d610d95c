use core::fmt;
use rand::Rng;

use crate::{
    board::{Board, Grid},
    common::{AttackResult, GameError},
    config::{MAX_CUSTOM_FLEET, MAX_VESSEL_LENGTH, STANDARD_FLEET},
    coordinate::Coordinate,
    vessel::{Orientation, StandardKind, Vessel},
};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Human => "Human",
            Side::Opponent => "Machine",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Fleet composition rule for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// The six-vessel standard catalog.
    #[default]
    Standard,
    /// Caller-chosen count, lengths and orientations.
    Custom,
}

/// Current status of a game, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Description of the next vessel to place during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPrompt {
    Standard(StandardKind),
    /// One-based ordinal of the next custom vessel and the fleet size.
    Custom { ordinal: usize, total: usize },
}

impl fmt::Display for PlacementPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementPrompt::Standard(kind) => write!(
                f,
                "Placing {} (length {}) - {}",
                kind.name(),
                kind.length(),
                kind.orientation()
            ),
            PlacementPrompt::Custom { ordinal, total } => {
                write!(f, "Placing custom vessel #{} of {}", ordinal, total)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SetupCursor {
    mode: GameMode,
    placed: usize,
    target: usize,
}

impl SetupCursor {
    fn standard() -> Self {
        Self {
            mode: GameMode::Standard,
            placed: 0,
            target: STANDARD_FLEET.len(),
        }
    }

    fn custom(count: usize) -> Self {
        Self {
            mode: GameMode::Custom,
            placed: 0,
            target: count,
        }
    }

    fn is_complete(&self) -> bool {
        self.target > 0 && self.placed >= self.target
    }
}

/// One match between the human and the automated opponent.
///
/// All randomness comes from the injected generator `R`, so a seeded
/// generator replays a match exactly.
pub struct GameSession<R: Rng> {
    human: Board,
    opponent: Board,
    setup: SetupCursor,
    turn: Side,
    last_human_attack: Option<(Coordinate, AttackResult)>,
    last_opponent_attack: Option<(Coordinate, AttackResult)>,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Fresh match with empty boards. Call one of the `prepare_*` methods
    /// before placing vessels.
    pub fn new(rng: R) -> Self {
        Self {
            human: Board::new(),
            opponent: Board::new(),
            setup: SetupCursor::default(),
            turn: Side::Human,
            last_human_attack: None,
            last_opponent_attack: None,
            rng,
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }

    /// Copy of a board's grid for rendering. The caller conceals the
    /// opponent's intact vessels.
    pub fn snapshot(&self, side: Side) -> Grid {
        self.board(side).snapshot()
    }

    pub fn mode(&self) -> GameMode {
        self.setup.mode
    }

    /// Side due to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    // ---- setup ----

    /// Start placing the standard catalog. Only allowed before the first
    /// human vessel is placed.
    pub fn prepare_standard_setup(&mut self) -> Result<(), GameError> {
        self.check_prepare()?;
        self.setup = SetupCursor::standard();
        Ok(())
    }

    /// Prepare a custom fleet of `count` vessels (`1..=MAX_CUSTOM_FLEET`).
    pub fn prepare_custom_setup(&mut self, count: usize) -> Result<(), GameError> {
        self.check_prepare()?;
        if count == 0 || count > MAX_CUSTOM_FLEET {
            return Err(GameError::FleetSize(count));
        }
        self.setup = SetupCursor::custom(count);
        Ok(())
    }

    fn check_prepare(&self) -> Result<(), GameError> {
        if self.setup.is_complete() {
            return Err(GameError::SetupComplete);
        }
        if !self.human.vessels().is_empty() {
            return Err(GameError::SetupStarted);
        }
        Ok(())
    }

    /// Next placement to perform, or `None` once setup is complete.
    pub fn current_placement_prompt(&self) -> Option<PlacementPrompt> {
        if self.setup.target == 0 || self.setup.is_complete() {
            return None;
        }
        Some(match self.setup.mode {
            GameMode::Standard => PlacementPrompt::Standard(STANDARD_FLEET[self.setup.placed]),
            GameMode::Custom => PlacementPrompt::Custom {
                ordinal: self.setup.placed + 1,
                total: self.setup.target,
            },
        })
    }

    pub fn is_setup_complete(&self) -> bool {
        self.setup.is_complete()
    }

    /// Number of vessels placed in the current setup phase.
    pub fn placed_count(&self) -> usize {
        self.setup.placed
    }

    /// Place the next standard-catalog vessel at `(x, y)`.
    pub fn place_standard(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        self.check_placement(GameMode::Standard)?;
        let kind = STANDARD_FLEET[self.setup.placed];
        self.human.place(Vessel::standard(kind, Coordinate::new(x, y))?)?;
        self.setup.placed += 1;
        Ok(())
    }

    /// Place the next custom vessel. A rejected placement does not use up
    /// a fleet slot; the caller decides whether to ask again.
    pub fn place_custom(
        &mut self,
        x: i32,
        y: i32,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.check_placement(GameMode::Custom)?;
        let vessel = Vessel::custom(Coordinate::new(x, y), length, orientation)?;
        self.human.place(vessel)?;
        self.setup.placed += 1;
        Ok(())
    }

    fn check_placement(&self, mode: GameMode) -> Result<(), GameError> {
        if self.setup.mode != mode || self.setup.target == 0 {
            return Err(GameError::WrongMode);
        }
        if self.setup.is_complete() {
            return Err(GameError::SetupComplete);
        }
        Ok(())
    }

    /// Deploy the standard catalog on the opponent board at random origins.
    pub fn setup_opponent_standard_fleet(&mut self) -> Result<(), GameError> {
        if !self.opponent.vessels().is_empty() {
            return Err(GameError::FleetAlreadyDeployed);
        }
        for kind in STANDARD_FLEET {
            self.opponent
                .place_randomly(&mut self.rng, |origin| Vessel::standard(kind, origin))?;
        }
        log::info!("opponent deployed the standard fleet");
        Ok(())
    }

    /// Deploy a random custom fleet on the opponent board: 1 to 10 vessels,
    /// each 1 to 5 cells long with a random axis. Returns the fleet size.
    pub fn setup_opponent_custom_fleet(&mut self) -> Result<usize, GameError> {
        if !self.opponent.vessels().is_empty() {
            return Err(GameError::FleetAlreadyDeployed);
        }
        let count = self.rng.random_range(1..=MAX_CUSTOM_FLEET);
        for _ in 0..count {
            let length = self.rng.random_range(1..=MAX_VESSEL_LENGTH);
            let orientation = if self.rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            self.opponent.place_randomly(&mut self.rng, |origin| {
                Vessel::custom(origin, length, orientation)
            })?;
        }
        log::info!("opponent deployed a custom fleet of {} vessels", count);
        Ok(count)
    }

    // ---- play ----

    fn check_turn(&self, side: Side) -> Result<(), GameError> {
        if !self.setup.is_complete() {
            return Err(GameError::SetupIncomplete);
        }
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.turn != side {
            return Err(GameError::OutOfTurn);
        }
        Ok(())
    }

    fn end_turn(&mut self) {
        if !self.is_game_over() {
            self.turn = self.turn.other();
        }
    }

    /// Human fires at the opponent board.
    ///
    /// Off-board targets and cells already struck are rejected without
    /// using up the turn; firing on water is a legitimate miss.
    pub fn attack_opponent(&mut self, x: i32, y: i32) -> Result<AttackResult, GameError> {
        self.check_turn(Side::Human)?;
        let coord = Coordinate::new(x, y);
        if !Board::in_bounds(coord) {
            return Err(GameError::OutOfBounds(coord));
        }
        if self.opponent.is_attacked(coord) {
            return Err(GameError::AlreadyAttacked(coord));
        }
        let result = self.opponent.attack(coord);
        log::debug!("human fired at {}: {:?}", coord, result);
        self.last_human_attack = Some((coord, result));
        self.end_turn();
        Ok(result)
    }

    /// Opponent fires at a random unattacked cell of the human board.
    pub fn opponent_auto_attack(&mut self) -> Result<Coordinate, GameError> {
        self.check_turn(Side::Opponent)?;
        let coord = self.human.random_attack(&mut self.rng)?;
        let result = self.human.attack(coord);
        log::debug!("machine fired at {}: {:?}", coord, result);
        self.last_opponent_attack = Some((coord, result));
        self.end_turn();
        Ok(coord)
    }

    pub fn last_human_attack(&self) -> Option<(Coordinate, AttackResult)> {
        self.last_human_attack
    }

    pub fn last_opponent_attack(&self) -> Option<(Coordinate, AttackResult)> {
        self.last_opponent_attack
    }

    /// Whether the opponent's most recent shot struck a vessel.
    pub fn last_opponent_attack_hit(&self) -> bool {
        self.last_opponent_attack
            .is_some_and(|(_, result)| result.is_hit())
    }

    /// `true` if the human already struck this opponent cell.
    pub fn is_already_attacked(&self, x: i32, y: i32) -> bool {
        self.opponent.is_attacked(Coordinate::new(x, y))
    }

    pub fn is_game_over(&self) -> bool {
        self.human.all_sunk() || self.opponent.all_sunk()
    }

    /// The side whose enemy fleet is destroyed, if any.
    pub fn winner(&self) -> Option<Side> {
        if self.human.all_sunk() {
            Some(Side::Opponent)
        } else if self.opponent.all_sunk() {
            Some(Side::Human)
        } else {
            None
        }
    }

    pub fn winner_name(&self) -> Option<&'static str> {
        self.winner().map(Side::name)
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            None => GameStatus::InProgress,
            Some(Side::Human) => GameStatus::Won,
            Some(Side::Opponent) => GameStatus::Lost,
        }
    }
}
