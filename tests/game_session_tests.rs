use broadside::{
    AttackResult, CellState, Coordinate, GameError, GameMode, GameSession, GameStatus,
    Orientation, PlacementPrompt, Side, StandardKind, VesselKind, MAX_CUSTOM_FLEET, STANDARD_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Non-overlapping origins for the standard catalog, in catalog order.
const STANDARD_LAYOUT: [(i32, i32); 6] = [(1, 1), (1, 3), (1, 6), (5, 1), (1, 8), (10, 1)];

fn session(seed: u64) -> GameSession<SmallRng> {
    GameSession::new(SmallRng::seed_from_u64(seed))
}

fn place_standard_layout(s: &mut GameSession<SmallRng>) {
    s.prepare_standard_setup().unwrap();
    for (x, y) in STANDARD_LAYOUT {
        s.place_standard(x, y).unwrap();
    }
}

/// Sink the whole opponent fleet, letting the machine answer every shot.
fn sink_opponent(s: &mut GameSession<SmallRng>) {
    let targets: Vec<Coordinate> = s
        .board(Side::Opponent)
        .vessels()
        .iter()
        .flat_map(|v| v.footprint().to_vec())
        .collect();
    for t in targets {
        s.attack_opponent(t.x, t.y).unwrap();
        if s.is_game_over() {
            break;
        }
        s.opponent_auto_attack().unwrap();
        if s.is_game_over() {
            break;
        }
    }
}

#[test]
fn test_standard_setup_prompts_in_catalog_order() {
    let mut s = session(1);
    assert_eq!(s.current_placement_prompt(), None);
    assert!(!s.is_setup_complete());

    s.prepare_standard_setup().unwrap();
    for (i, (x, y)) in STANDARD_LAYOUT.iter().enumerate() {
        assert_eq!(
            s.current_placement_prompt(),
            Some(PlacementPrompt::Standard(STANDARD_FLEET[i]))
        );
        s.place_standard(*x, *y).unwrap();
    }
    assert!(s.is_setup_complete());
    assert_eq!(s.current_placement_prompt(), None);
    assert_eq!(s.board(Side::Human).vessels().len(), 6);
    assert_eq!(s.place_standard(9, 9), Err(GameError::SetupComplete));
}

#[test]
fn test_standard_prompt_text() {
    let mut s = session(1);
    s.prepare_standard_setup().unwrap();
    s.place_standard(1, 1).unwrap();
    assert_eq!(
        s.current_placement_prompt().unwrap().to_string(),
        "Placing Hospital Ship (length 2) - Vertical"
    );
}

#[test]
fn test_failed_standard_placement_does_not_advance() {
    let mut s = session(2);
    s.prepare_standard_setup().unwrap();
    s.place_standard(3, 3).unwrap();
    // Hospital ship is vertical: (10, 10) runs off the board.
    assert_eq!(
        s.place_standard(10, 10),
        Err(GameError::OutOfBounds(Coordinate::new(10, 11)))
    );
    assert_eq!(s.placed_count(), 1);
    // Overlaps the patrol boat.
    assert_eq!(
        s.place_standard(3, 2),
        Err(GameError::Overlap(Coordinate::new(3, 3)))
    );
    assert_eq!(
        s.current_placement_prompt(),
        Some(PlacementPrompt::Standard(StandardKind::HospitalShip))
    );
}

#[test]
fn test_custom_setup_flow() {
    let mut s = session(3);
    assert_eq!(s.prepare_custom_setup(0), Err(GameError::FleetSize(0)));
    assert_eq!(
        s.prepare_custom_setup(MAX_CUSTOM_FLEET + 1),
        Err(GameError::FleetSize(MAX_CUSTOM_FLEET + 1))
    );

    s.prepare_custom_setup(2).unwrap();
    assert_eq!(s.mode(), GameMode::Custom);
    assert_eq!(
        s.current_placement_prompt(),
        Some(PlacementPrompt::Custom { ordinal: 1, total: 2 })
    );
    assert_eq!(s.place_standard(1, 1), Err(GameError::WrongMode));

    // Rejected custom placements consume no slot.
    assert_eq!(
        s.place_custom(1, 1, 6, Orientation::Horizontal),
        Err(GameError::InvalidLength(6))
    );
    assert_eq!(
        s.place_custom(9, 1, 3, Orientation::Horizontal),
        Err(GameError::OutOfBounds(Coordinate::new(11, 1)))
    );
    assert_eq!(s.placed_count(), 0);

    s.place_custom(1, 1, 3, Orientation::Vertical).unwrap();
    assert_eq!(
        s.current_placement_prompt().unwrap().to_string(),
        "Placing custom vessel #2 of 2"
    );
    s.place_custom(4, 4, 5, Orientation::Horizontal).unwrap();
    assert!(s.is_setup_complete());
    assert_eq!(
        s.place_custom(8, 8, 1, Orientation::Horizontal),
        Err(GameError::SetupComplete)
    );
}

#[test]
fn test_opponent_standard_fleet_deployed_once() {
    let mut s = session(4);
    s.setup_opponent_standard_fleet().unwrap();
    let fleet = s.board(Side::Opponent).vessels();
    assert_eq!(fleet.len(), STANDARD_FLEET.len());
    for (v, kind) in fleet.iter().zip(STANDARD_FLEET) {
        assert_eq!(v.len(), kind.length());
    }
    assert_eq!(
        s.setup_opponent_standard_fleet(),
        Err(GameError::FleetAlreadyDeployed)
    );
}

#[test]
fn test_opponent_custom_fleet_within_bounds() {
    for seed in 0..20 {
        let mut s = session(seed);
        let count = s.setup_opponent_custom_fleet().unwrap();
        assert!((1..=MAX_CUSTOM_FLEET).contains(&count));
        let fleet = s.board(Side::Opponent).vessels();
        assert_eq!(fleet.len(), count);
        assert!(fleet.iter().all(|v| (1..=5).contains(&v.len())));
    }
}

#[test]
fn test_attacks_rejected_before_setup() {
    let mut s = session(5);
    assert_eq!(s.attack_opponent(1, 1), Err(GameError::SetupIncomplete));
    assert_eq!(s.opponent_auto_attack(), Err(GameError::SetupIncomplete));
}

#[test]
fn test_turns_alternate() {
    let mut s = session(6);
    place_standard_layout(&mut s);
    s.setup_opponent_standard_fleet().unwrap();

    assert_eq!(s.turn(), Side::Human);
    assert_eq!(s.opponent_auto_attack(), Err(GameError::OutOfTurn));
    s.attack_opponent(5, 5).unwrap();
    assert_eq!(s.turn(), Side::Opponent);
    assert_eq!(s.attack_opponent(6, 6), Err(GameError::OutOfTurn));

    let shot = s.opponent_auto_attack().unwrap();
    assert_eq!(s.last_opponent_attack().map(|(c, _)| c), Some(shot));
    let hit = s.snapshot(Side::Human)[(shot.y - 1) as usize][(shot.x - 1) as usize]
        != CellState::Water;
    assert_eq!(s.last_opponent_attack_hit(), hit);
    assert_eq!(s.turn(), Side::Human);
}

#[test]
fn test_human_attack_validation() {
    let mut s = session(7);
    place_standard_layout(&mut s);
    s.setup_opponent_standard_fleet().unwrap();

    assert_eq!(
        s.attack_opponent(0, 5),
        Err(GameError::OutOfBounds(Coordinate::new(0, 5)))
    );
    assert_eq!(
        s.attack_opponent(5, 11),
        Err(GameError::OutOfBounds(Coordinate::new(5, 11)))
    );
    assert_eq!(s.turn(), Side::Human);

    let target = s.board(Side::Opponent).vessels()[5].origin();
    assert_eq!(s.attack_opponent(target.x, target.y), Ok(AttackResult::Hit));
    assert!(s.is_already_attacked(target.x, target.y));
    s.opponent_auto_attack().unwrap();
    assert_eq!(
        s.attack_opponent(target.x, target.y),
        Err(GameError::AlreadyAttacked(target))
    );
    assert_eq!(s.turn(), Side::Human);
}

#[test]
fn test_human_victory_ends_game() {
    let mut s = session(8);
    place_standard_layout(&mut s);
    s.setup_opponent_standard_fleet().unwrap();
    sink_opponent(&mut s);

    // The human's fleet needs 18 shots to sink; the machine fires fewer.
    assert!(s.is_game_over());
    assert_eq!(s.winner(), Some(Side::Human));
    assert_eq!(s.winner_name(), Some("Human"));
    assert_eq!(s.status(), GameStatus::Won);
    assert!(s
        .snapshot(Side::Opponent)
        .iter()
        .flatten()
        .all(|&c| c != CellState::Occupied && c != CellState::Hit));
    assert_eq!(s.attack_opponent(1, 1), Err(GameError::GameOver));
    assert_eq!(s.opponent_auto_attack(), Err(GameError::GameOver));
}

#[test]
fn test_machine_victory() {
    let mut s = session(9);
    s.prepare_custom_setup(1).unwrap();
    s.place_custom(5, 5, 1, Orientation::Horizontal).unwrap();
    s.setup_opponent_standard_fleet().unwrap();

    let mut rounds = 0;
    while !s.is_game_over() {
        rounds += 1;
        assert!(rounds <= 5000, "machine never found a one-cell fleet");
        // Water shots keep the opponent fleet intact.
        let miss = (1..=10)
            .flat_map(|y| (1..=10).map(move |x| (x, y)))
            .find(|&(x, y)| {
                s.board(Side::Opponent).cell(Coordinate::new(x, y)) == Some(CellState::Water)
            })
            .unwrap();
        assert_eq!(s.attack_opponent(miss.0, miss.1), Ok(AttackResult::Miss));
        s.opponent_auto_attack().unwrap();
    }
    assert_eq!(s.winner(), Some(Side::Opponent));
    assert_eq!(s.winner_name(), Some("Machine"));
    assert_eq!(s.status(), GameStatus::Lost);
    assert_eq!(
        s.last_opponent_attack(),
        Some((Coordinate::new(5, 5), AttackResult::Sunk(VesselKind::Custom)))
    );
    assert!(s.last_opponent_attack_hit());
}

#[test]
fn test_same_seed_replays_same_match() {
    let run = |seed| {
        let mut s = session(seed);
        place_standard_layout(&mut s);
        s.setup_opponent_standard_fleet().unwrap();
        let mut shots = Vec::new();
        for i in 0..10 {
            s.attack_opponent(1 + i % 10, 10).unwrap();
            shots.push(s.opponent_auto_attack().unwrap());
        }
        (s.snapshot(Side::Opponent), shots)
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn test_extreme_origins_are_rejected_without_advancing() {
    let mut s = session(10);
    s.prepare_standard_setup().unwrap();
    assert_eq!(
        s.place_standard(i32::MIN, 1),
        Err(GameError::OutOfBounds(Coordinate::new(i32::MIN, 1)))
    );
    s.place_standard(1, 1).unwrap();
    // Hospital ship runs vertically past the integer range.
    assert_eq!(
        s.place_standard(1, i32::MAX),
        Err(GameError::OutOfBounds(Coordinate::new(1, i32::MAX)))
    );
    assert_eq!(s.placed_count(), 1);
    assert_eq!(s.board(Side::Human).vessels().len(), 1);

    let mut s = session(11);
    s.prepare_custom_setup(1).unwrap();
    assert_eq!(
        s.place_custom(i32::MAX, 4, 3, Orientation::Horizontal),
        Err(GameError::OutOfBounds(Coordinate::new(i32::MAX, 4)))
    );
    assert_eq!(s.placed_count(), 0);
}

#[test]
fn test_setup_cannot_be_reopened_during_a_match() {
    let mut s = session(12);
    place_standard_layout(&mut s);
    s.setup_opponent_standard_fleet().unwrap();
    s.attack_opponent(10, 10).unwrap();
    s.opponent_auto_attack().unwrap();

    assert_eq!(s.prepare_standard_setup(), Err(GameError::SetupComplete));
    assert_eq!(s.prepare_custom_setup(3), Err(GameError::SetupComplete));
    assert_eq!(s.place_standard(10, 10), Err(GameError::SetupComplete));
    assert_eq!(s.board(Side::Human).vessels().len(), STANDARD_FLEET.len());
    assert_eq!(s.mode(), GameMode::Standard);
    assert_eq!(s.turn(), Side::Human);
    assert!(s.attack_opponent(9, 9).is_ok());
}

#[test]
fn test_setup_mode_fixed_once_placement_starts() {
    let mut s = session(13);
    // Switching before any vessel is placed is allowed.
    s.prepare_custom_setup(2).unwrap();
    s.prepare_standard_setup().unwrap();
    assert_eq!(s.mode(), GameMode::Standard);

    s.place_standard(1, 1).unwrap();
    assert_eq!(s.prepare_standard_setup(), Err(GameError::SetupStarted));
    assert_eq!(s.prepare_custom_setup(2), Err(GameError::SetupStarted));
    assert_eq!(s.placed_count(), 1);
    assert_eq!(
        s.current_placement_prompt(),
        Some(PlacementPrompt::Standard(StandardKind::HospitalShip))
    );
}
