//! Headless match: the human side is played by seeded random input.
//! Prints a JSON summary on stdout.

use broadside::{
    init_logging, Coordinate, GameMode, GameSession, Orientation, Side, BOARD_SIZE,
    MAX_CUSTOM_FLEET, MAX_VESSEL_LENGTH,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Rounds after which the simulation is abandoned.
const MAX_ROUNDS: usize = 100_000;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [standard|custom]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mode = match args.get(2).map(String::as_str) {
        None | Some("standard") => GameMode::Standard,
        Some("custom") => GameMode::Custom,
        Some(other) => anyhow::bail!("unknown mode {:?}", other),
    };

    let mut input = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(SmallRng::seed_from_u64(seed.wrapping_add(1)));

    match mode {
        GameMode::Standard => {
            session.prepare_standard_setup()?;
            while !session.is_setup_complete() {
                let c = random_cell(&mut input);
                let _ = session.place_standard(c.x, c.y);
            }
            session.setup_opponent_standard_fleet()?;
        }
        GameMode::Custom => {
            session.prepare_custom_setup(input.random_range(1..=MAX_CUSTOM_FLEET))?;
            while !session.is_setup_complete() {
                let c = random_cell(&mut input);
                let length = input.random_range(1..=MAX_VESSEL_LENGTH);
                let orientation = if input.random() {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                let _ = session.place_custom(c.x, c.y, length, orientation);
            }
            session.setup_opponent_custom_fleet()?;
        }
    }

    let mut human_shots = 0usize;
    let mut opponent_shots = 0usize;
    for _ in 0..MAX_ROUNDS {
        if session.is_game_over() {
            break;
        }
        let target = loop {
            let c = random_cell(&mut input);
            if !session.is_already_attacked(c.x, c.y) {
                break c;
            }
        };
        session.attack_opponent(target.x, target.y)?;
        human_shots += 1;
        if session.is_game_over() {
            break;
        }
        session.opponent_auto_attack()?;
        opponent_shots += 1;
    }

    let winner = session.winner().map(Side::name);
    let result = json!({
        "mode": mode,
        "seed": seed,
        "winner": winner,
        "human_shots": human_shots,
        "opponent_shots": opponent_shots,
        "opponent_fleet": session.board(Side::Opponent).vessels().len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn random_cell(rng: &mut SmallRng) -> Coordinate {
    let size = BOARD_SIZE as i32;
    Coordinate::new(rng.random_range(1..=size), rng.random_range(1..=size))
}
