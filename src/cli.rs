#![cfg(feature = "std")]

//! Interactive console: menu, fleet placement prompts, turn loop and board
//! rendering. Works over any `BufRead`/`Write` pair so it can be scripted.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{CellState, Grid},
    common::{AttackResult, GameError},
    config::{BOARD_SIZE, MAX_CUSTOM_FLEET, MAX_VESSEL_LENGTH},
    game::{GameMode, GameSession, Side},
    stats::Statistics,
    vessel::Orientation,
};

/// Render a grid as text. With `reveal == false` intact vessel segments are
/// drawn as water, which is how the opponent's board must be shown.
pub fn render_board(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("      ");
    for x in 1..=BOARD_SIZE {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');
    for (y, row) in grid.iter().enumerate() {
        let _ = write!(out, "  {:>3} ", y + 1);
        for &cell in row {
            let cell = if reveal { cell } else { cell.concealed() };
            let _ = write!(out, "{:>3}", cell_char(cell));
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("  Legend: S=Vessel  X=Hit  #=Sunk  .=Water\n");
    } else {
        out.push_str("  Legend: X=Hit  #=Sunk  .=Unknown\n");
    }
    out
}

fn cell_char(cell: CellState) -> char {
    match cell {
        CellState::Water => '.',
        CellState::Occupied => 'S',
        CellState::Hit => 'X',
        CellState::Sunk => '#',
    }
}

/// Parse an orientation answer: `V`/`v` is vertical, anything else horizontal.
pub fn parse_orientation(input: &str) -> Orientation {
    if input.trim().eq_ignore_ascii_case("v") {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

pub struct Console<I, O> {
    input: I,
    output: O,
    rng: SmallRng,
    stats: Statistics,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// `rng` seeds every match started from this console.
    pub fn new(input: I, output: O, rng: SmallRng) -> Self {
        Self {
            input,
            output,
            rng,
            stats: Statistics::new(),
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Main menu loop. Returns when the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "\nWelcome to Broadside")?;
            writeln!(self.output, "1) Standard game")?;
            writeln!(self.output, "2) Custom game")?;
            writeln!(self.output, "3) Show statistics")?;
            writeln!(self.output, "0) Quit")?;
            let Some(option) = self.prompt_number("Select an option: ")? else {
                return Ok(());
            };
            let finished = match option {
                1 => self.play(GameMode::Standard)?,
                2 => self.play(GameMode::Custom)?,
                3 => {
                    writeln!(self.output, "{}", self.stats)?;
                    true
                }
                0 => {
                    writeln!(self.output, "Thanks for playing.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    true
                }
            };
            if !finished {
                return Ok(());
            }
        }
    }

    /// Play one match. Returns `false` if input ran out mid-game.
    pub fn play(&mut self, mode: GameMode) -> anyhow::Result<bool> {
        let mut session = GameSession::new(SmallRng::from_rng(&mut self.rng));
        let placed = match mode {
            GameMode::Standard => self.setup_standard(&mut session)?,
            GameMode::Custom => self.setup_custom(&mut session)?,
        };
        match placed {
            None => return Ok(false),
            Some(false) => return Ok(true),
            Some(true) => {}
        }

        writeln!(self.output, "\n------ THE BATTLE BEGINS ------")?;
        while !session.is_game_over() {
            if !self.human_turn(&mut session)? {
                return Ok(false);
            }
            if session.is_game_over() {
                break;
            }
            self.machine_turn(&mut session)?;
        }

        let winner = session.winner().unwrap_or(Side::Opponent);
        writeln!(self.output, "\n------ GAME OVER ------")?;
        writeln!(self.output, "The winner is: {}", winner.name())?;
        writeln!(self.output, "\nYour final board:")?;
        write!(self.output, "{}", render_board(&session.snapshot(Side::Human), true))?;
        writeln!(self.output, "\nMachine's final board:")?;
        write!(self.output, "{}", render_board(&session.snapshot(Side::Opponent), true))?;
        self.stats.record(mode, winner);
        log::info!("{:?} match won by {}", mode, winner.name());
        Ok(true)
    }

    /// `Some(true)` when both fleets are deployed, `Some(false)` when the
    /// match was abandoned, `None` when input ended.
    fn setup_standard(&mut self, session: &mut GameSession<SmallRng>) -> anyhow::Result<Option<bool>> {
        writeln!(self.output, "\n------ STANDARD SETUP ------")?;
        writeln!(self.output, "Place your vessels on the board.")?;
        session.prepare_standard_setup()?;
        while let Some(prompt) = session.current_placement_prompt() {
            writeln!(self.output, "\n{}", prompt)?;
            let Some((x, y)) = self.prompt_coordinate()? else {
                return Ok(None);
            };
            match session.place_standard(x, y) {
                Ok(()) => self.placement_ok(session)?,
                Err(e) => writeln!(self.output, "Invalid position ({}). Try again.", e)?,
            }
        }
        session.setup_opponent_standard_fleet()?;
        Ok(Some(true))
    }

    fn setup_custom(&mut self, session: &mut GameSession<SmallRng>) -> anyhow::Result<Option<bool>> {
        writeln!(self.output, "\n------ CUSTOM SETUP ------")?;
        let prompt = format!("Number of vessels (1-{}): ", MAX_CUSTOM_FLEET);
        let Some(count) = self.prompt_number(&prompt)? else {
            return Ok(None);
        };
        if let Err(e) = session.prepare_custom_setup(usize::try_from(count).unwrap_or(0)) {
            writeln!(self.output, "{}. Back to the menu.", e)?;
            return Ok(Some(false));
        }
        while let Some(prompt) = session.current_placement_prompt() {
            writeln!(self.output, "\n{}", prompt)?;
            let prompt = format!("Vessel length (1-{}): ", MAX_VESSEL_LENGTH);
            let Some(length) = self.prompt_number(&prompt)? else {
                return Ok(None);
            };
            let Some(orientation) = self.prompt_line("Orientation (H/V): ")? else {
                return Ok(None);
            };
            let Some((x, y)) = self.prompt_coordinate()? else {
                return Ok(None);
            };
            let length = usize::try_from(length).unwrap_or(0);
            match session.place_custom(x, y, length, parse_orientation(&orientation)) {
                Ok(()) => self.placement_ok(session)?,
                Err(e) => writeln!(self.output, "Invalid vessel ({}). Try again.", e)?,
            }
        }
        let count = session.setup_opponent_custom_fleet()?;
        writeln!(self.output, "\nThe machine deployed {} vessels.", count)?;
        Ok(Some(true))
    }

    fn placement_ok(&mut self, session: &GameSession<SmallRng>) -> anyhow::Result<()> {
        writeln!(self.output, "Vessel placed.")?;
        write!(self.output, "{}", render_board(&session.snapshot(Side::Human), true))?;
        Ok(())
    }

    /// Returns `false` if input ended before a valid shot was fired.
    fn human_turn(&mut self, session: &mut GameSession<SmallRng>) -> anyhow::Result<bool> {
        writeln!(self.output, "\n------ YOUR TURN ------")?;
        writeln!(self.output, "Machine's board:")?;
        write!(self.output, "{}", render_board(&session.snapshot(Side::Opponent), false))?;
        loop {
            let Some((x, y)) = self.prompt_coordinate()? else {
                return Ok(false);
            };
            match session.attack_opponent(x, y) {
                Ok(AttackResult::Sunk(kind)) => {
                    writeln!(self.output, "Hit! You sank the {}!", kind.name())?;
                }
                Ok(AttackResult::Hit) => writeln!(self.output, "Hit!")?,
                Ok(AttackResult::Miss) => writeln!(self.output, "Splash. Nothing there.")?,
                Err(GameError::OutOfBounds(_)) => {
                    writeln!(self.output, "That is outside the board. Try again.")?;
                    continue;
                }
                Err(GameError::AlreadyAttacked(_)) => {
                    writeln!(self.output, "You already hit that cell. Try again.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            return Ok(true);
        }
    }

    fn machine_turn(&mut self, session: &mut GameSession<SmallRng>) -> anyhow::Result<()> {
        writeln!(self.output, "\n------ MACHINE'S TURN ------")?;
        let coord = session.opponent_auto_attack()?;
        writeln!(self.output, "The machine fires at {}", coord)?;
        match session.last_opponent_attack() {
            Some((_, AttackResult::Sunk(kind))) => {
                writeln!(self.output, "The machine sank your {}!", kind.name())?
            }
            Some((_, AttackResult::Hit)) => writeln!(self.output, "The machine hit your vessel!")?,
            _ => writeln!(self.output, "The machine missed.")?,
        }
        writeln!(self.output, "\nYour board after the attack:")?;
        write!(self.output, "{}", render_board(&session.snapshot(Side::Human), true))?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until an integer is entered; `None` on end of input.
    fn prompt_number(&mut self, prompt: &str) -> anyhow::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    fn prompt_coordinate(&mut self) -> anyhow::Result<Option<(i32, i32)>> {
        let prompt = format!("Enter x coordinate (1-{}): ", BOARD_SIZE);
        let Some(x) = self.prompt_number(&prompt)? else {
            return Ok(None);
        };
        let prompt = format!("Enter y coordinate (1-{}): ", BOARD_SIZE);
        let Some(y) = self.prompt_number(&prompt)? else {
            return Ok(None);
        };
        Ok(Some((clamp_i32(x), clamp_i32(y))))
    }
}

fn clamp_i32(n: i64) -> i32 {
    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
