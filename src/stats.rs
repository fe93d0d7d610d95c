//! Win counters kept across matches for the lifetime of the process.

use core::fmt;

use crate::game::{GameMode, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub human_wins: u32,
    pub machine_wins: u32,
}

impl Tally {
    pub fn games(&self) -> u32 {
        self.human_wins + self.machine_wins
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    standard: Tally,
    custom: Tally,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished match won by `winner`.
    pub fn record(&mut self, mode: GameMode, winner: Side) {
        let tally = match mode {
            GameMode::Standard => &mut self.standard,
            GameMode::Custom => &mut self.custom,
        };
        match winner {
            Side::Human => tally.human_wins += 1,
            Side::Opponent => tally.machine_wins += 1,
        }
    }

    pub fn tally(&self, mode: GameMode) -> Tally {
        match mode {
            GameMode::Standard => self.standard,
            GameMode::Custom => self.custom,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- STATISTICS ----")?;
        writeln!(
            f,
            "Standard - Human: {} | Machine: {}",
            self.standard.human_wins, self.standard.machine_wins
        )?;
        write!(
            f,
            "Custom   - Human: {} | Machine: {}",
            self.custom.human_wins, self.custom.machine_wins
        )
    }
}
