#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod stats;
mod vessel;

pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_at, parse_level, DEFAULT_LEVEL, LOG_ENV};
pub use stats::*;
pub use vessel::*;
