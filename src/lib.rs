#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bowler;
mod bowler_ai;
#[cfg(feature = "std")]
mod bowler_cli;
mod common;
mod config;
mod frame;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod notation;
#[cfg(feature = "std")]
pub mod report;
pub mod scoring;
#[cfg(feature = "std")]
mod session;
mod shot;
#[cfg(feature = "std")]
pub mod ui;

pub mod prelude;

pub use bowler::*;
pub use bowler_ai::*;
#[cfg(feature = "std")]
pub use bowler_cli::*;
pub use common::*;
pub use config::*;
pub use frame::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV_VAR};
#[cfg(feature = "std")]
pub use report::{FrameReport, GameReport};
pub use scoring::FrameScore;
#[cfg(feature = "std")]
pub use session::*;
pub use shot::*;
#[cfg(feature = "std")]
pub use ui::{print_scorecard, render_scorecard};
