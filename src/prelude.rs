//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiBowler, Bowler, Frame, FrameError, FrameRole, Game, GameConfig, GameError, GameStatus,
    ScriptedBowler, Shot, ShotKind,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_scorecard, CliBowler, GameReport, GameSession};
