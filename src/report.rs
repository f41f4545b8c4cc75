#![cfg(feature = "std")]

//! Serializable summary of a game for batch tools and the `sim` binary.

use std::string::String;
use std::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::{game::Game, notation::format_frame};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub position: usize,
    pub notation: String,
    pub pins: Vec<u32>,
    pub running_total: u32,
    pub settled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub frames: Vec<FrameReport>,
    pub final_score: u32,
    pub finished: bool,
}

impl GameReport {
    pub fn from_game(game: &Game) -> Self {
        let frames = game
            .frames()
            .iter()
            .zip(game.frame_scores())
            .map(|(frame, score)| FrameReport {
                position: frame.position(),
                notation: format_frame(frame),
                pins: frame.shots().iter().map(|s| s.pins()).collect(),
                running_total: score.running_total,
                settled: score.settled,
            })
            .collect();
        Self {
            frames,
            final_score: game.final_score(),
            finished: game.is_finished(),
        }
    }
}
