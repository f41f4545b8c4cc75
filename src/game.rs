use alloc::vec::Vec;

use crate::{
    common::{ConfigError, GameError},
    config::GameConfig,
    frame::{Frame, FrameRole, Rack},
    scoring::{self, FrameScore},
    shot::Shot,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Core game logic: owns the frames and drives frame creation.
///
/// Frames are never removed, so scoring can always look back over the whole
/// delivery history. Only `record_delivery` mutates a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    frames: Vec<Frame>,
}

impl Game {
    /// Create an empty game after validating `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            frames: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Record one delivery, opening the next frame first if needed.
    ///
    /// All-or-nothing: a rejected delivery leaves every frame unchanged, and a
    /// new frame is only kept once its first shot has been accepted.
    pub fn record_delivery(&mut self, pins: u32) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        let needs_frame = self.frames.last().map_or(true, Frame::is_complete);
        if needs_frame {
            let mut frame = self.open_frame();
            frame.submit(pins)?;
            self.frames.push(frame);
        } else if let Some(frame) = self.frames.last_mut() {
            frame.submit(pins)?;
        }
        Ok(())
    }

    fn open_frame(&self) -> Frame {
        let position = self.frames.len() + 1;
        let role = if position == self.config.total_frames {
            FrameRole::Last
        } else {
            FrameRole::Normal
        };
        Frame::new(position, role, self.config.total_pins_per_frame)
    }

    /// Frame currently being bowled, or the last one played.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Read-only view of every frame so far, in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Most recently recorded shot.
    pub fn last_shot(&self) -> Option<Shot> {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.shots().last().copied())
    }

    /// Total number of deliveries recorded.
    pub fn shot_count(&self) -> usize {
        self.frames.iter().map(|f| f.shots().len()).sum()
    }

    pub fn is_finished(&self) -> bool {
        self.frames.len() == self.config.total_frames
            && self.frames.last().is_some_and(Frame::is_complete)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_finished() {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Frame number the next delivery will go into, `None` once finished.
    pub fn next_frame_position(&self) -> Option<usize> {
        match self.frames.last() {
            _ if self.is_finished() => None,
            Some(frame) if !frame.is_complete() => Some(frame.position()),
            _ => Some(self.frames.len() + 1),
        }
    }

    /// Rack the next delivery will face.
    pub fn next_rack(&self) -> Rack {
        match self.frames.last() {
            Some(frame) if !frame.is_complete() => frame.rack(),
            _ => Rack {
                standing: self.config.total_pins_per_frame,
                fresh: true,
            },
        }
    }

    /// Running total through each frame.
    pub fn cumulative_scores(&self) -> Vec<u32> {
        scoring::cumulative_scores(&self.frames)
    }

    /// Running totals together with whether each is final.
    pub fn frame_scores(&self) -> Vec<FrameScore> {
        scoring::frame_scores(&self.frames)
    }

    /// Score so far; the final score once the game is finished.
    pub fn final_score(&self) -> u32 {
        scoring::final_score(&self.frames)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            config: GameConfig::STANDARD,
            frames: Vec::new(),
        }
    }
}
