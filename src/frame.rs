//! Frame state machine: validates deliveries, classifies shots and decides
//! when a frame is complete.
//!
//! Each frame tracks the pins still standing in the current rack. The rack is
//! refilled at the start of the frame and after every strike or spare, which
//! is what lets the last frame take bonus deliveries.

use alloc::vec::Vec;

use crate::common::FrameError;
use crate::config::MAX_SHOTS_PER_FRAME;
use crate::shot::{Shot, ShotKind};

/// Which completion rules a frame follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameRole {
    Normal,
    /// Final frame, may take a third (bonus) delivery.
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameState {
    Building,
    Complete,
}

/// Pins facing the next delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rack {
    pub standing: u32,
    /// `true` when the next ball is the first one on a full rack.
    pub fresh: bool,
}

/// Result of a successful `Frame::submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotOutcome {
    pub shot: Shot,
    pub frame_completed: bool,
}

/// One frame of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    position: usize,
    role: FrameRole,
    pins_per_frame: u32,
    pins_standing: u32,
    shots: Vec<Shot>,
    state: FrameState,
}

impl Frame {
    /// Create an empty frame at 1-based `position` with a full rack.
    pub fn new(position: usize, role: FrameRole, pins_per_frame: u32) -> Self {
        Self {
            position,
            role,
            pins_per_frame,
            pins_standing: pins_per_frame,
            shots: Vec::with_capacity(MAX_SHOTS_PER_FRAME),
            state: FrameState::Building,
        }
    }

    /// 1-based frame number.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn role(&self) -> FrameRole {
        self.role
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == FrameState::Complete
    }

    pub fn is_last(&self) -> bool {
        self.role == FrameRole::Last
    }

    /// Shots delivered so far, in order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Sum of pins over every shot in the frame.
    pub fn total_pins(&self) -> u32 {
        self.shots
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.pins()))
    }

    pub fn pins_per_frame(&self) -> u32 {
        self.pins_per_frame
    }

    pub fn pins_standing(&self) -> u32 {
        self.pins_standing
    }

    /// Rack the next delivery in this frame would face.
    pub fn rack(&self) -> Rack {
        Rack {
            standing: self.pins_standing,
            fresh: self.shots.last().map_or(true, Shot::clears_rack),
        }
    }

    /// Whether the frame earned bonus deliveries (last frame only).
    pub fn has_bonus(&self) -> bool {
        match self.shots.as_slice() {
            [first, ..] if first.is_strike() => true,
            [_, second, ..] => second.is_spare(),
            _ => false,
        }
    }

    /// Add a delivery. On error the frame is left untouched.
    pub fn submit(&mut self, pins: u32) -> Result<ShotOutcome, FrameError> {
        if pins > self.pins_per_frame {
            return Err(FrameError::InvalidPinCount {
                pins,
                max: self.pins_per_frame,
            });
        }
        if self.is_complete() {
            return Err(FrameError::FrameAlreadyComplete);
        }
        if pins > self.pins_standing {
            return Err(FrameError::ExceedsRemainingPins {
                pins,
                standing: self.pins_standing,
            });
        }

        let shot = Shot::new(pins, self.classify(pins));
        self.shots.push(shot);
        self.pins_standing = if shot.clears_rack() {
            self.pins_per_frame
        } else {
            self.pins_standing - pins
        };

        let frame_completed = self.completion_reached();
        if frame_completed {
            self.state = FrameState::Complete;
        }
        Ok(ShotOutcome {
            shot,
            frame_completed,
        })
    }

    fn classify(&self, pins: u32) -> ShotKind {
        // the bonus ball of the last frame only counts its face value
        if self.is_last() && self.shots.len() == MAX_SHOTS_PER_FRAME - 1 {
            return ShotKind::Normal;
        }
        let rack = self.rack();
        if rack.fresh && pins == self.pins_per_frame {
            ShotKind::Strike
        } else if !rack.fresh && pins == rack.standing {
            ShotKind::Spare
        } else {
            ShotKind::Normal
        }
    }

    fn completion_reached(&self) -> bool {
        let count = self.shots.len();
        match self.role {
            FrameRole::Normal => count == 2 || self.shots[0].is_strike(),
            FrameRole::Last if self.has_bonus() => count == MAX_SHOTS_PER_FRAME,
            FrameRole::Last => count == 2,
        }
    }
}
