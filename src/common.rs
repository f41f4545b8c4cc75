//! Common error types for frames, games, configuration and delivery notation.

use alloc::string::String;

/// Errors returned when a delivery is submitted to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Pin count is larger than a full rack.
    InvalidPinCount { pins: u32, max: u32 },
    /// The frame has already taken all of its deliveries.
    FrameAlreadyComplete,
    /// More pins than are still standing in the current rack.
    ExceedsRemainingPins { pins: u32, standing: u32 },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::InvalidPinCount { pins, max } => {
                write!(f, "Invalid pin count {}: must be between 0 and {}", pins, max)
            }
            FrameError::FrameAlreadyComplete => write!(f, "Frame is already complete"),
            FrameError::ExceedsRemainingPins { pins, standing } => write!(
                f,
                "Cannot knock down {} pins when only {} are standing",
                pins, standing
            ),
        }
    }
}

/// Errors returned by `Game::record_delivery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Every frame has been bowled.
    GameFinished,
    /// The current frame rejected the delivery.
    InvalidDelivery(FrameError),
}

impl From<FrameError> for GameError {
    fn from(err: FrameError) -> Self {
        GameError::InvalidDelivery(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::GameFinished => write!(f, "Game is already finished"),
            GameError::InvalidDelivery(e) => write!(f, "Invalid delivery: {}", e),
        }
    }
}

/// Errors returned when validating a `GameConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NoFrames,
    NoPins,
    NoBowls,
    TooManyFrames { frames: usize, max: usize },
    /// A perfect game would not fit in a `u32` score.
    TooManyPins { pins: u32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoFrames => write!(f, "A game needs at least one frame"),
            ConfigError::NoPins => write!(f, "A rack needs at least one pin"),
            ConfigError::NoBowls => write!(f, "A frame needs at least one delivery"),
            ConfigError::TooManyFrames { frames, max } => {
                write!(f, "A game can have at most {} frames, got {}", max, frames)
            }
            ConfigError::TooManyPins { pins } => write!(
                f,
                "{} pins per rack is too many: the best score would overflow",
                pins
            ),
        }
    }
}

/// Errors returned when translating a typed delivery into a pin count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Nothing was entered.
    Empty,
    /// Token is neither a number nor one of `x`, `/`, `-`.
    InvalidToken(String),
    /// `x` used when the rack is not full.
    StrikeNotAllowed,
    /// `/` used on the first ball of a rack.
    SpareNotAllowed,
}

impl core::fmt::Display for NotationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NotationError::Empty => write!(f, "No delivery entered"),
            NotationError::InvalidToken(t) => {
                write!(f, "Invalid delivery '{}': enter a number, x, / or -", t)
            }
            NotationError::StrikeNotAllowed => {
                write!(f, "A strike is only possible on the first ball of a rack")
            }
            NotationError::SpareNotAllowed => {
                write!(f, "A spare is not possible on the first ball of a rack")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidDelivery(e) => Some(e),
            GameError::GameFinished => None,
        }
    }
}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for NotationError {}
