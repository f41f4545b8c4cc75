//! Game configuration: frame count, pins per rack and the canonical defaults.

use crate::common::ConfigError;

/// Frames in a standard game.
pub const DEFAULT_TOTAL_FRAMES: usize = 10;
/// Deliveries in a normal (non-final) frame.
pub const DEFAULT_BOWLS_PER_FRAME: u32 = 2;
/// Pins racked at the start of a frame and after every strike or spare.
pub const DEFAULT_PINS_PER_FRAME: u32 = 10;
/// Upper bound on shots in any frame (the last frame with a bonus).
pub const MAX_SHOTS_PER_FRAME: usize = 3;
/// Largest game a `GameConfig` may describe.
pub const MAX_TOTAL_FRAMES: usize = 1000;

/// Rules for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub total_frames: usize,
    /// Informational; frame rules always allow two balls per rack.
    pub bowls_per_normal_frame: u32,
    pub total_pins_per_frame: u32,
}

impl GameConfig {
    /// Ten frames, ten pins.
    pub const STANDARD: GameConfig = GameConfig {
        total_frames: DEFAULT_TOTAL_FRAMES,
        bowls_per_normal_frame: DEFAULT_BOWLS_PER_FRAME,
        total_pins_per_frame: DEFAULT_PINS_PER_FRAME,
    };

    /// Check that every count is at least one and that the best possible
    /// score (three racks per frame) fits in a `u32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.total_frames > MAX_TOTAL_FRAMES {
            return Err(ConfigError::TooManyFrames {
                frames: self.total_frames,
                max: MAX_TOTAL_FRAMES,
            });
        }
        if self.total_pins_per_frame == 0 {
            return Err(ConfigError::NoPins);
        }
        if self.max_score() > u64::from(u32::MAX) {
            return Err(ConfigError::TooManyPins {
                pins: self.total_pins_per_frame,
            });
        }
        if self.bowls_per_normal_frame == 0 {
            return Err(ConfigError::NoBowls);
        }
        Ok(())
    }

    /// Score of a perfect game under these rules.
    pub fn max_score(&self) -> u64 {
        u64::from(self.total_pins_per_frame)
            * MAX_SHOTS_PER_FRAME as u64
            * self.total_frames as u64
    }

    /// Parse a JSON document; missing fields fall back to the standard game.
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
