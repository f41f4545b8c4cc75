//! A single delivery and its classification.

/// How a delivery finished relative to its rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotKind {
    Normal,
    /// Full rack cleared with the first ball.
    Strike,
    /// Rack cleared with the second ball.
    Spare,
}

/// One delivery: pins knocked down and its classification. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pins: u32,
    kind: ShotKind,
}

impl Shot {
    pub const fn new(pins: u32, kind: ShotKind) -> Self {
        Self { pins, kind }
    }

    /// Pins knocked down.
    pub fn pins(&self) -> u32 {
        self.pins
    }

    pub fn kind(&self) -> ShotKind {
        self.kind
    }

    pub fn is_strike(&self) -> bool {
        self.kind == ShotKind::Strike
    }

    pub fn is_spare(&self) -> bool {
        self.kind == ShotKind::Spare
    }

    /// Strikes and spares re-rack the pins.
    pub fn clears_rack(&self) -> bool {
        self.kind != ShotKind::Normal
    }
}
