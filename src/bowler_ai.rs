use alloc::string::String;
use alloc::vec::Vec;

use rand::{rngs::SmallRng, Rng};

use crate::{
    bowler::Bowler,
    common::NotationError,
    game::Game,
    notation::parse_delivery,
};

/// Random bowler: clears the rack with probability `accuracy`, otherwise
/// knocks down a uniform number of the standing pins.
#[derive(Debug, Clone, Copy)]
pub struct AiBowler {
    accuracy: f64,
}

impl AiBowler {
    pub const DEFAULT_ACCURACY: f64 = 0.3;

    pub fn new() -> Self {
        Self::with_accuracy(Self::DEFAULT_ACCURACY)
    }

    /// `accuracy` is clamped to `0.0..=1.0`.
    pub fn with_accuracy(accuracy: f64) -> Self {
        let accuracy = if accuracy.is_nan() {
            0.0
        } else {
            accuracy.clamp(0.0, 1.0)
        };
        Self { accuracy }
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl Default for AiBowler {
    fn default() -> Self {
        Self::new()
    }
}

impl Bowler for AiBowler {
    fn next_delivery(
        &mut self,
        rng: &mut SmallRng,
        game: &Game,
    ) -> Result<Option<u32>, NotationError> {
        if game.is_finished() {
            return Ok(None);
        }
        let standing = game.next_rack().standing;
        if rng.random_bool(self.accuracy) {
            Ok(Some(standing))
        } else {
            Ok(Some(rng.random_range(0..=standing)))
        }
    }
}

/// Replays a fixed list of notation tokens, one per delivery.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBowler {
    tokens: Vec<String>,
    next: usize,
}

impl ScriptedBowler {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// Tokens not yet delivered.
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.next..]
    }
}

impl Bowler for ScriptedBowler {
    fn next_delivery(
        &mut self,
        _rng: &mut SmallRng,
        game: &Game,
    ) -> Result<Option<u32>, NotationError> {
        let Some(token) = self.tokens.get(self.next) else {
            return Ok(None);
        };
        let pins = parse_delivery(token, game.next_rack())?;
        self.next += 1;
        Ok(Some(pins))
    }
}
