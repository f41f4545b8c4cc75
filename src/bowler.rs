use crate::{
    common::{GameError, NotationError},
    game::Game,
    shot::Shot,
};
use rand::rngs::SmallRng;

/// Interface implemented by the different sources of deliveries.
///
/// A Bowler is responsible for:
/// - Producing the pin count of the next delivery
/// - Deciding whether to try again after the engine rejects a delivery
/// - Reacting to accepted deliveries (display, bookkeeping)
pub trait Bowler {
    /// Pin count for the next delivery, or `None` once input is exhausted.
    fn next_delivery(
        &mut self,
        rng: &mut SmallRng,
        game: &Game,
    ) -> Result<Option<u32>, NotationError>;

    /// Called when the game rejects a delivery. Return `true` to be asked again.
    fn handle_rejection(&mut self, _error: &GameError) -> bool {
        false
    }

    /// Called after a delivery has been recorded.
    fn handle_delivery(&mut self, _shot: Shot, _game: &Game) {}
}
