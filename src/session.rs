#![cfg(feature = "std")]

use alloc::boxed::Box;
use anyhow::Context;
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    bowler::Bowler,
    game::{Game, GameStatus},
    notation::format_frame,
};

/// Drives one game: asks a bowler for deliveries and feeds them to the engine.
///
/// The engine itself stays silent; logging and retry decisions live here.
pub struct GameSession {
    bowler: Box<dyn Bowler>,
    game: Game,
}

impl GameSession {
    pub fn new(game: Game, bowler: Box<dyn Bowler>) -> Self {
        Self { bowler, game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Play until the game finishes or the bowler runs out of input.
    ///
    /// Returns `InProgress` when input ended early. A rejected delivery the
    /// bowler does not want to retry ends the session with an error.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameStatus> {
        while !self.game.is_finished() {
            let frame_number = self.game.next_frame_position().unwrap_or_default();
            let Some(pins) = self
                .bowler
                .next_delivery(rng, &self.game)
                .with_context(|| format!("reading delivery for frame {}", frame_number))?
            else {
                info!(
                    "Input ended in frame {} with score {}",
                    frame_number,
                    self.game.final_score()
                );
                return Ok(GameStatus::InProgress);
            };

            if let Err(e) = self.game.record_delivery(pins) {
                warn!("Frame {}: rejected delivery of {} pins: {}", frame_number, pins, e);
                if self.bowler.handle_rejection(&e) {
                    continue;
                }
                return Err(anyhow::Error::new(e)
                    .context(format!("delivery of {} pins in frame {}", pins, frame_number)));
            }

            if let Some(shot) = self.game.last_shot() {
                debug!("Frame {}: {} pins ({:?})", frame_number, shot.pins(), shot.kind());
                self.bowler.handle_delivery(shot, &self.game);
            }
            if let Some(frame) = self.game.current_frame().filter(|f| f.is_complete()) {
                info!(
                    "Frame {} complete: {} (running total {})",
                    frame.position(),
                    format_frame(frame),
                    self.game.final_score()
                );
            }
        }
        info!("Game finished with score {}", self.game.final_score());
        Ok(GameStatus::Finished)
    }
}
