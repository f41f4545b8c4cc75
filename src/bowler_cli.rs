#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    bowler::Bowler,
    common::{GameError, NotationError},
    game::Game,
    notation::{parse_delivery, tokenize},
    shot::Shot,
    ui::render_scorecard,
};

/// Interactive bowler reading deliveries from a terminal.
///
/// Unreadable input and rejected deliveries are reported and asked for
/// again; end of input ends the session.
pub struct CliBowler<R, W> {
    input: R,
    output: W,
}

impl CliBowler<StdinLock<'static>, Stdout> {
    pub fn new() -> Self {
        Self::from_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for CliBowler<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CliBowler<R, W> {
    pub fn from_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the bowler, returning everything written to `output`.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, game: &Game) -> io::Result<Option<String>> {
        let frame = game.next_frame_position().unwrap_or_default();
        let rack = game.next_rack();
        write!(
            self.output,
            "Frame {} ({} standing) - pins knocked down: ",
            frame, rack.standing
        )?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    fn say(&mut self, message: core::fmt::Arguments<'_>) {
        // terminal output is best effort
        let _ = writeln!(self.output, "{}", message);
    }
}

impl<R: BufRead, W: Write> Bowler for CliBowler<R, W> {
    fn next_delivery(
        &mut self,
        _rng: &mut SmallRng,
        game: &Game,
    ) -> Result<Option<u32>, NotationError> {
        loop {
            let line = match self.prompt(game) {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(None),
                Err(e) => {
                    log::warn!("Reading delivery failed, ending input: {}", e);
                    return Ok(None);
                }
            };
            let tokens = tokenize(&line);
            let token = match tokens.as_slice() {
                [token] => *token,
                [] => {
                    self.say(format_args!("INVALID INPUT: {}", NotationError::Empty));
                    continue;
                }
                _ => {
                    self.say(format_args!("INVALID INPUT: enter one delivery at a time"));
                    continue;
                }
            };
            match parse_delivery(token, game.next_rack()) {
                Ok(pins) => return Ok(Some(pins)),
                Err(e) => self.say(format_args!("INVALID INPUT: {}", e)),
            }
        }
    }

    fn handle_rejection(&mut self, error: &GameError) -> bool {
        self.say(format_args!("INVALID INPUT: {}", error));
        !matches!(error, GameError::GameFinished)
    }

    fn handle_delivery(&mut self, _shot: Shot, game: &Game) {
        let card = render_scorecard(game);
        self.say(format_args!("{}", card));
    }
}
