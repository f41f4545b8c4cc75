#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{game::Game, notation::format_frame};

const CELL_WIDTH: usize = 5;

/// Scorecard as text: frame numbers, marks, and running totals.
///
/// Totals are only shown for settled frames, as on a real scorecard; a strike
/// or spare waiting for its bonus leaves its cell blank.
pub fn render_scorecard(game: &Game) -> String {
    let total_frames = game.config().total_frames;
    let frames = game.frames();
    let scores = game.frame_scores();

    let mut header = String::from("Frame |");
    let mut marks = String::from("Shots |");
    let mut totals = String::from("Score |");
    for i in 0..total_frames {
        let width = if i + 1 == total_frames {
            CELL_WIDTH + 2
        } else {
            CELL_WIDTH
        };
        let mark = frames.get(i).map(format_frame).unwrap_or_default();
        let total = match scores.get(i) {
            Some(s) if s.settled => s.running_total.to_string(),
            _ => String::new(),
        };
        let _ = write!(header, "{:^width$}|", i + 1, width = width);
        let _ = write!(marks, "{:^width$}|", mark, width = width);
        let _ = write!(totals, "{:^width$}|", total, width = width);
    }

    let label = if game.is_finished() {
        "FINAL SCORE"
    } else {
        "CURRENT SCORE"
    };
    format!(
        "{}\n{}\n{}\n{}: {}",
        header,
        marks,
        totals,
        label,
        game.final_score()
    )
}

/// Print the scorecard to stdout.
pub fn print_scorecard(game: &Game) {
    std::println!("{}", render_scorecard(game));
}
