//! Scorecard notation: `x` for a strike, `/` for a spare, `-` for a miss.
//!
//! Parsing turns typed tokens into pin counts for the engine; the engine
//! never sees the symbols. Formatting goes the other way for display.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::NotationError;
use crate::frame::{Frame, Rack};

pub const STRIKE_CHARACTER: char = 'X';
pub const SPARE_CHARACTER: char = '/';
pub const MISS_CHARACTER: char = '-';

/// Translate one token into a pin count for a delivery facing `rack`.
///
/// Numbers are not range-checked here; the frame does that.
pub fn parse_delivery(token: &str, rack: Rack) -> Result<u32, NotationError> {
    let token = token.trim();
    match token {
        "" => Err(NotationError::Empty),
        "x" | "X" if rack.fresh => Ok(rack.standing),
        "x" | "X" => Err(NotationError::StrikeNotAllowed),
        "/" if rack.fresh => Err(NotationError::SpareNotAllowed),
        "/" => Ok(rack.standing),
        "-" => Ok(0),
        digits if digits.bytes().all(|b| b.is_ascii_digit()) => digits
            .parse()
            .map_err(|_| NotationError::InvalidToken(digits.to_string())),
        other => Err(NotationError::InvalidToken(other.to_string())),
    }
}

/// Split a line of deliveries into tokens.
///
/// Whitespace and commas separate words. Inside a word a run of digits is
/// one token and every other character is its own token, so `X7/9-` reads
/// as five tokens and `X10` as `X 10`.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
    {
        let mut digits_start = None;
        for (i, c) in word.char_indices() {
            if c.is_ascii_digit() {
                digits_start.get_or_insert(i);
                continue;
            }
            if let Some(start) = digits_start.take() {
                tokens.push(&word[start..i]);
            }
            tokens.push(&word[i..i + c.len_utf8()]);
        }
        if let Some(start) = digits_start {
            tokens.push(&word[start..]);
        }
    }
    tokens
}

/// Render a frame the way a scorecard shows it, e.g. `X`, `7/`, `9-`, `XX9`.
///
/// Racks are replayed from the pin counts so the last frame's bonus ball is
/// drawn as `X` or `/` when it cleared the pins.
pub fn format_frame(frame: &Frame) -> String {
    let total = frame.pins_per_frame();
    let mut rack = Rack {
        standing: total,
        fresh: true,
    };
    let mut out = String::new();
    for shot in frame.shots() {
        let pins = shot.pins();
        let cleared = pins == rack.standing && pins > 0;
        if cleared && rack.fresh {
            out.push(STRIKE_CHARACTER);
        } else if cleared {
            out.push(SPARE_CHARACTER);
        } else if pins == 0 {
            out.push(MISS_CHARACTER);
        } else {
            out.push_str(&pins.to_string());
        }
        rack = if cleared {
            Rack {
                standing: total,
                fresh: true,
            }
        } else {
            Rack {
                standing: rack.standing - pins,
                fresh: false,
            }
        };
    }
    out
}
