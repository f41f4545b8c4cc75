//! Scoring module - cumulative frame totals with strike and spare bonuses.
//!
//! All shots are flattened in delivery order and walked newest to oldest,
//! carrying the pins of the next two deliveries. A spare adds the next
//! delivery, a strike the next two, wherever those fall. Shots in the last
//! frame count face value only: its bonus balls already sit inside it.
//!
//! Sums saturate at `u32::MAX`; `GameConfig::validate` keeps real games below it.

use alloc::vec::Vec;

use crate::frame::Frame;
use crate::shot::ShotKind;

/// Running total through a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameScore {
    pub running_total: u32,
    /// Frame is complete and every bonus delivery it needs has been bowled.
    pub settled: bool,
}

/// Score of every shot including its bonus, in delivery order.
///
/// A bonus that has not been bowled yet counts as zero.
pub fn shot_scores(frames: &[Frame]) -> Vec<u32> {
    let shots: Vec<_> = frames
        .iter()
        .flat_map(|f| f.shots().iter().map(move |s| (*s, !f.is_last())))
        .collect();

    let mut scores = alloc::vec![0; shots.len()];
    let (mut prev, mut prev2): (u32, u32) = (0, 0);
    for (i, (shot, earns_bonus)) in shots.iter().enumerate().rev() {
        let bonus = match shot.kind() {
            _ if !earns_bonus => 0,
            ShotKind::Strike => prev.saturating_add(prev2),
            ShotKind::Spare => prev,
            ShotKind::Normal => 0,
        };
        scores[i] = shot.pins().saturating_add(bonus);
        prev2 = prev;
        prev = shot.pins();
    }
    scores
}

/// Running totals per frame, with whether each total can still change.
pub fn frame_scores(frames: &[Frame]) -> Vec<FrameScore> {
    let per_shot = shot_scores(frames);
    let total_shots = per_shot.len();

    let mut result = Vec::with_capacity(frames.len());
    let mut running_total = 0;
    let mut delivered = 0;
    for frame in frames {
        let count = frame.shots().len();
        running_total = per_shot[delivered..delivered + count]
            .iter()
            .fold(running_total, |acc: u32, s| acc.saturating_add(*s));
        delivered += count;

        let needed = match frame.shots().last() {
            _ if frame.is_last() => 0,
            Some(s) if s.is_strike() => 2,
            Some(s) if s.is_spare() => 1,
            _ => 0,
        };
        result.push(FrameScore {
            running_total,
            settled: frame.is_complete() && total_shots - delivered >= needed,
        });
    }
    result
}

/// Running total through each frame (classic scorecard row).
pub fn cumulative_scores(frames: &[Frame]) -> Vec<u32> {
    frame_scores(frames)
        .into_iter()
        .map(|s| s.running_total)
        .collect()
}

/// Last running total, or 0 before the first delivery.
pub fn final_score(frames: &[Frame]) -> u32 {
    cumulative_scores(frames).last().copied().unwrap_or(0)
}
