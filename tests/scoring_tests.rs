use bowling::{scoring, Frame, FrameRole, FrameScore, Game};

fn game_of(deliveries: &[u32]) -> Game {
    let mut game = Game::default();
    for &pins in deliveries {
        game.record_delivery(pins).unwrap();
    }
    game
}

#[test]
fn test_single_spare_bonus_arrives_later() {
    let mut game = game_of(&[5, 5]);
    assert_eq!(game.cumulative_scores(), vec![10]);
    game.record_delivery(3).unwrap();
    assert_eq!(game.cumulative_scores(), vec![13, 16]);

    let game = game_of(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert!(game.is_finished());
    assert_eq!(game.final_score(), 10);
}

#[test]
fn test_strike_bonus_spans_two_frames() {
    let game = game_of(&[10, 10, 3, 4]);
    assert_eq!(game.cumulative_scores(), vec![23, 40, 47]);
}

#[test]
fn test_ninth_frame_bonuses_come_from_last_frame() {
    let mut deliveries = vec![0; 16];
    deliveries.extend([10, 3, 4]);
    let game = game_of(&deliveries);
    assert!(game.is_finished());
    assert_eq!(game.final_score(), 24);

    let mut deliveries = vec![0; 16];
    deliveries.extend([5, 5, 7, 2]);
    let game = game_of(&deliveries);
    assert_eq!(game.cumulative_scores()[8], 17);
    assert_eq!(game.final_score(), 26);

    let mut deliveries = vec![0; 16];
    deliveries.extend([10, 10, 3, 7]);
    let game = game_of(&deliveries);
    assert_eq!(game.cumulative_scores()[8], 23);
    assert_eq!(game.final_score(), 43);
}

#[test]
fn test_last_frame_counts_face_value() {
    let mut deliveries = vec![0; 18];
    deliveries.extend([10, 3, 7]);
    assert_eq!(game_of(&deliveries).final_score(), 20);

    let mut deliveries = vec![0; 18];
    deliveries.extend([5, 5, 10]);
    assert_eq!(game_of(&deliveries).final_score(), 20);
}

#[test]
fn test_sample_game() {
    let game = game_of(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]);
    assert!(game.is_finished());
    assert_eq!(
        game.cumulative_scores(),
        vec![20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
    );
    assert_eq!(game.final_score(), 167);
}

#[test]
fn test_all_spares_and_all_nines() {
    let mut deliveries = Vec::new();
    for _ in 0..10 {
        deliveries.extend([5, 5]);
    }
    deliveries.push(5);
    assert_eq!(game_of(&deliveries).final_score(), 150);

    let mut deliveries = Vec::new();
    for _ in 0..10 {
        deliveries.extend([9, 0]);
    }
    assert_eq!(game_of(&deliveries).final_score(), 90);
}

#[test]
fn test_scores_are_read_only() {
    let game = game_of(&[10, 7, 3, 9]);
    let first = game.cumulative_scores();
    let second = game.cumulative_scores();
    assert_eq!(first, second);
    assert_eq!(game.final_score(), *first.last().unwrap());
}

#[test]
fn test_pending_bonus_is_not_settled() {
    let game = game_of(&[10]);
    assert_eq!(
        game.frame_scores(),
        vec![FrameScore {
            running_total: 10,
            settled: false
        }]
    );

    let game = game_of(&[10, 3]);
    let scores = game.frame_scores();
    assert_eq!(scores[0].running_total, 13);
    assert!(!scores[0].settled);
    assert!(!scores[1].settled);

    let game = game_of(&[10, 3, 4]);
    assert!(game.frame_scores().iter().all(|s| s.settled));
    assert_eq!(game.cumulative_scores(), vec![17, 24]);
}

#[test]
fn test_shot_scores() {
    let game = game_of(&[10, 7, 3]);
    assert_eq!(scoring::shot_scores(game.frames()), vec![20, 7, 3]);
    let game = game_of(&[10, 7, 3, 9]);
    assert_eq!(scoring::shot_scores(game.frames()), vec![20, 7, 12, 9]);
}

#[test]
fn test_empty_history() {
    assert!(scoring::cumulative_scores(&[]).is_empty());
    assert_eq!(scoring::final_score(&[]), 0);
}

#[test]
fn test_huge_racks_saturate() {
    let mut frames = vec![
        Frame::new(1, FrameRole::Normal, u32::MAX),
        Frame::new(2, FrameRole::Normal, u32::MAX),
        Frame::new(3, FrameRole::Last, u32::MAX),
    ];
    frames[0].submit(u32::MAX).unwrap();
    frames[1].submit(u32::MAX).unwrap();
    for _ in 0..3 {
        frames[2].submit(u32::MAX).unwrap();
    }
    assert_eq!(frames[2].total_pins(), u32::MAX);
    assert_eq!(scoring::shot_scores(&frames)[0], u32::MAX);
    assert_eq!(scoring::cumulative_scores(&frames), vec![u32::MAX; 3]);
    assert_eq!(scoring::final_score(&frames), u32::MAX);
}
