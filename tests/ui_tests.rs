use bowling::{render_scorecard, Game, GameReport};

fn game_of(deliveries: &[u32]) -> Game {
    let mut game = Game::default();
    for &pins in deliveries {
        game.record_delivery(pins).unwrap();
    }
    game
}

const SAMPLE: [u32; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

#[test]
fn test_scorecard_for_finished_game() {
    let card = render_scorecard(&game_of(&SAMPLE));
    let lines: Vec<&str> = card.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Frame |"));
    for mark in ["X", "7/", "9-", "-8", "8/", "-6", "X81"] {
        assert!(lines[1].contains(mark), "missing {} in {}", mark, lines[1]);
    }
    assert!(lines[2].contains("148"));
    assert!(lines[2].contains("167"));
    assert_eq!(lines[3], "FINAL SCORE: 167");
}

#[test]
fn test_scorecard_hides_unsettled_totals() {
    let card = render_scorecard(&game_of(&[10]));
    let lines: Vec<&str> = card.lines().collect();
    assert!(!lines[2].chars().any(|c| c.is_ascii_digit()));
    assert_eq!(lines[3], "CURRENT SCORE: 10");
}

#[test]
fn test_report_from_game() {
    let report = GameReport::from_game(&game_of(&SAMPLE));
    assert!(report.finished);
    assert_eq!(report.final_score, 167);
    assert_eq!(report.frames.len(), 10);
    assert_eq!(report.frames[1].notation, "7/");
    assert_eq!(report.frames[1].pins, vec![7, 3]);
    assert_eq!(report.frames[1].running_total, 39);
    assert!(report.frames.iter().all(|f| f.settled));

    let json = serde_json::to_string(&report).unwrap();
    let decoded: GameReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
}
