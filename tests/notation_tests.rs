use bowling::notation::{format_frame, parse_delivery, tokenize};
use bowling::{Frame, FrameRole, NotationError, Rack};

const FRESH: Rack = Rack {
    standing: 10,
    fresh: true,
};

fn frame_with(role: FrameRole, pins_per_frame: u32, deliveries: &[u32]) -> Frame {
    let mut frame = Frame::new(1, role, pins_per_frame);
    for &pins in deliveries {
        frame.submit(pins).unwrap();
    }
    frame
}

#[test]
fn test_parse_symbols() {
    let second_ball = Rack {
        standing: 3,
        fresh: false,
    };
    assert_eq!(parse_delivery("x", FRESH), Ok(10));
    assert_eq!(parse_delivery("X", FRESH), Ok(10));
    assert_eq!(parse_delivery("X", second_ball), Err(NotationError::StrikeNotAllowed));
    assert_eq!(parse_delivery("/", second_ball), Ok(3));
    assert_eq!(parse_delivery("/", FRESH), Err(NotationError::SpareNotAllowed));
    assert_eq!(parse_delivery("-", FRESH), Ok(0));
}

#[test]
fn test_parse_numbers() {
    assert_eq!(parse_delivery("7", FRESH), Ok(7));
    assert_eq!(parse_delivery(" 7\n", FRESH), Ok(7));
    // out of range numbers are left for the engine to reject
    assert_eq!(parse_delivery("12", FRESH), Ok(12));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_delivery("", FRESH), Err(NotationError::Empty));
    assert_eq!(parse_delivery("   ", FRESH), Err(NotationError::Empty));
    assert_eq!(
        parse_delivery("abc", FRESH),
        Err(NotationError::InvalidToken("abc".to_string()))
    );
    assert_eq!(
        parse_delivery("-3", FRESH),
        Err(NotationError::InvalidToken("-3".to_string()))
    );
    assert_eq!(
        parse_delivery("99999999999", FRESH),
        Err(NotationError::InvalidToken("99999999999".to_string()))
    );
}

#[test]
fn test_tokenize() {
    assert_eq!(
        tokenize("X 7/ 9-, 10 0"),
        vec!["X", "7", "/", "9", "-", "10", "0"]
    );
    assert_eq!(tokenize("X7/9-"), vec!["X", "7", "/", "9", "-"]);
    assert_eq!(tokenize("X10"), vec!["X", "10"]);
    assert_eq!(tokenize("12/x,7-"), vec!["12", "/", "x", "7", "-"]);
    assert!(tokenize("  ,, \n").is_empty());
}

#[test]
fn test_format_normal_frames() {
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 10, &[10])), "X");
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 10, &[7, 3])), "7/");
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 10, &[9, 0])), "9-");
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 10, &[0, 10])), "-/");
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 10, &[3])), "3");
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 10, &[])), "");
}

#[test]
fn test_format_last_frame() {
    assert_eq!(format_frame(&frame_with(FrameRole::Last, 10, &[10, 10, 10])), "XXX");
    assert_eq!(format_frame(&frame_with(FrameRole::Last, 10, &[10, 3, 7])), "X3/");
    assert_eq!(format_frame(&frame_with(FrameRole::Last, 10, &[5, 5, 10])), "5/X");
    assert_eq!(format_frame(&frame_with(FrameRole::Last, 10, &[3, 4])), "34");
}

#[test]
fn test_format_wide_rack() {
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 15, &[12, 3])), "12/");
    assert_eq!(format_frame(&frame_with(FrameRole::Normal, 15, &[15])), "X");
}
