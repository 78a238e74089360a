use super::*;

#[test]
fn test_parse_coordinates() {
    assert_eq!(parse_move("d3"), Ok(Move::at(2, 3).unwrap()));
    assert_eq!(parse_move("a1"), Ok(Move::Place(0)));
    assert_eq!(parse_move("h8"), Ok(Move::Place(63)));
    assert_eq!(parse_move(" E6 "), Ok(Move::at(5, 4).unwrap()));
}

#[test]
fn test_parse_pass() {
    assert_eq!(parse_move("pass"), Ok(Move::Pass));
    assert_eq!(parse_move("PASS"), Ok(Move::Pass));
}

#[test]
fn test_parse_rejects_bad_text() {
    assert_eq!(parse_move(""), Err(NotationError::Empty));
    assert_eq!(parse_move("   "), Err(NotationError::Empty));
    assert!(matches!(
        parse_move("d"),
        Err(NotationError::Malformed { .. })
    ));
    assert!(matches!(
        parse_move("3d"),
        Err(NotationError::Malformed { .. })
    ));
    assert!(matches!(
        parse_move("d10"),
        Err(NotationError::Malformed { .. })
    ));
    assert!(matches!(
        parse_move("i1"),
        Err(NotationError::OutOfRange { .. })
    ));
    assert!(matches!(
        parse_move("a9"),
        Err(NotationError::OutOfRange { .. })
    ));
    assert!(matches!(
        parse_move("a0"),
        Err(NotationError::OutOfRange { .. })
    ));
}

#[test]
fn test_move_text() {
    assert_eq!(move_to_text(Move::at(2, 3).unwrap()), "d3");
    assert_eq!(move_to_text(Move::Place(0)), "a1");
    assert_eq!(move_to_text(Move::Pass), "pass");
    assert_eq!(Move::at(7, 7).unwrap().to_string(), "h8");
}

#[test]
fn test_parse_moves_reports_index() {
    let ok = parse_moves(&["d3", "c3", "pass"]).unwrap();
    assert_eq!(ok.len(), 3);
    assert_eq!(ok[2], Move::Pass);

    let err = parse_moves(&["d3", "zz", "c3"]).unwrap_err();
    assert_eq!(err.0, 1);
}

#[test]
fn test_serde_uses_text() {
    let json = serde_json::to_string(&vec![Move::Place(19), Move::Pass]).unwrap();
    assert_eq!(json, r#"["d3","pass"]"#);
    let back: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![Move::Place(19), Move::Pass]);
    assert!(serde_json::from_str::<Move>(r#""q9""#).is_err());
}
