use super::*;
use othello_core::parse_move;

const EPS: f64 = 1e-9;

#[test]
fn test_opening_is_balanced() {
    let b = Board::startpos();
    assert!(evaluate(&b, Side::Dark).abs() < EPS);
    assert!(evaluate(&b, Side::Light).abs() < EPS);
}

#[test]
fn test_terms_after_d3() {
    let mut b = Board::startpos();
    assert!(b.apply_move(parse_move("d3").unwrap(), Side::Dark));

    let terms = Evaluator::default().terms(&b, Side::Dark);
    assert_eq!(
        terms,
        EvalTerms {
            material: 3,
            positional: -3,
            mobility: 0,
        }
    );
    assert!((evaluate(&b, Side::Dark) - 0.297).abs() < EPS);
}

#[test]
fn test_zero_sum() {
    let (b, _) = Board::replay(&["f5", "d6", "c3", "d3", "c4"]).unwrap();
    let dark = evaluate(&b, Side::Dark);
    let light = evaluate(&b, Side::Light);
    assert!((dark + light).abs() < EPS);
}

#[test]
fn test_corner_outweighs_x_square() {
    // Dark holds a1, Light sits on the diagonal neighbour b2.
    let mut b = Board::empty();
    b.set_piece(0, Some(Side::Dark));
    b.set_piece(9, Some(Side::Light));

    let terms = Evaluator::default().terms(&b, Side::Dark);
    assert_eq!(terms.material, 0);
    assert_eq!(terms.positional, 150);
    assert_eq!(terms.mobility, 1);
    assert!((evaluate(&b, Side::Dark) - 0.16).abs() < EPS);
}

#[test]
fn test_weights_are_configurable() {
    let (b, _) = Board::replay(&["d3"]).unwrap();
    let material_only = Evaluator::new(EvalWeights {
        material: 1.0,
        positional: 0.0,
        mobility: 0.0,
    });
    assert!((material_only.evaluate(&b, Side::Dark) - 3.0).abs() < EPS);

    let mobility_heavy = Evaluator::new(EvalWeights {
        material: 0.0,
        positional: 0.0,
        mobility: 10.0,
    });
    assert!(mobility_heavy.evaluate(&b, Side::Dark).abs() < EPS);
}

#[test]
fn test_evaluate_terminal_board_does_not_mutate() {
    let b = Board::from_diagram(&"XXXXXXXX/".repeat(8)).unwrap();
    let before = b.clone();
    assert!(b.is_terminal());
    assert!((evaluate(&b, Side::Dark) - (6.4 + 0.112)).abs() < 1e-6);
    assert_eq!(b, before);
}

#[test]
fn test_weights_deserialize_with_defaults() {
    let w: EvalWeights = serde_json::from_str(r#"{"material": 1.0}"#).unwrap();
    assert_eq!(w.material, 1.0);
    assert_eq!(w.mobility, 0.01);
    assert_eq!(w.positional, 0.001);
}
