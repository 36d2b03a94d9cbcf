use dartforge_test::GOLDEN_CASES;

use super::*;

#[test]
fn test_golden_straight_out() {
    for case in GOLDEN_CASES {
        let got = calculate(case.score, case.limit, CheckoutType::StraightOut);
        assert_eq!(
            got.to_string(),
            case.expected(CheckoutType::StraightOut),
            "score {} limit {}",
            case.score,
            case.limit
        );
    }
}

#[test]
fn test_golden_double_out() {
    for case in GOLDEN_CASES {
        let got = calculate(case.score, case.limit, CheckoutType::DoubleOut);
        assert_eq!(
            got.to_string(),
            case.expected(CheckoutType::DoubleOut),
            "score {} limit {}",
            case.score,
            case.limit
        );
    }
}
