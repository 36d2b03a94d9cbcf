//! Tests for the checkout calculator.

mod golden;
mod properties;

use super::*;
use crate::options::CheckoutOption;

fn calculate(score: i32, limit: usize, checkout_type: CheckoutType) -> Checkouts {
    Calculator::new(
        CalculatorOptions::new()
            .with_limit(limit)
            .with_checkout_type(checkout_type),
    )
    .calculate(score)
}

#[test]
fn test_default_options() {
    let checkouts = Calculator::default().calculate(170);
    assert_eq!(checkouts.to_string(), "T20 → T20 → DB");
}

#[test]
fn test_out_of_range_scores_are_empty() {
    for checkout_type in [CheckoutType::StraightOut, CheckoutType::DoubleOut] {
        for score in [-50, -1, 0, 181, 500] {
            assert!(calculate(score, 10, checkout_type).is_empty());
        }
    }
}

#[test]
fn test_180() {
    let straight = calculate(180, 1, CheckoutType::StraightOut);
    assert_eq!(straight.len(), 1);
    assert_eq!(straight[0].throws(), &[Score::triple(20).unwrap(); 3]);

    assert!(calculate(180, 1, CheckoutType::DoubleOut).is_empty());
}

#[test]
fn test_bogey_numbers_have_no_double_out() {
    for score in dartforge_core::BOGEY_NUMBERS {
        assert!(calculate(score, 5, CheckoutType::DoubleOut).is_empty());
    }
    assert_eq!(
        calculate(159, 1, CheckoutType::StraightOut).to_string(),
        "T20 → T20 → T13"
    );
}

#[test]
fn test_only_bogey_numbers_lack_double_out() {
    for score in 2..=170 {
        let empty = calculate(score, 1, CheckoutType::DoubleOut).is_empty();
        assert_eq!(empty, dartforge_core::is_bogey(score), "score {score}");
    }
}

#[test]
fn test_zero_limit() {
    assert!(calculate(40, 0, CheckoutType::DoubleOut).is_empty());
}

#[test]
fn test_max_throws_bounds_length() {
    let one_dart = Calculator::new(CalculatorOptions::new().with_max_throws(1).with_limit(5));
    assert_eq!(one_dart.calculate(40).to_string(), "D20");
    assert!(one_dart.calculate(41).is_empty());

    let two_darts = Calculator::new(CalculatorOptions::new().with_max_throws(2));
    assert!(two_darts.calculate(170).is_empty());
    assert_eq!(two_darts.calculate(110).to_string(), "T20 → DB");

    let no_darts = Calculator::new(CalculatorOptions::new().with_max_throws(0));
    assert!(no_darts.calculate(40).is_empty());
}

#[test]
fn test_options_from_list() {
    let options: CalculatorOptions = [
        CheckoutOption::Limit(2),
        CheckoutOption::CheckoutType(CheckoutType::StraightOut),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        Calculator::new(options).calculate(21).to_string(),
        "T7, 1 → 20"
    );
}

#[test]
fn test_double_out_prefers_shortest() {
    let checkouts = calculate(32, 3, CheckoutType::DoubleOut);
    assert_eq!(checkouts[0].render(), "D16");
    assert!(checkouts.iter().skip(1).all(|c| c.len() >= 2));
}
