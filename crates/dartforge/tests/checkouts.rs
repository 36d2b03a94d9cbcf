//! End-to-end checks through the public facade.

use dartforge::prelude::*;
use dartforge::{checkouts_with_config, is_bogey, DartsConfig, BOGEY_NUMBERS};
use dartforge_test::GOLDEN_CASES;

fn options(limit: usize, checkout_type: CheckoutType) -> [CheckoutOption; 2] {
    [
        CheckoutOption::Limit(limit),
        CheckoutOption::CheckoutType(checkout_type),
    ]
}

#[test]
fn golden_cases_through_facade() {
    for case in GOLDEN_CASES {
        for checkout_type in [CheckoutType::StraightOut, CheckoutType::DoubleOut] {
            let checkouts = checkouts_for(case.score, options(case.limit, checkout_type));
            assert_eq!(
                checkouts.to_string(),
                case.expected(checkout_type),
                "score {} limit {} {}",
                case.score,
                case.limit,
                checkout_type
            );
        }
    }
}

#[test]
fn config_drives_calculation() {
    let config = DartsConfig::from_toml_str(
        r#"
        [checkout]
        limit = 3
        checkout_type = "double-out"
        "#,
    )
    .unwrap();

    let checkouts = checkouts_with_config(40, &config);
    assert_eq!(checkouts.to_string(), "D20, 2 → D19, 4 → D18");
}

#[test]
fn yaml_config_matches_options() {
    let config = DartsConfig::from_yaml_str(
        r#"
checkout:
  limit: 2
  checkout_type: straight-out
"#,
    )
    .unwrap();

    assert_eq!(
        checkouts_with_config(100, &config),
        checkouts_for(100, options(2, CheckoutType::StraightOut))
    );
}

#[test]
fn suggested_checkouts_finish_when_thrown() {
    for score in [61, 85, 121, 170] {
        for checkout_type in [CheckoutType::StraightOut, CheckoutType::DoubleOut] {
            let checkouts = checkouts_for(score, options(3, checkout_type));
            for checkout in &checkouts {
                let entered: Vec<String> = checkout.throws().iter().map(Score::to_string).collect();
                let turn = Turn::parse(&entered.join(", ")).unwrap();
                assert!(turn.finishes(score, checkout_type), "{checkout} for {score}");
            }
        }
    }
}

#[test]
fn bogey_numbers_have_no_double_out() {
    for score in BOGEY_NUMBERS {
        assert!(is_bogey(score));
        assert!(checkouts_for(score, options(1, CheckoutType::DoubleOut)).is_empty());
    }
    assert!(!checkouts_for(159, options(1, CheckoutType::StraightOut)).is_empty());
}

#[test]
fn fewer_darts_narrow_the_search() {
    let two_darts = checkouts_for(
        110,
        [
            CheckoutOption::MaxThrows(2),
            CheckoutOption::CheckoutType(CheckoutType::DoubleOut),
        ],
    );
    assert_eq!(two_darts.to_string(), "T20 → DB");

    let one_dart = checkouts_for(110, [CheckoutOption::MaxThrows(1)]);
    assert!(one_dart.is_empty());
}
