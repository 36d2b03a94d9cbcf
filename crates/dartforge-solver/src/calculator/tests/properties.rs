use proptest::prelude::*;

use super::*;

fn checkout_types() -> impl Strategy<Value = CheckoutType> {
    prop_oneof![
        Just(CheckoutType::StraightOut),
        Just(CheckoutType::DoubleOut)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn checkouts_are_legal(
        score in -10i32..200,
        limit in 1usize..8,
        max_throws in 1u8..=3,
        checkout_type in checkout_types(),
    ) {
        let options = CalculatorOptions::new()
            .with_limit(limit)
            .with_max_throws(max_throws)
            .with_checkout_type(checkout_type);
        let checkouts = Calculator::new(options).calculate(score);

        prop_assert!(checkouts.len() <= limit);

        let mut rendered = std::collections::HashSet::new();
        for checkout in &checkouts {
            prop_assert_eq!(checkout.total(), score);
            prop_assert!(!checkout.is_empty());
            prop_assert!(checkout.len() <= usize::from(max_throws));
            prop_assert!(checkout
                .throws()
                .iter()
                .all(|t| !(t.is_bullseye() && t.multiplier() == dartforge_core::Multiplier::Triple)));
            if checkout_type == CheckoutType::DoubleOut {
                prop_assert!(checkout.last().is_some_and(|last| last.is_double()));
            }
            prop_assert!(rendered.insert(checkout.render()));
        }
    }

    #[test]
    fn larger_limit_keeps_results(
        score in 1i32..=180,
        limit in 1usize..6,
        extra in 1usize..4,
        checkout_type in checkout_types(),
    ) {
        let small = calculate(score, limit, checkout_type);
        let large = calculate(score, limit + extra, checkout_type);

        prop_assert!(small.len() <= large.len());
        for checkout in &small {
            prop_assert!(large.iter().any(|c| c == checkout));
        }

        // Straight-out keeps the prefix only up to a limit of three.
        if checkout_type == CheckoutType::DoubleOut || limit <= 3 {
            prop_assert_eq!(small.as_slice(), &large.as_slice()[..small.len()]);
        }
    }

    #[test]
    fn calculation_is_deterministic(
        score in 1i32..=180,
        limit in 1usize..6,
        checkout_type in checkout_types(),
    ) {
        prop_assert_eq!(
            calculate(score, limit, checkout_type),
            calculate(score, limit, checkout_type)
        );
    }
}
