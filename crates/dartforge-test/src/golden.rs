//! Golden checkout table.
//!
//! Each case holds the rendered result for both finishing rules at the
//! given limit, with checkouts joined by `", "`. These strings pin the
//! search order: any change to candidate order, tie-breaking or
//! truncation shows up here.

use dartforge_core::CheckoutType;

/// Expected rendered checkouts for one score and limit.
#[derive(Debug, Clone, Copy)]
pub struct GoldenCase {
    pub score: i32,
    pub limit: usize,
    pub straight_out: &'static str,
    pub double_out: &'static str,
}

impl GoldenCase {
    /// Returns the expected text for `checkout_type`.
    pub fn expected(&self, checkout_type: CheckoutType) -> &'static str {
        match checkout_type {
            CheckoutType::StraightOut => self.straight_out,
            CheckoutType::DoubleOut => self.double_out,
        }
    }
}

const fn case(
    score: i32,
    limit: usize,
    straight_out: &'static str,
    double_out: &'static str,
) -> GoldenCase {
    GoldenCase {
        score,
        limit,
        straight_out,
        double_out,
    }
}

pub const GOLDEN_CASES: &[GoldenCase] = &[
    case(-1, 1, "", ""),
    case(0, 1, "", ""),
    case(1, 1, "1", ""),
    case(2, 1, "2", "D1"),
    case(
        3,
        10,
        "3, T1, 1 → 2, 1 → D1, 2 → 1, D1 → 1, 1 → 1 → 1",
        "1 → D1",
    ),
    case(4, 1, "4", "D2"),
    case(20, 1, "20", "D10"),
    case(21, 2, "T7, 1 → 20", "1 → D10, 3 → D9"),
    case(25, 1, "B", "1 → D12"),
    case(40, 1, "D20", "D20"),
    case(50, 1, "DB", "DB"),
    case(60, 2, "T20, 3 → T19", "10 → DB, 20 → D20"),
    case(61, 2, "B → D18, B → T12", "B → D18, 11 → DB"),
    case(85, 2, "B → T20, D14 → T19", "T15 → D20, T17 → D17"),
    case(100, 2, "DB → DB, D20 → T20", "DB → DB, T20 → D20"),
    case(107, 1, "DB → T19", "T19 → DB"),
    case(119, 1, "T20 → D17 → B", "T18 → B → D20"),
    case(120, 2, "T20 → T20, DB → T15 → B", "T15 → B → DB, T19 → B → D19"),
    case(121, 1, "T20 → D18 → B", "T20 → B → D18"),
    case(170, 2, "T20 → T20 → DB", "T20 → T20 → DB"),
    case(179, 1, "", ""),
    case(180, 1, "T20 → T20 → T20", ""),
    case(181, 1, "", ""),
];
