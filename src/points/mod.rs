//! Points calculator.
//!
//! Each rule is a pure function of the receipt. Rules are summed
//! independently; a rule whose input fails to parse contributes zero and
//! never aborts the rules that follow it. The round-dollar and quarter
//! rules share one parse of `total` and are disabled together when it fails.
//!
//! The "total over 10.00" bonus is deliberately not awarded.

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{Datelike, Timelike};
use std::str::FromStr;

use crate::domain::{Item, Receipt};

/// Points are unbounded in principle (prices have no upper limit), so scores
/// are kept wide and every sum saturates.
pub type Score = u128;

pub const ROUND_DOLLAR_POINTS: Score = 50;
pub const QUARTER_MULTIPLE_POINTS: Score = 25;
pub const ITEM_PAIR_POINTS: Score = 5;
pub const ODD_DAY_POINTS: Score = 6;
pub const AFTERNOON_POINTS: Score = 10;

const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: Score,
    pub round_dollar: Score,
    pub quarter_multiple: Score,
    pub item_pairs: Score,
    pub item_descriptions: Score,
    pub odd_day: Score,
    pub afternoon: Score,
}

impl PointsBreakdown {
    pub fn total(&self) -> Score {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Score::saturating_add)
    }
}

pub fn calculate(receipt: &Receipt) -> Score {
    breakdown(receipt).total()
}

pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let (round_dollar, quarter_multiple) = total_points(&receipt.total);

    let breakdown = PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar,
        quarter_multiple,
        item_pairs: item_pair_points(&receipt.items),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, Score::saturating_add),
        odd_day: odd_day_points(receipt),
        afternoon: afternoon_points(receipt),
    };

    tracing::debug!(retailer = %receipt.retailer, ?breakdown, "Points calculated");
    breakdown
}

/// Parses a money string the way the calculator reads amounts: surrounding
/// whitespace is tolerated, anything else that is not a decimal fails.
fn parse_amount(value: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(value.trim()).ok()
}

fn is_whole(value: &BigDecimal) -> bool {
    value.with_scale(0) == *value
}

/// Whole, non-negative decimal as a score, saturating at `Score::MAX`.
fn to_score(value: &BigDecimal) -> Score {
    if *value <= BigDecimal::from(0) {
        return 0;
    }
    let (digits, _) = value.with_scale(0).as_bigint_and_exponent();
    digits.to_u128().unwrap_or(Score::MAX)
}

fn ceil(value: &BigDecimal) -> BigDecimal {
    let truncated = value.with_scale(0);
    if truncated < *value {
        truncated + BigDecimal::from(1)
    } else {
        truncated
    }
}

/// One point per alphanumeric character in the retailer name.
pub fn retailer_name_points(retailer: &str) -> Score {
    retailer.chars().filter(|ch| ch.is_alphanumeric()).count() as Score
}

/// Round-dollar and quarter-multiple bonuses, in that order.
///
/// Both read the same parsed total. When it does not parse, neither applies.
pub fn total_points(total: &str) -> (Score, Score) {
    let Some(total) = parse_amount(total) else {
        return (0, 0);
    };

    let round_dollar = if is_whole(&total) { ROUND_DOLLAR_POINTS } else { 0 };
    let quarters = total * BigDecimal::from(4);
    let quarter_multiple = if is_whole(&quarters) { QUARTER_MULTIPLE_POINTS } else { 0 };

    (round_dollar, quarter_multiple)
}

/// Five points for every two items.
pub fn item_pair_points(items: &[Item]) -> Score {
    (items.len() / 2) as Score * ITEM_PAIR_POINTS
}

/// ceil(price * 0.2) when the trimmed description length is a multiple of 3.
/// An unparseable price skips only this item.
pub fn item_description_points(item: &Item) -> Score {
    if item.short_description.trim().chars().count() % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        tracing::debug!(price = %item.price, "Skipping item with unparseable price");
        return 0;
    };

    to_score(&ceil(&(price / BigDecimal::from(5))))
}

pub fn odd_day_points(receipt: &Receipt) -> Score {
    if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Purchases in [14:00, 16:00).
pub fn afternoon_points(receipt: &Receipt) -> Score {
    let hour = receipt.purchase_time.hour();
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
