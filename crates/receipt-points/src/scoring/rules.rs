use chrono::{Datelike, NaiveDate, NaiveTime};

use super::domain::{Receipt, PURCHASE_DATE_FORMAT, PURCHASE_TIME_FORMAT};

/// A single additive contribution to a receipt's total score.
///
/// Rules are pure functions of the receipt. Parse failures inside a rule
/// are absorbed as zero-point contributions rather than errors; the
/// validator has already rejected structurally broken receipts by the time
/// rules run.
pub type ScoringRule = fn(&Receipt) -> u64;

/// The standard pipeline, in the order rules are applied. Contributions are
/// independent, so ordering never changes the total.
pub fn standard_rules() -> Vec<ScoringRule> {
    vec![
        retailer_name_points,
        receipt_total_points,
        items_points,
        purchase_date_points,
        purchase_time_points,
    ]
}

/// One point for every ASCII alphanumeric character in the retailer name.
pub fn retailer_name_points(receipt: &Receipt) -> u64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64
}

/// 50 points for a round dollar total, plus another 25 when the total is a
/// multiple of a quarter. The two bonuses stack on whole-dollar amounts.
pub fn receipt_total_points(receipt: &Receipt) -> u64 {
    let cents = match parse_cents(&receipt.total) {
        Some(cents) => cents,
        None => return 0,
    };

    let mut points = 0;
    if cents % 100 == 0 {
        points += 50;
    }
    if cents % 25 == 0 {
        points += 25;
    }
    points
}

/// 5 points for every two items, plus `ceil(price * 0.2)` for each item
/// whose trimmed description length is a multiple of three (zero included).
/// Items with unparsable prices are skipped, not fatal. The contribution
/// saturates at `u64::MAX` instead of wrapping.
pub fn items_points(receipt: &Receipt) -> u64 {
    let mut points = 5 * (receipt.items.len() as u64 / 2);

    for item in &receipt.items {
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }
        if let Some(cents) = parse_cents(&item.price) {
            points = points.saturating_add(cents.div_ceil(500));
        }
    }

    points
}

/// 6 points when the day of the purchase date is odd.
pub fn purchase_date_points(receipt: &Receipt) -> u64 {
    match NaiveDate::parse_from_str(&receipt.purchase_date, PURCHASE_DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points for purchases strictly after 14:00 and strictly before 16:00.
pub fn purchase_time_points(receipt: &Receipt) -> u64 {
    let purchased = match NaiveTime::parse_from_str(&receipt.purchase_time, PURCHASE_TIME_FORMAT) {
        Ok(time) => time,
        Err(_) => return 0,
    };

    let opens = NaiveTime::from_hms_opt(14, 0, 0).expect("valid window start");
    let closes = NaiveTime::from_hms_opt(16, 0, 0).expect("valid window end");

    if purchased > opens && purchased < closes {
        10
    } else {
        0
    }
}

/// Parse a decimal money string into whole cents without going through
/// floating point. Slightly more lenient than the validator: bare integers
/// and single-digit fractions parse, anything else is `None`.
pub(crate) fn parse_cents(amount: &str) -> Option<u64> {
    let (dollars, fraction) = match amount.split_once('.') {
        Some((dollars, fraction)) => (dollars, fraction),
        None => (amount, ""),
    };

    if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: u64 = dollars.parse().ok()?;
    let cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse::<u64>().ok()?,
    };

    whole.checked_mul(100)?.checked_add(cents)
}
