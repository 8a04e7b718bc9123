use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{Receipt, ReceiptItem, PURCHASE_DATE_FORMAT, PURCHASE_TIME_FORMAT};

static FREE_TEXT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s\-&]+$").expect("free text pattern compiles"));

static AMOUNT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern compiles"));

// chrono parses unpadded fields ("2022-3-20", "14:5"); the shape gates pin
// the zero-padded canonical forms before the calendar/clock checks run.
static CALENDAR_DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

static CLOCK_TIME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));

/// All-or-nothing structural check a receipt must pass before scoring.
pub fn is_valid(receipt: &Receipt) -> bool {
    is_free_text_format(&receipt.retailer)
        && is_amount_format(&receipt.total)
        && is_calendar_date(&receipt.purchase_date)
        && is_clock_time(&receipt.purchase_time)
        && all_items_valid(&receipt.items)
}

/// Retailer names and item descriptions: letters, digits, whitespace,
/// hyphens, and ampersands. Empty strings are rejected.
pub(crate) fn is_free_text_format(text: &str) -> bool {
    FREE_TEXT_FORMAT.is_match(text)
}

/// Monetary amounts: one or more digits, a dot, exactly two digits.
pub(crate) fn is_amount_format(text: &str) -> bool {
    AMOUNT_FORMAT.is_match(text)
}

fn is_calendar_date(text: &str) -> bool {
    CALENDAR_DATE_FORMAT.is_match(text)
        && NaiveDate::parse_from_str(text, PURCHASE_DATE_FORMAT).is_ok()
}

fn is_clock_time(text: &str) -> bool {
    CLOCK_TIME_FORMAT.is_match(text)
        && NaiveTime::parse_from_str(text, PURCHASE_TIME_FORMAT).is_ok()
}

fn all_items_valid(items: &[ReceiptItem]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| {
            is_free_text_format(&item.short_description) && is_amount_format(&item.price)
        })
}
