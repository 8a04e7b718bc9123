use serde::{Deserialize, Serialize};

/// Wire format for purchase dates (`2022-01-01`).
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for purchase times (24-hour clock, minute precision).
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Identifier wrapper for stored receipt scores. Assigned by the points
/// store at save time; treated as opaque everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// A submitted purchase receipt, kept in its wire form.
///
/// Field values stay as strings: the validator and each scoring rule decide
/// independently how to interpret them, and a receipt is never mutated once
/// received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ReceiptItem>,
    pub total: String,
}

/// A single purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub short_description: String,
    pub price: String,
}
