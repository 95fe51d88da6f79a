//! Receipt domain entities.
//! `ReceiptPayload` is the loosely-typed wire form; `Receipt` is what the
//! validator produces and the points calculator consumes.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A purchased line item, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub short_description: String,
    pub price: String,
}

/// A receipt, as submitted. Every field is a raw string until validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemPayload>,
    pub total: String,
}

/// A validated line item.
///
/// `price` keeps its two-decimal string encoding; it is parsed as a decimal
/// only when points are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A validated receipt. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: String,
}

impl From<&Item> for ItemPayload {
    fn from(item: &Item) -> Self {
        Self {
            short_description: item.short_description.clone(),
            price: item.price.clone(),
        }
    }
}

impl From<&Receipt> for ReceiptPayload {
    fn from(receipt: &Receipt) -> Self {
        Self {
            retailer: receipt.retailer.clone(),
            purchase_date: receipt.purchase_date.format(DATE_FORMAT).to_string(),
            purchase_time: receipt.purchase_time.format(TIME_FORMAT).to_string(),
            items: receipt.items.iter().map(ItemPayload::from).collect(),
            total: receipt.total.clone(),
        }
    }
}
