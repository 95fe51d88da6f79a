use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::domain::{Item, ItemPayload, Receipt, ReceiptPayload};

/// Which kind of constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Pattern,
    Date,
    Time,
    NonEmpty,
}

impl Constraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::Pattern => "pattern",
            Constraint::Date => "date",
            Constraint::Time => "time",
            Constraint::NonEmpty => "non_empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.constraint.as_str(), self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

// Unicode `\w` covers letters, marks, digits and connector punctuation.
static RETAILER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\-&]+$").expect("Invalid regex"));
static SHORT_DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\-]+$").expect("Invalid regex"));

fn all_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Full match of `^\d+\.\d{2}$` over ASCII digits.
pub fn is_money(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, cents)) => all_ascii_digits(whole) && cents.len() == 2 && all_ascii_digits(cents),
        None => false,
    }
}

pub fn validate_retailer(retailer: &str) -> ValidationResult {
    if !RETAILER_PATTERN.is_match(retailer) {
        return Err(ValidationError::new(
            "retailer",
            Constraint::Pattern,
            "must contain only letters, digits, spaces, hyphens and ampersands",
        ));
    }

    Ok(())
}

pub fn validate_short_description(field: &str, description: &str) -> ValidationResult {
    if !SHORT_DESCRIPTION_PATTERN.is_match(description) {
        return Err(ValidationError::new(
            field,
            Constraint::Pattern,
            "must contain only letters, digits, spaces and hyphens",
        ));
    }

    Ok(())
}

pub fn validate_money(field: &str, value: &str) -> ValidationResult {
    if !is_money(value) {
        return Err(ValidationError::new(
            field,
            Constraint::Pattern,
            "must be a decimal with exactly two fractional digits, e.g. 6.49",
        ));
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` string into a real calendar date.
pub fn parse_purchase_date(value: &str) -> ValidationResult<NaiveDate> {
    let invalid = || {
        ValidationError::new(
            "purchaseDate",
            Constraint::Date,
            "must be a real date in the format YYYY-MM-DD",
        )
    };

    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    if ![year, month, day].iter().all(|part| all_ascii_digits(part)) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    if year < 1 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses an `HH:MM` (or `HH:MM:SS`) string into a real 24-hour time.
pub fn parse_purchase_time(value: &str) -> ValidationResult<NaiveTime> {
    let invalid = || {
        ValidationError::new(
            "purchaseTime",
            Constraint::Time,
            "must be a real time in the format HH:MM (24-hour)",
        )
    };

    let parts: Vec<&str> = value.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(invalid());
    }
    if !parts.iter().all(|part| part.len() == 2 && all_ascii_digits(part)) {
        return Err(invalid());
    }

    let mut fields = parts.iter().map(|part| part.parse::<u32>());
    let hour = fields.next().and_then(Result::ok).ok_or_else(invalid)?;
    let minute = fields.next().and_then(Result::ok).ok_or_else(invalid)?;
    let second = match fields.next() {
        Some(second) => second.map_err(|_| invalid())?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

fn validate_item(index: usize, item: &ItemPayload) -> ValidationResult<Item> {
    validate_short_description(
        &format!("items[{}].shortDescription", index),
        &item.short_description,
    )?;
    validate_money(&format!("items[{}].price", index), &item.price)?;

    Ok(Item {
        short_description: item.short_description.clone(),
        price: item.price.clone(),
    })
}

/// Validates every field of a submitted receipt.
///
/// All-or-nothing: the first offending field is reported and no partial
/// receipt is returned.
pub fn validate_receipt(payload: &ReceiptPayload) -> ValidationResult<Receipt> {
    validate_retailer(&payload.retailer)?;
    let purchase_date = parse_purchase_date(&payload.purchase_date)?;
    let purchase_time = parse_purchase_time(&payload.purchase_time)?;

    if payload.items.is_empty() {
        return Err(ValidationError::new(
            "items",
            Constraint::NonEmpty,
            "must contain at least one item",
        ));
    }
    let items = payload
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ValidationResult<Vec<_>>>()?;

    validate_money("total", &payload.total)?;

    Ok(Receipt {
        retailer: payload.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total: payload.total.clone(),
    })
}

impl TryFrom<&ReceiptPayload> for Receipt {
    type Error = ValidationError;

    fn try_from(payload: &ReceiptPayload) -> Result<Self, Self::Error> {
        validate_receipt(payload)
    }
}
