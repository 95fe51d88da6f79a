use receipt_processor::domain::{ItemPayload, ReceiptPayload};
use receipt_processor::points::{calculate, Score};
use receipt_processor::validation::{validate_receipt, Constraint};

fn payload(retailer: &str, date: &str, time: &str, items: &[(&str, &str)], total: &str) -> ReceiptPayload {
    ReceiptPayload {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items: items
            .iter()
            .map(|(description, price)| ItemPayload {
                short_description: description.to_string(),
                price: price.to_string(),
            })
            .collect(),
        total: total.to_string(),
    }
}

fn score(payload: &ReceiptPayload) -> Score {
    calculate(&validate_receipt(payload).expect("valid receipt"))
}

#[test]
fn test_target_fixture() {
    let receipt = payload(
        "Target",
        "2022-01-01",
        "13:01",
        &[
            ("Mountain Dew 12PK", "6.49"),
            ("Emils Cheese Pizza", "12.25"),
            ("Knorr Creamy Chicken", "1.26"),
            ("Doritos Nacho Cheese", "3.35"),
            ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        "35.35",
    );

    assert_eq!(score(&receipt), 28);
}

#[test]
fn test_round_total_bonuses() {
    // 6 (retailer) + 6 (odd day); one item earns nothing else.
    let base = 12;
    let with_total = |total: &str| payload("Target", "2022-01-01", "13:01", &[("Pepsi", total)], total);

    assert_eq!(score(&with_total("35.00")), base + 75);
    assert_eq!(score(&with_total("35.25")), base + 25);
    assert_eq!(score(&with_total("35.35")), base);
}

#[test]
fn test_item_pairs() {
    let items = [("Pepsi", "1.01"); 5];
    let base = 6 + 6;

    assert_eq!(score(&payload("Target", "2022-01-01", "13:01", &items[..1], "1.01")), base);
    assert_eq!(score(&payload("Target", "2022-01-01", "13:01", &items[..2], "1.01")), base + 5);
    assert_eq!(score(&payload("Target", "2022-01-01", "13:01", &items, "1.01")), base + 10);
}

#[test]
fn test_seconds_in_purchase_time_are_accepted() {
    let receipt = payload("Target", "2022-01-02", "15:59:59", &[("Pepsi", "1.01")], "1.01");
    assert_eq!(score(&receipt), 6 + 10);
}

#[test]
fn test_empty_items_never_reach_the_calculator() {
    let receipt = payload("Target", "2022-01-01", "13:01", &[], "0.00");
    let err = validate_receipt(&receipt).unwrap_err();
    assert_eq!(err.constraint, Constraint::NonEmpty);
}
