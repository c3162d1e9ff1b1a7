//! Produce marketplace model tests

use rust_decimal::Decimal;
use shared::{CreateProduceInput, QuantityUnit};
use validator::Validate;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn valid_input() -> CreateProduceInput {
    CreateProduceInput {
        crop: "Paddy".to_string(),
        quantity: dec("12.5"),
        price_per_unit: dec("2150.00"),
    }
}

#[test]
fn accepts_typical_listing() {
    assert!(valid_input().validate().is_ok());
}

#[test]
fn rejects_zero_quantity() {
    let mut input = valid_input();
    input.quantity = Decimal::ZERO;
    assert!(input.validate().is_err());
}

#[test]
fn rejects_negative_price() {
    let mut input = valid_input();
    input.price_per_unit = dec("-10");
    assert!(input.validate().is_err());
}

#[test]
fn rejects_empty_crop_name() {
    let mut input = valid_input();
    input.crop = String::new();
    assert!(input.validate().is_err());
}

#[test]
fn fractional_quantities_are_valid() {
    let mut input = valid_input();
    input.quantity = dec("0.01");
    assert!(input.validate().is_ok());
}

#[test]
fn default_unit_is_quintals() {
    assert_eq!(QuantityUnit::default(), QuantityUnit::Quintals);
    assert_eq!(QuantityUnit::default().as_str(), "quintals");
}

#[test]
fn units_serialize_lowercase() {
    assert_eq!(
        serde_json::to_value(QuantityUnit::Quintals).unwrap(),
        "quintals"
    );
    assert_eq!(
        serde_json::to_value(QuantityUnit::Kilograms).unwrap(),
        "kilograms"
    );
}
