//! Weather reading tests
//!
//! The dashboard renders whatever reading it gets; when the provider is
//! unreachable it gets the zeroed "Unknown" reading instead of an error.

use shared::WeatherReading;

#[test]
fn unknown_reading_is_the_documented_sentinel() {
    let reading = WeatherReading::unknown();

    assert_eq!(reading.condition, "Unknown");
    assert_eq!(reading.temperature_c, 0.0);
    assert_eq!(reading.humidity_pct, 0.0);
    assert_eq!(reading.wind_speed_mps, 0.0);
    assert_eq!(reading.pressure_hpa, 0.0);
}

#[test]
fn unknown_is_detectable_by_condition_alone() {
    // A real reading can legitimately carry 0.0 values (freezing, calm),
    // so the sentinel is recognized by its condition string.
    let freezing = WeatherReading {
        condition: "Clear".to_string(),
        temperature_c: 0.0,
        humidity_pct: 0.0,
        wind_speed_mps: 0.0,
        pressure_hpa: 1013.0,
    };

    assert!(!freezing.is_unknown());
    assert!(WeatherReading::unknown().is_unknown());
}

#[test]
fn sentinel_is_deterministic() {
    assert_eq!(WeatherReading::unknown(), WeatherReading::unknown());
}

#[test]
fn reading_serializes_with_stable_field_names() {
    let reading = WeatherReading {
        condition: "Rain".to_string(),
        temperature_c: 24.3,
        humidity_pct: 88.0,
        wind_speed_mps: 5.2,
        pressure_hpa: 1004.0,
    };

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["condition"], "Rain");
    assert_eq!(json["temperature_c"], 24.3);
    assert_eq!(json["humidity_pct"], 88.0);
    assert_eq!(json["wind_speed_mps"], 5.2);
    assert_eq!(json["pressure_hpa"], 1004.0);
}
