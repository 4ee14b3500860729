//! Integration tests for the Fare Calculation Engine.
//!
//! This test suite covers the engine end to end:
//! - Peak and off-peak pricing
//! - Daily caps and cap-zone selection
//! - Weekly caps
//! - Journey ordering
//! - File input and rendered output
//! - Rule files
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use fare_engine::api::{AppState, create_router};
use fare_engine::calculation::FareCalculationEngine;
use fare_engine::config::{ConfigLoader, FareRules};
use fare_engine::error::EngineError;
use fare_engine::input::{InputFormat, load_journeys};
use fare_engine::models::Journey;
use fare_engine::output::OutputFormat;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let rules = ConfigLoader::load("./config/fares.yaml")
        .expect("Failed to load fare rules")
        .into_rules();
    AppState::new(rules)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_journey(timestamp: &str, from_zone: i64, to_zone: i64) -> Value {
    json!({
        "timestamp": timestamp,
        "fromZone": from_zone,
        "toZone": to_zone
    })
}

fn create_request(journeys: Vec<Value>) -> Value {
    json!({ "journeys": journeys })
}

fn charged_fares(result: &Value) -> Vec<u64> {
    result["journeyFares"]
        .as_array()
        .expect("journeyFares should be an array")
        .iter()
        .map(|jf| jf["chargedFare"].as_u64().unwrap())
        .collect()
}

fn journey(timestamp: &str, from_zone: i64, to_zone: i64) -> Journey {
    let ts = fare_engine::input::parse_timestamp(timestamp).unwrap();
    Journey::new(ts, from_zone, to_zone).unwrap()
}

/// Nineteen 1-2 journeys across the week of 2025-11-03, 4/4/4/3/2/1/1 per day.
fn nineteen_journey_week() -> Vec<Value> {
    let schedule: [(&str, &[&str]); 7] = [
        ("2025-11-03", &["07:00", "09:00", "17:00", "19:00"]),
        ("2025-11-04", &["07:00", "09:00", "17:00", "19:00"]),
        ("2025-11-05", &["07:00", "09:00", "17:00", "19:00"]),
        ("2025-11-06", &["07:00", "09:00", "17:00"]),
        ("2025-11-07", &["07:00", "09:00"]),
        ("2025-11-08", &["09:00"]),
        ("2025-11-09", &["10:00"]),
    ];

    schedule
        .iter()
        .flat_map(|(date, times)| {
            times
                .iter()
                .map(move |time| create_journey(&format!("{}T{}:00", date, time), 1, 2))
        })
        .collect()
}

// =============================================================================
// SECTION 1: Peak and Off-Peak Pricing
// =============================================================================

#[tokio::test]
async fn test_single_peak_journey_zone_1_1() {
    let router = create_router_for_test();
    let request = create_request(vec![create_journey("2025-11-03T10:00:00", 1, 1)]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["totalFare"], 30);
    assert_eq!(result["journeyFares"][0]["baseFare"], 30);
    assert_eq!(result["journeyFares"][0]["explanation"], "Peak hour fare");
}

#[tokio::test]
async fn test_off_peak_journey_zone_1_2() {
    let router = create_router_for_test();
    let request = create_request(vec![create_journey("2025-11-04T12:00:00", 2, 1)]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["totalFare"], 30);
    assert_eq!(result["journeyFares"][0]["explanation"], "Off-peak fare");
}

#[tokio::test]
async fn test_zone_2_2_peak_then_off_peak() {
    let router = create_router_for_test();
    let request = create_request(vec![
        create_journey("2025-11-03T10:00:00", 2, 2),
        create_journey("2025-11-03T16:00:00", 2, 2),
    ]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(charged_fares(&result), vec![25, 20]);
    assert_eq!(result["totalFare"], 45);
}

#[tokio::test]
async fn test_weekend_uses_weekend_windows() {
    let router = create_router_for_test();
    // 08:00 is weekday peak but Saturday off-peak; 21:00 is Saturday peak
    let request = create_request(vec![
        create_journey("2025-11-08T08:00:00", 1, 1),
        create_journey("2025-11-08T21:00:00", 1, 1),
    ]);

    let (_, result) = post_calculate(router, request).await;

    assert_eq!(charged_fares(&result), vec![25, 30]);
}

// =============================================================================
// SECTION 2: Daily Caps
// =============================================================================

#[tokio::test]
async fn test_daily_cap_with_zone_change() {
    let router = create_router_for_test();
    let request = create_request(vec![
        create_journey("2025-11-03T10:20:00", 2, 1),
        create_journey("2025-11-03T10:45:00", 1, 1),
        create_journey("2025-11-03T16:15:00", 1, 1),
        create_journey("2025-11-03T18:15:00", 1, 1),
        create_journey("2025-11-03T19:00:00", 1, 2),
    ]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(charged_fares(&result), vec![35, 25, 25, 30, 5]);
    assert_eq!(result["totalFare"], 120);
    assert_eq!(
        result["journeyFares"][4]["explanation"],
        "Daily cap (120) reached; charged 5 instead of 35"
    );
}

#[tokio::test]
async fn test_daily_cap_resets_next_day() {
    let router = create_router_for_test();
    let mut journeys: Vec<Value> = ["07:00", "08:00", "09:00", "10:00"]
        .iter()
        .map(|t| create_journey(&format!("2025-11-03T{}:00", t), 1, 1))
        .collect();
    journeys.push(create_journey("2025-11-04T07:30:00", 1, 1));

    let (_, result) = post_calculate(router, create_request(journeys)).await;

    // 3 x 30 + 10 reaches the 100 cap; Tuesday starts fresh
    assert_eq!(charged_fares(&result), vec![30, 30, 30, 10, 30]);
    assert_eq!(result["totalFare"], 130);
}

#[tokio::test]
async fn test_daily_cap_reached_charges_nothing() {
    let router = create_router_for_test();
    let journeys: Vec<Value> = (11..=15)
        .map(|h| create_journey(&format!("2025-11-05T{}:00:00", h), 2, 2))
        .collect();

    let (_, result) = post_calculate(router, create_request(journeys)).await;

    assert_eq!(charged_fares(&result), vec![20, 20, 20, 20, 0]);
    assert_eq!(result["journeyFares"][4]["explanation"], "Daily cap (80) reached");
}

// =============================================================================
// SECTION 3: Weekly Caps
// =============================================================================

#[tokio::test]
async fn test_weekly_cap_nineteen_journeys() {
    let router = create_router_for_test();

    let (status, result) = post_calculate(router, create_request(nineteen_journey_week())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["journeyFares"].as_array().unwrap().len(), 19);
    assert_eq!(result["totalFare"], 600);

    let last = &result["journeyFares"][18];
    assert_eq!(last["chargedFare"], 30);
    assert_eq!(
        last["explanation"],
        "Weekly cap (600) reached; charged 30 instead of 35"
    );
}

#[test]
fn test_weekly_cap_twenty_journeys_from_csv() {
    let journeys = load_journeys("./demos/weekly_cap.csv").unwrap();
    assert_eq!(journeys.len(), 20);

    let engine = FareCalculationEngine::new(FareRules::default());
    let result = engine.calculate_fares(&journeys).unwrap();

    assert_eq!(result.total_fare, 600);
    assert_eq!(result.journey_fares[19].charged_fare, 15);
    assert!(result.journey_fares[19].explanation.starts_with("Weekly cap (600)"));
}

#[tokio::test]
async fn test_weekly_cap_resets_on_monday() {
    let router = create_router_for_test();
    let mut journeys = nineteen_journey_week();
    journeys.push(create_journey("2025-11-09T20:00:00", 1, 2));
    journeys.push(create_journey("2025-11-10T08:00:00", 1, 2));

    let (_, result) = post_calculate(router, create_request(journeys)).await;

    let charged = charged_fares(&result);
    assert_eq!(charged[19], 0);
    assert_eq!(charged[20], 35);
    assert_eq!(result["journeyFares"][19]["explanation"], "Weekly cap (600) reached");
    assert_eq!(result["totalFare"], 635);
}

// =============================================================================
// SECTION 4: Journey Ordering
// =============================================================================

#[tokio::test]
async fn test_journeys_sorted_by_timestamp() {
    let router = create_router_for_test();
    let request = create_request(vec![
        create_journey("2025-11-03T18:00:00", 1, 1),
        create_journey("2025-11-03T10:00:00", 1, 1),
        create_journey("2025-11-03T14:00:00", 1, 1),
    ]);

    let (_, result) = post_calculate(router, request).await;

    let timestamps: Vec<&str> = result["journeyFares"]
        .as_array()
        .unwrap()
        .iter()
        .map(|jf| jf["timestamp"].as_str().unwrap())
        .collect();
    assert_eq!(
        timestamps,
        vec![
            "2025-11-03T10:00:00",
            "2025-11-03T14:00:00",
            "2025-11-03T18:00:00"
        ]
    );
}

#[tokio::test]
async fn test_cap_applies_in_time_order_not_input_order() {
    let router = create_router_for_test();
    // The 1-2 journey is listed first but travelled last
    let request = create_request(vec![
        create_journey("2025-11-03T19:00:00", 1, 2),
        create_journey("2025-11-03T18:15:00", 1, 1),
        create_journey("2025-11-03T16:15:00", 1, 1),
        create_journey("2025-11-03T10:45:00", 1, 1),
        create_journey("2025-11-03T10:20:00", 2, 1),
    ]);

    let (_, result) = post_calculate(router, request).await;

    assert_eq!(charged_fares(&result), vec![35, 25, 25, 30, 5]);
}

// =============================================================================
// SECTION 5: File Input and Output
// =============================================================================

#[test]
fn test_json_file_round_trip_to_text_report() {
    let journeys = load_journeys("./demos/daily_cap.json").unwrap();
    let engine = FareCalculationEngine::new(FareRules::default());
    let result = engine.calculate_fares(&journeys).unwrap();

    let report = OutputFormat::Text.render(&result).unwrap();

    assert!(report.contains("1. 03/11/2025 10:20 | Zone 2 → 1"));
    assert!(report.contains("5. 03/11/2025 19:00 | Zone 1 → 2"));
    assert!(report.contains("TOTAL FARE: £1.20"));
}

#[test]
fn test_json_and_csv_inputs_agree() {
    let json = r#"[
        {"timestamp": "2025-11-03T10:20:00", "fromZone": 2, "toZone": 1},
        {"timestamp": "2025-11-03T10:45:00", "fromZone": 1, "toZone": 1}
    ]"#;
    let csv = "timestamp,fromZone,toZone\n2025-11-03T10:20:00,2,1\n2025-11-03T10:45:00,1,1\n";

    let engine = FareCalculationEngine::new(FareRules::default());
    let from_json = engine
        .calculate_fares(&InputFormat::Json.parse(json).unwrap())
        .unwrap();
    let from_csv = engine
        .calculate_fares(&InputFormat::Csv.parse(csv).unwrap())
        .unwrap();

    assert_eq!(from_json, from_csv);
}

#[test]
fn test_csv_report_lists_every_journey() {
    let engine = FareCalculationEngine::new(FareRules::default());
    let journeys = vec![
        journey("2025-11-03T10:20:00", 2, 1),
        journey("2025-11-03T10:45:00", 1, 1),
    ];
    let result = engine.calculate_fares(&journeys).unwrap();

    let csv = OutputFormat::Csv.render(&result).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Timestamp,From Zone,To Zone,Base Fare,Charged Fare,Explanation"
    );
    assert_eq!(lines[1], "2025-11-03T10:20:00,2,1,0.35,0.35,Peak hour fare");
    assert_eq!(lines[2], "2025-11-03T10:45:00,1,1,0.25,0.25,Off-peak fare");
    assert_eq!(lines.last(), Some(&"Total Fare,,,,,0.60"));
}

// =============================================================================
// SECTION 6: Rule Files
// =============================================================================

#[test]
fn test_shipped_rules_match_defaults() {
    let loaded = ConfigLoader::load("./config/fares.yaml").unwrap().into_rules();
    assert_eq!(loaded, FareRules::default());
}

#[tokio::test]
async fn test_rules_endpoint_serves_loaded_tables() {
    let router = create_router_for_test();
    let response = router
        .oneshot(Request::builder().uri("/rules").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let rules: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(rules["fares"][1]["zone_pair"], "1-2");
    assert_eq!(rules["fares"][1]["peak_fare"], 35);
    assert_eq!(rules["caps"][2]["weekly_cap"], 400);
}

#[tokio::test]
async fn test_custom_rules_change_pricing() {
    let yaml = r#"
fares:
  - zone_pair: "1-1"
    peak_fare: 50
    off_peak_fare: 40
  - zone_pair: "1-2"
    peak_fare: 60
    off_peak_fare: 50
  - zone_pair: "2-2"
    peak_fare: 45
    off_peak_fare: 35
caps:
  - zone_pair: "1-1"
    daily_cap: 90
    weekly_cap: 400
  - zone_pair: "1-2"
    daily_cap: 150
    weekly_cap: 700
  - zone_pair: "2-2"
    daily_cap: 70
    weekly_cap: 300
"#;
    let rules = ConfigLoader::parse(yaml, "inline").unwrap();
    let router = create_router(AppState::new(rules));
    let request = create_request(vec![
        create_journey("2025-11-03T08:00:00", 1, 1),
        create_journey("2025-11-03T09:00:00", 1, 1),
    ]);

    let (_, result) = post_calculate(router, request).await;

    assert_eq!(charged_fares(&result), vec![50, 40]);
    assert_eq!(result["totalFare"], 90);
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[tokio::test]
async fn test_invalid_zone_returns_400() {
    let router = create_router_for_test();
    let request = create_request(vec![
        create_journey("2025-11-03T10:00:00", 1, 1),
        create_journey("2025-11-03T11:00:00", 3, 1),
    ]);

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ZONE");
    assert_eq!(error["details"], "at journeys[1]");
}

#[tokio::test]
async fn test_negative_zone_returns_400() {
    let router = create_router_for_test();
    let request = create_request(vec![create_journey("2025-11-03T10:00:00", 1, -1)]);

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ZONE");
}

#[tokio::test]
async fn test_bad_timestamp_returns_400() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "timestamp": "03/11/2025 10:00",
        "fromZone": 1,
        "toZone": 1
    })]);

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_JOURNEY");
}

#[tokio::test]
async fn test_missing_zone_field_returns_400() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "timestamp": "2025-11-03T10:00:00",
        "fromZone": 1
    })]);

    let (status, error) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[test]
fn test_unknown_zone_pair_lookup() {
    let rules = FareRules::default();
    let pair = "3-3".parse().unwrap();
    assert!(matches!(
        rules.get_fare(pair, true),
        Err(EngineError::UnknownZonePair { .. })
    ));
}

#[test]
fn test_unsupported_input_file() {
    assert!(matches!(
        load_journeys("./config/fares.yaml"),
        Err(EngineError::UnsupportedFormat { .. })
    ));
}
