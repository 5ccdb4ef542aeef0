//! Integration tests for calculator endpoints

mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};

fn body(age: i32, height: f64, weight: f64, gender: &str, activity: &str, goal: &str) -> String {
    json!({
        "age": age,
        "height": height,
        "weight": weight,
        "gender": gender,
        "activityLevel": activity,
        "goal": goal
    })
    .to_string()
}

#[rstest]
#[case(body(30, 170.0, 70.0, "male", "sedentary", "maintain"), 1618, 1942, 1942)]
#[case(body(25, 160.0, 60.0, "female", "moderatelyActive", "lose"), 1314, 2037, 1537)]
#[case(body(25, 160.0, 60.0, "female", "moderately_active", "gain"), 1314, 2037, 2537)]
#[tokio::test]
async fn test_estimate_scenarios(
    #[case] request: String,
    #[case] bmr: i32,
    #[case] tdee: i32,
    #[case] target: i32,
) {
    let app = common::TestApp::new();

    let (status, response) = app.post("/api/v1/calculator", &request).await;

    assert_eq!(status, StatusCode::OK, "unexpected body: {response}");
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["result"]["bmr"], bmr);
    assert_eq!(response["result"]["tdee"], tdee);
    assert_eq!(response["result"]["targetCalories"], target);
    assert_eq!(response["clamped"], false);
    assert_eq!(response["display"]["unit"], "kcal");
}

#[tokio::test]
async fn test_estimate_in_kilojoules() {
    let app = common::TestApp::new();
    let mut request: Value =
        serde_json::from_str(&body(30, 170.0, 70.0, "male", "sedentary", "maintain")).unwrap();
    request["energyUnit"] = json!("kj");

    let (status, response) = app.post("/api/v1/calculator", &request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["result"]["tdee"], 1942);
    assert_eq!(response["display"]["unit"], "kJ");
    // 1942 * 4.184 = 8125.328
    assert_eq!(response["display"]["tdee"], 8125);
}

#[tokio::test]
async fn test_estimate_rejects_out_of_range_input() {
    let app = common::TestApp::new();
    let request = body(200, 100.0, 70.0, "male", "sedentary", "maintain");

    let (status, response) = app.post("/api/v1/calculator", &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["field"], "age");
    let message = response["error"]["message"].as_str().unwrap();
    assert!(message.contains("Age: must be between 16 and 90"));
    assert!(message.contains("Height: must be between 140 and 210"));
}

#[tokio::test]
async fn test_lenient_mode_clamps_input() {
    let app = common::TestApp::lenient();
    let request = body(200, 100.0, 70.0, "male", "sedentary", "maintain");

    let (status, response) = app.post("/api/v1/calculator", &request).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["clamped"], true);
    assert_eq!(response["input"]["age"], 90);
    assert_eq!(response["input"]["height"], 140.0);
    // 700 + 875 - 450 + 5 = 1130
    assert_eq!(response["result"]["bmr"], 1130);
}

#[tokio::test]
async fn test_estimate_rejects_unknown_activity_level() {
    let app = common::TestApp::new();
    let request = body(30, 170.0, 70.0, "male", "couch_potato", "maintain");

    let (status, response) = app.post("/api/v1/calculator", &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_estimate_rejects_malformed_json() {
    let app = common::TestApp::new();

    let (status, response) = app.post("/api/v1/calculator", "{\"age\": 30,").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("BAD_REQUEST"));
}

#[tokio::test]
async fn test_estimate_rejects_missing_fields() {
    let app = common::TestApp::new();

    let (status, _) = app
        .post("/api/v1/calculator", &json!({"age": 30, "height": 170}).to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_options_endpoint() {
    let app = common::TestApp::new();

    let (status, response) = app.get("/api/v1/calculator/options").await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    let levels = response["activityLevels"].as_array().unwrap();
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0]["value"], "sedentary");
    assert_eq!(levels[4]["value"], "athlete");
    assert_eq!(levels[4]["multiplier"], 1.9);
    assert_eq!(response["goals"][2]["offsetKcal"], 500);
    assert_eq!(response["ranges"]["age"]["min"], 16.0);
    assert_eq!(response["ranges"]["weight"]["max"], 150.0);
    assert_eq!(response["genders"], json!(["male", "female"]));
}
