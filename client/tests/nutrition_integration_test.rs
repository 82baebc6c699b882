//! Integration tests for the nutrition endpoints, against a mock backend

use fitness_planner_client::{ApiClient, ClientConfig, ClientError};
use fitness_planner_shared::{
    ActivityLevel, BiologicalSex, ChangeRate, MacroCalcRequest, MealSnapshot,
    NutritionGenerateRequest, NutritionRegenerateRequest, NutritionTargets,
    NutritionVersionSnapshotV1,
};
use serde_json::{json, Map};
use std::collections::BTreeMap;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig {
        api_base: Some(server.uri()),
    };
    ApiClient::new(&config)
}

fn sample_targets() -> NutritionTargets {
    NutritionTargets {
        maintenance: 2500.0,
        cut: BTreeMap::from([
            (ChangeRate::Half, 2250.0),
            (ChangeRate::One, 2000.0),
            (ChangeRate::Two, 1500.0),
        ]),
        bulk: BTreeMap::from([
            (ChangeRate::Half, 2750.0),
            (ChangeRate::One, 3000.0),
            (ChangeRate::Two, 3500.0),
        ]),
    }
}

fn sample_generate_request() -> NutritionGenerateRequest {
    NutritionGenerateRequest {
        targets: sample_targets(),
        target_calories: None,
        diet: Some("vegetarian".to_string()),
        allergies: vec!["peanut".to_string()],
        meals_needed: 4,
        max_attempts: 10,
        batch_size: 6,
    }
}

fn sample_snapshot(version: u64) -> NutritionVersionSnapshotV1 {
    NutritionVersionSnapshotV1 {
        version,
        targets: sample_targets(),
        accepted_meals: vec![MealSnapshot {
            key: "oats_bowl".to_string(),
            name: "Oats Bowl".to_string(),
        }],
        rejected_meals: vec![MealSnapshot {
            key: "tuna_salad".to_string(),
            name: "Tuna Salad".to_string(),
        }],
        constraints_snapshot: Map::new(),
    }
}

fn snapshot_json(version: u64) -> serde_json::Value {
    serde_json::to_value(sample_snapshot(version)).unwrap()
}

#[tokio::test]
async fn test_generate_nutrition() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/nutrition/generate"))
        .and(body_partial_json(json!({
            "diet": "vegetarian",
            "allergies": ["peanut"],
            "meals_needed": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": { "meals": [{ "name": "Oats Bowl" }] },
            "version_snapshot": snapshot_json(1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_nutrition(&sample_generate_request())
        .await
        .unwrap();

    assert_eq!(response.version_snapshot.version, 1);
    assert_eq!(response.version_snapshot.targets.maintenance, 2500.0);
    assert!(response.output.contains_key("meals"));
}

#[tokio::test]
async fn test_regenerate_nutrition_preserves_snapshot_version() {
    let server = MockServer::start().await;

    // The previous snapshot must reach the backend unmutated
    Mock::given(method("POST"))
        .and(path("/nutrition/regenerate"))
        .and(body_partial_json(json!({
            "meals_needed": 4,
            "prev_snapshot": { "version": 3 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": { "meals": [] },
            "version_snapshot": snapshot_json(4),
            "diff": { "removed": ["tuna_salad"] },
            "explanations": ["removed tuna_salad: rejected previously"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = NutritionRegenerateRequest {
        request: sample_generate_request(),
        prev_snapshot: sample_snapshot(3),
    };
    let response = client_for(&server)
        .regenerate_nutrition(&request)
        .await
        .unwrap();

    assert_eq!(response.version_snapshot.version, 4);
    assert!(response.diff.contains_key("removed"));
    assert_eq!(response.explanations.len(), 1);
}

#[tokio::test]
async fn test_generate_with_zero_counts_rejected_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut request = sample_generate_request();
    request.meals_needed = 0;
    let result = client.generate_nutrition(&request).await;
    assert!(matches!(result, Err(ClientError::InvalidArgument(_))));

    let mut request = sample_generate_request();
    request.batch_size = 0;
    let result = client.generate_nutrition(&request).await;
    assert!(matches!(result, Err(ClientError::InvalidArgument(_))));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no request should have been issued");
}

#[tokio::test]
async fn test_regenerate_with_invalid_counts_rejected_locally() {
    let server = MockServer::start().await;

    let mut generate = sample_generate_request();
    generate.max_attempts = 0;
    let request = NutritionRegenerateRequest {
        request: generate,
        prev_snapshot: sample_snapshot(2),
    };

    let result = client_for(&server).regenerate_nutrition(&request).await;

    assert!(matches!(result, Err(ClientError::InvalidArgument(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_macro_calc_sends_literal_labels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/nutrition/macro-calc"))
        .and(body_json(json!({
            "sex": "male",
            "age": 30,
            "height_cm": 180.0,
            "weight_kg": 80.0,
            "activity_level": "very_active"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "implemented": true,
            "message": "ok",
            "macros": {
                "tdee": 3100.0,
                "maintenance": 3100.0,
                "targets": serde_json::to_value(sample_targets()).unwrap(),
                "explanation": "Mifflin-St Jeor with activity multiplier",
                "activity_multiplier": 1.725,
                "bmr": 1800.0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = MacroCalcRequest {
        sex: BiologicalSex::Male,
        age: 30,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::VeryActive,
    };
    let response = client_for(&server).macro_calc(&request).await.unwrap();

    assert!(response.implemented);
    let macros = response.macros.unwrap();
    assert_eq!(macros.tdee, 3100.0);
    assert_eq!(macros.bmr, 1800.0);
    assert_eq!(macros.activity_multiplier, 1.725);
}

#[tokio::test]
async fn test_nutrition_remote_error_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/nutrition/generate"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({
                "detail": "constraints unsatisfiable"
            })),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .generate_nutrition(&sample_generate_request())
        .await;

    match result {
        Err(ClientError::Remote { status, body }) => {
            assert_eq!(status.as_u16(), 422);
            assert!(body.contains("constraints unsatisfiable"));
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}
