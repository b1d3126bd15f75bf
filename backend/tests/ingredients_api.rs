//! HTTP tests for the ingredient endpoints.
//!
//! The full middleware stack and route scope run against the real
//! `IngredientService` backed by an in-memory repository.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{App, test, web};
use food_orders::Correlation;
use food_orders::domain::{CORRELATION_ID_HEADER, IngredientDto};
use food_orders::inbound::http::api_scope;
use food_orders::inbound::http::health::HealthState;
use food_orders::test_support::{InMemoryIngredientRepository, in_memory_http_state};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const PREFIX: &str = "/food-orders/api/v1";
const TOMATO_ID: &str = "57526bf4-7226-4195-b5d6-0219923f65b1";

#[fixture]
fn repository() -> InMemoryIngredientRepository {
    let repository = InMemoryIngredientRepository::new();
    repository.seed(IngredientDto {
        ingredient_id: TOMATO_ID.to_owned(),
        name: "Tomato".to_owned(),
        quantity: 3,
        category: "FROZEN".to_owned(),
        availability: None,
    });
    repository
}

fn test_app(
    repository: InMemoryIngredientRepository,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(in_memory_http_state(repository)))
        .app_data(health)
        .wrap(Correlation)
        .service(api_scope(PREFIX))
}

fn uri(path: &str) -> String {
    format!("{PREFIX}{path}")
}

#[rstest]
#[actix_web::test]
async fn get_returns_the_camel_case_dto(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::get()
        .uri(&uri(&format!("/ingredients/{TOMATO_ID}")))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "ingredientId": TOMATO_ID,
            "name": "Tomato",
            "quantity": 3,
            "category": "FROZEN"
        })
    );
}

#[rstest]
#[actix_web::test]
async fn get_of_unknown_id_is_not_found(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::get()
        .uri(&uri("/ingredients/missing"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "error": "Ingredient with id missing not found" })
    );
}

#[rstest]
#[actix_web::test]
async fn negative_quantity_is_rejected_before_storage(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository.clone())).await;

    let request = test::TestRequest::post()
        .uri(&uri("/ingredients"))
        .set_json(json!({ "name": "Salt", "quantity": -1, "category": "DRY" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Quantity cannot be negative" }));
    assert_eq!(repository.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn add_returns_a_generated_id_that_can_be_read_back(
    repository: InMemoryIngredientRepository,
) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::post()
        .uri(&uri("/ingredients"))
        .set_json(json!({ "name": "Salt", "quantity": 5, "category": "DRY" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    let id = body
        .get("ingredientId")
        .and_then(Value::as_str)
        .expect("ingredient id")
        .to_owned();
    uuid::Uuid::parse_str(&id).expect("generated id is a UUID");

    let request = test::TestRequest::get()
        .uri(&uri(&format!("/ingredients/{id}")))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(stored.get("name").and_then(Value::as_str), Some("Salt"));
}

#[rstest]
#[actix_web::test]
async fn repeated_forced_id_is_a_conflict(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;
    let payload = json!({
        "ingredientId": "salt-1",
        "name": "Salt",
        "quantity": 5,
        "category": "DRY"
    });

    let first = test::TestRequest::post()
        .uri(&uri("/ingredients"))
        .set_json(&payload)
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, first).await;
    assert_eq!(first, json!({ "ingredientId": "salt-1" }));

    let second = test::TestRequest::post()
        .uri(&uri("/ingredients"))
        .set_json(&payload)
        .to_request();
    let response = test::call_service(&app, second).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "error": "Ingredient with id salt-1 already exists" })
    );
}

#[rstest]
#[case::unknown_field(json!({ "name": "Salt", "quantity": 5, "category": "DRY", "extra": 1 }))]
#[case::missing_field(json!({ "name": "Salt", "quantity": 5 }))]
#[case::wrong_type(json!({ "name": "Salt", "quantity": "five", "category": "DRY" }))]
#[case::blank_name(json!({ "name": "   ", "quantity": 5, "category": "DRY" }))]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(
    repository: InMemoryIngredientRepository,
    #[case] payload: Value,
) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::post()
        .uri(&uri("/ingredients"))
        .set_json(payload)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[rstest]
#[actix_web::test]
async fn markup_is_stripped_from_names(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::post()
        .uri(&uri("/ingredients"))
        .set_json(json!({
            "ingredientId": "pepper",
            "name": "<i>Pepper</i><script>alert('x')</script>",
            "quantity": 2,
            "category": "DRY"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = test::TestRequest::get()
        .uri(&uri("/ingredients/pepper"))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(stored.get("name").and_then(Value::as_str), Some("Pepper"));
}

#[rstest]
#[actix_web::test]
async fn quantity_update_is_persisted(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::put()
        .uri(&uri(&format!("/ingredients/{TOMATO_ID}/quantity")))
        .set_json(json!({ "quantity": 8 }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(updated.get("quantity").and_then(Value::as_i64), Some(8));

    let request = test::TestRequest::get()
        .uri(&uri(&format!("/ingredients/{TOMATO_ID}")))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(stored.get("quantity").and_then(Value::as_i64), Some(8));
}

#[rstest]
#[case::negative(TOMATO_ID, -4, StatusCode::BAD_REQUEST)]
#[case::missing("missing", 4, StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn quantity_update_failures(
    repository: InMemoryIngredientRepository,
    #[case] id: &str,
    #[case] quantity: i32,
    #[case] expected: StatusCode,
) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::put()
        .uri(&uri(&format!("/ingredients/{id}/quantity")))
        .set_json(json!({ "quantity": quantity }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), expected);
}

#[rstest]
#[actix_web::test]
async fn correlation_id_is_echoed_on_errors(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::get()
        .uri(&uri("/ingredients/missing"))
        .insert_header((CORRELATION_ID_HEADER, "req-1234"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(
        response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some("req-1234")
    );
}

#[rstest]
#[actix_web::test]
async fn health_check_is_served_under_the_prefix(repository: InMemoryIngredientRepository) {
    let app = test::init_service(test_app(repository)).await;

    let request = test::TestRequest::get()
        .uri(&uri("/health/check"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}
