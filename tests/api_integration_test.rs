//! End-to-end flows through the real router: add, refresh, valuation,
//! deletion and price-history reads, with a fake quote provider and an
//! in-memory database behind the app state.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use portfolio_tracker::app::create_app;
use portfolio_tracker::db;
use portfolio_tracker::external::quote_provider::{Quote, QuoteOutcome, QuoteProvider};
use portfolio_tracker::services::sync_scheduler::SyncScheduler;
use portfolio_tracker::state::AppState;

struct FixedPriceProvider(f64);

#[async_trait]
impl QuoteProvider for FixedPriceProvider {
    async fn fetch_quote(&self, symbol: &str) -> QuoteOutcome {
        Ok(Quote {
            symbol: symbol.to_string(),
            price: self.0,
            change: 0.0,
            change_percent: 0.0,
        })
    }
}

async fn test_state(quote_price: f64) -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    db::init_schema(&pool).await.expect("schema");
    let scheduler = SyncScheduler::new(pool.clone(), Arc::new(FixedPriceProvider(quote_price)));
    AppState { pool, scheduler }
}

async fn response_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_is_alive() {
    let app = create_app(test_state(1.0).await);
    let res = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn add_refresh_and_value_flow() {
    let app = create_app(test_state(160.0).await);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "aapl", "quantity": 10.0, "entry_price": 150.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = response_json(res).await;
    assert_eq!(created["symbol"], "AAPL");
    // Entry price stands in until the first sync.
    assert_eq!(created["current_price"], 150.0);

    let res = app
        .clone()
        .oneshot(empty_request("POST", "/api/prices/refresh"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let refresh = response_json(res).await;
    assert_eq!(refresh["triggered"], true);
    assert_eq!(refresh["state"], "idle");
    assert_eq!(refresh["report"]["updated"], 1);
    assert_eq!(refresh["report"]["failed"], 0);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/portfolio"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed = response_json(res).await;
    let position = &listed.as_array().unwrap()[0];
    assert_eq!(position["current_price"], 160.0);
    assert_eq!(position["value"], 1600.0);
    assert_eq!(position["gain"], 100.0);
    let gain_pct = position["gain_pct"].as_f64().unwrap();
    assert!((gain_pct - 6.6667).abs() < 0.001, "gain_pct was {gain_pct}");
    assert_eq!(position["priced"], true);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/portfolio/summary"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let summary = response_json(res).await;
    assert_eq!(summary["total_value"], 1600.0);
    assert_eq!(summary["total_gain"], 100.0);
    let total_gain_pct = summary["total_gain_pct"].as_f64().unwrap();
    assert!((total_gain_pct - 6.6667).abs() < 0.001);
    assert!(summary["last_updated"].is_string());
}

#[tokio::test]
async fn duplicate_symbol_is_a_conflict() {
    let app = create_app(test_state(100.0).await);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "TSLA", "quantity": 1.0, "entry_price": 200.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Same symbol in a different case is still a duplicate.
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "tsla", "quantity": 2.0, "entry_price": 150.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn rejects_non_positive_quantity_and_price() {
    let app = create_app(test_state(100.0).await);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "TSLA", "quantity": 0.0, "entry_price": 200.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "TSLA", "quantity": 1.0, "entry_price": -5.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_re_add_flow() {
    let app = create_app(test_state(100.0).await);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "AAPL", "quantity": 10.0, "entry_price": 150.0}),
        ))
        .await
        .unwrap();
    let created = response_json(res).await;
    let id = created["id"].as_str().expect("uuid id").to_string();

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/portfolio/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/portfolio"))
        .await
        .unwrap();
    let listed = response_json(res).await;
    assert!(listed.as_array().unwrap().is_empty());

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/portfolio/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Uniqueness is checked against live rows, not historically deleted ones.
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "AAPL", "quantity": 1.0, "entry_price": 100.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn price_history_is_ordered_and_append_only() {
    let app = create_app(test_state(50.0).await);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/portfolio/add",
            &json!({"symbol": "NVDA", "quantity": 3.0, "entry_price": 40.0}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    for _ in 0..2 {
        let res = app
            .clone()
            .oneshot(empty_request("POST", "/api/prices/refresh"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/prices/NVDA"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let history = response_json(res).await;
    let rows = history.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows
        .windows(2)
        .all(|pair| pair[0]["recorded_at"].as_str() <= pair[1]["recorded_at"].as_str()));

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/prices/NVDA/latest"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let latest = response_json(res).await;
    assert_eq!(latest["price"], 50.0);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/prices/MSFT/latest"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
