//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles against the router and a live server.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tee_storefront::{
    api::create_router,
    cart::{FileStorage, KeyValueStorage, MemoryStorage, CART_KEY},
    catalog::Catalog,
    AppState,
};
use tempfile::tempdir;
use tower::ServiceExt;

// == Helper Functions ==

fn memory_state() -> AppState {
    AppState::new(Catalog::seeded(), Arc::new(MemoryStorage::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn ids(json: &Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

// == Product Endpoint Tests ==

#[tokio::test]
async fn test_products_basic_under_thirty() {
    let app = create_router(memory_state());

    let (status, json) = send(&app, get("/api/products?category=basic&maxPrice=30")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec!["1"]);
    assert_eq!(json[0]["name"], "Classic Drop Shoulder Tee");
    assert_eq!(json[0]["price"], "29.99");
}

#[tokio::test]
async fn test_products_featured_with_limit() {
    let app = create_router(memory_state());

    let (status, json) = send(&app, get("/api/products?featured=true&limit=2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec!["1", "2"]);
}

#[tokio::test]
async fn test_products_price_range() {
    let app = create_router(memory_state());

    let (_, json) = send(&app, get("/api/products?minPrice=40&maxPrice=50")).await;
    assert_eq!(ids(&json), vec!["5", "7"]);
}

#[tokio::test]
async fn test_products_invalid_price() {
    let app = create_router(memory_state());

    let (status, json) = send(&app, get("/api/products?minPrice=ten")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("minPrice"));
}

#[tokio::test]
async fn test_product_detail() {
    let app = create_router(memory_state());

    let (status, json) = send(&app, get("/api/products/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "limited");
    assert_eq!(json["sizes"].as_array().unwrap().len(), 4);

    let (status, json) = send(&app, get("/api/products/70")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_categories() {
    let app = create_router(memory_state());

    let (_, json) = send(&app, get("/api/categories")).await;
    assert_eq!(
        json["categories"],
        serde_json::json!(["basic", "oversized", "graphic", "limited"])
    );
}

// == Cart Endpoint Tests ==

#[tokio::test]
async fn test_add_same_line_twice_merges() {
    let app = create_router(memory_state());
    let body = r#"{"productId":1,"quantity":2,"color":"black","size":"m"}"#;

    send(&app, json_request("POST", "/api/cart/items", body)).await;
    let (status, json) = send(&app, json_request("POST", "/api/cart/items", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["quantity"], 4);
    assert_eq!(json["itemCount"], 4);
    assert_eq!(json["subtotal"], "119.96");
}

#[tokio::test]
async fn test_remove_first_of_two() {
    let app = create_router(memory_state());
    send(&app, json_request("POST", "/api/cart/items", r#"{"productId":"1"}"#)).await;
    send(&app, json_request("POST", "/api/cart/items", r#"{"productId":"2"}"#)).await;

    let (status, json) = send(&app, delete("/api/cart/items/0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["product"]["id"], "2");
}

#[tokio::test]
async fn test_update_quantity_rules() {
    let app = create_router(memory_state());
    send(&app, json_request("POST", "/api/cart/items", r#"{"productId":"3"}"#)).await;

    let (status, json) = send(
        &app,
        json_request("PATCH", "/api/cart/items/0", r#"{"quantity":5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["quantity"], 5);

    // Below one is silently ignored
    let (status, json) = send(
        &app,
        json_request("PATCH", "/api/cart/items/0", r#"{"quantity":0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["quantity"], 5);

    let (status, _) = send(
        &app,
        json_request("PATCH", "/api/cart/items/3", r#"{"quantity":2}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_index_returns_json_error() {
    let app = create_router(memory_state());
    send(&app, json_request("POST", "/api/cart/items", r#"{"productId":"1"}"#)).await;

    for uri in ["/api/cart/items/-1", "/api/cart/items/x"] {
        let (status, json) = send(&app, delete(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("Invalid cart index"));

        let (status, json) = send(&app, json_request("PATCH", uri, r#"{"quantity":2}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json.get("error").is_some());
    }

    let (_, json) = send(&app, get("/api/cart")).await;
    assert_eq!(json["itemCount"], 1);
}

#[tokio::test]
async fn test_add_rejects_zero_and_unknown() {
    let app = create_router(memory_state());

    let (status, _) = send(
        &app,
        json_request("POST", "/api/cart/items", r#"{"productId":"1","quantity":0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request("POST", "/api/cart/items", r#"{"productId":"404"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = send(&app, get("/api/cart")).await;
    assert_eq!(json["itemCount"], 0);
}

#[tokio::test]
async fn test_summary_and_clear() {
    let app = create_router(memory_state());
    send(&app, json_request("POST", "/api/cart/items", r#"{"productId":"1"}"#)).await;

    let (_, json) = send(&app, get("/api/cart/summary")).await;
    assert_eq!(json["subtotal"], "29.99");
    assert_eq!(json["shipping"], "5.99");
    assert_eq!(json["tax"], "2.40");
    assert_eq!(json["total"], "38.38");
    assert_eq!(json["freeShippingRemaining"], "45.01");

    let (status, json) = send(&app, delete("/api/cart")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["itemCount"], 0);

    let (_, json) = send(&app, get("/api/cart/summary")).await;
    assert_eq!(json["shipping"], "0");
}

// == Persistence Tests ==

#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempdir().unwrap();

    {
        let state = AppState::new(Catalog::seeded(), Arc::new(FileStorage::new(dir.path())));
        let app = create_router(state);
        send(
            &app,
            json_request("POST", "/api/cart/items", r#"{"productId":"6","size":"l"}"#),
        )
        .await;
        send(
            &app,
            json_request("POST", "/api/cart/items", r#"{"productId":"2","quantity":3}"#),
        )
        .await;
    }

    let state = AppState::new(Catalog::seeded(), Arc::new(FileStorage::new(dir.path())));
    let app = create_router(state);
    let (_, json) = send(&app, get("/api/cart")).await;

    assert_eq!(json["items"][0]["product"]["id"], "6");
    assert_eq!(json["items"][0]["size"], "l");
    assert_eq!(json["items"][1]["quantity"], 3);
    assert_eq!(json["itemCount"], 4);
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(CART_KEY, "[{\"product\":").unwrap();

    let app = create_router(AppState::new(Catalog::seeded(), storage));
    let (status, json) = send(&app, get("/api/cart")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"], serde_json::json!([]));
}

#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    let app = create_router(memory_state());
    let body = r#"{"productId":"8","quantity":1}"#;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.oneshot(json_request("POST", "/api/cart/items", body))
                .await
                .unwrap()
                .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let (_, json) = send(&app, get("/api/cart")).await;
    assert_eq!(json["items"][0]["quantity"], 20);
}

// == Live Server Test ==

#[tokio::test]
async fn test_live_server_roundtrip() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(memory_state());
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");

    let cart: Value = client
        .post(format!("{}/api/cart/items", base))
        .json(&serde_json::json!({ "productId": "4", "quantity": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["itemCount"], 2);
    assert_eq!(cart["subtotal"], "79.98");

    server.abort();
}
