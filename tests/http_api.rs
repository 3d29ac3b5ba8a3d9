mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use chrono::Duration;
use serde_json::{Value, json};
use tower::ServiceExt;

use marketplace_cart_api::{
    app::build_router, config::AppConfig, middleware::auth::issue_token, state::AppState,
};

use common::{SECRET, state};

fn token(user_id: &str) -> String {
    issue_token(SECRET, user_id, "customer", Duration::hours(1)).expect("token")
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

fn widget(product_id: &str, quantity: i64) -> Value {
    json!({
        "productId": product_id,
        "quantity": quantity,
        "product": { "name": "Widget", "price": 10, "image": "/w.png", "size": "L" }
    })
}

#[tokio::test]
async fn cart_round_trip_over_http() {
    let app = build_router(state());
    let t = token("u1");
    let auth = Some(t.as_str());

    let (status, body) = send(&app, Method::POST, "/api/cart", auth, Some(widget("p1", 2))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
    let line = &body["data"][0];
    assert_eq!(line["productId"], "p1");
    assert_eq!(line["quantity"], 2);
    assert_eq!(line["product"]["name"], "Widget");
    assert_eq!(line["product"]["inStock"], true);
    assert_eq!(line["product"]["size"], "L");
    assert!(line["product"].get("originalPrice").is_none());
    assert!(line["addedAt"].is_string());

    let (_, body) = send(&app, Method::POST, "/api/cart", auth, Some(widget("p1", 3))).await;
    assert_eq!(body["data"][0]["quantity"], 5);
    let item_id = body["data"][0]["id"].as_str().expect("item id").to_string();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/cart/{item_id}"),
        auth,
        Some(json!({ "quantity": -10, "mode": "delta" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["quantity"], 1);

    let (status, body) = send(&app, Method::GET, "/api/cart/summary", auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["units"], 1);

    let (status, body) = send(&app, Method::DELETE, "/api/cart", auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let app = build_router(state());
    let t = token("u1");
    let auth = Some(t.as_str());

    let (status, _) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/cart", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::POST, "/api/cart", auth, Some(widget("p1", 0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/cart/missing",
        auth,
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/cart/missing",
        auth,
        Some(json!({ "quantity": 2, "mode": "double" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/nowhere", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wishlist_over_http() {
    let app = build_router(state());
    let t = token("u1");
    let auth = Some(t.as_str());
    let entry = json!({
        "productId": "p1",
        "product": { "name": "Widget", "price": 10, "color": "blue" }
    });

    let (status, body) = send(&app, Method::POST, "/api/wishlist", auth, Some(entry.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["productId"], "p1");
    assert!(body["data"][0].get("quantity").is_none());
    assert!(body["data"][0]["product"].get("color").is_none());

    let (status, _) = send(&app, Method::POST, "/api/wishlist", auth, Some(entry)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, Method::GET, "/api/wishlist/p1/exists", auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["exists"], true);

    let (status, body) = send(&app, Method::GET, "/api/wishlist/p1/exists", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["exists"], false);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/wishlist/p1/exists",
        Some("garbage.token.value"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["exists"], false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/wishlist/p1/move-to-cart",
        auth,
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["quantity"], 2);

    let (_, body) = send(&app, Method::GET, "/api/wishlist", auth, None).await;
    assert_eq!(body["data"], json!([]));

    let (status, _) = send(&app, Method::DELETE, "/api/wishlist/p1", auth, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = build_router(state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn move_to_cart_body_is_optional_but_validated() {
    let app = build_router(state());
    let t = token("u1");
    let auth = Some(t.as_str());
    for product_id in ["p1", "p2"] {
        let entry = json!({
            "productId": product_id,
            "product": { "name": "Widget", "price": 10 }
        });
        let (status, _) = send(&app, Method::POST, "/api/wishlist", auth, Some(entry)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/wishlist/p1/move-to-cart",
        auth,
        Some(json!({ "quantity": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad Request");
    assert!(body["data"]["error"].is_string());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/wishlist/p1/move-to-cart",
        auth,
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (status, body) =
        send(&app, Method::POST, "/api/wishlist/p1/move-to-cart", auth, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["productId"], "p1");
    assert_eq!(body["data"][0]["quantity"], 1);

    let (_, body) = send(&app, Method::GET, "/api/wishlist", auth, None).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["productId"], "p2");
}

#[tokio::test]
async fn oversized_body_gets_error_envelope() {
    let mut config = AppConfig::with_secret(SECRET);
    config.body_limit_bytes = 64;
    let app = build_router(AppState::in_memory(config));
    let t = token("u1");

    let payload = json!({
        "productId": "p1",
        "product": { "name": "x".repeat(256), "price": 10 }
    })
    .to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cart")
        .header(header::AUTHORIZATION, format!("Bearer {t}"))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["message"], "Payload Too Large");
    assert!(body["data"]["error"].is_string());
}
