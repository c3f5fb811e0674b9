//! HTTP surface tests over the composed router.
//!
//! These exercise request handling up to the store boundary: routing,
//! extraction, validation, and error rendering. The pool is lazy and points
//! at a closed port, so anything that reaches the database surfaces the
//! store failure path.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

async fn test_app() -> axum::Router {
    // Port 1 is never a Postgres; acquiring a connection fails fast
    let pool = sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy("postgres://reclaim@127.0.0.1:1/reclaim_test")
        .expect("lazy pool construction should not touch the network");

    reclaim_app::create_app(pool)
        .await
        .expect("router should compose without a live database")
}

#[test_log::test(tokio::test)]
async fn health_check_responds_ok() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn unknown_route_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn delete_without_confirmation_is_rejected_before_the_store() {
    let app = test_app().await;
    let uri = format!("/v1/admin/items/{}", Uuid::new_v4());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    // No live database behind this app: a 400 here proves the request was
    // refused before any store call
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn delete_with_malformed_id_is_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/v1/admin/items/not-a-uuid?confirm=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn status_update_with_unknown_status_is_rejected() {
    let app = test_app().await;
    let uri = format!("/v1/admin/items/{}/status", Uuid::new_v4());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"status": "lost"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    // "lost" is an item type, not a status; deserialization refuses it
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_log::test(tokio::test)]
async fn status_update_surfaces_store_failure() {
    let app = test_app().await;
    let uri = format!("/v1/admin/items/{}/status", Uuid::new_v4());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"status": "claimed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    // The pool points nowhere; the remote failure renders as a 500
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_log::test(tokio::test)]
async fn contact_request_is_validated_before_the_store() {
    let app = test_app().await;
    let uri = format!("/v1/items/{}/contact", Uuid::new_v4());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name": "", "email": "not-an-email", "message": ""}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn listing_rejects_unknown_filter_values() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/items?type=stolen")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
