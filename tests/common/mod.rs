//! Shared test utilities for integration tests.
//!
//! This module provides a `TestClient` that drives the router against a fresh
//! in-memory database. Helpers are intentionally broad so each test file can
//! pick what it needs.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pensions_tracker::db::{create_in_memory_pool, migrations};
use pensions_tracker::handlers;
use pensions_tracker::state::AppState;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;

pub struct TestClient {
    pub state: AppState,
}

impl TestClient {
    /// Create a new test client with a fresh in-memory database.
    pub fn new() -> Self {
        let pool = create_in_memory_pool().expect("Failed to create in-memory pool");
        {
            let conn = pool.get().expect("Failed to get connection");
            migrations::run_migrations(&conn, Path::new("migrations"))
                .expect("Failed to run migrations");
        }

        let state = AppState { db: pool };

        Self { state }
    }

    pub fn router(&self) -> Router {
        handlers::routes().with_state(self.state.clone())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router().oneshot(request).await.unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Make a body-less POST request.
    pub async fn post(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// POST a JSON document and return status and body.
    pub async fn post_json(&self, uri: &str, value: &Value) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
        )
        .await
    }

    /// GET an endpoint and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, parsed)
    }

    // =========================================================================
    // Helper methods for creating entities through the API
    // =========================================================================

    /// Create a provider and return its id.
    pub async fn create_provider(&self, name: &str) -> i64 {
        let (status, body) = self
            .post_json("/api/providers", &json!({ "name": name, "notes": "" }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create provider: {}", body);
        id_of(&body)
    }

    /// Create a pot (optionally under a provider) and return its id.
    pub async fn create_pot(&self, name: &str, provider_id: Option<i64>) -> i64 {
        let (status, body) = self
            .post_json(
                "/api/pots",
                &json!({
                    "providerId": provider_id,
                    "name": name,
                    "currency": "GBP",
                    "status": "ACTIVE",
                    "planNumber": "PN123",
                    "schemeNumber": "SN123"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create pot: {}", body);
        id_of(&body)
    }

    /// Record a balance snapshot; returns success.
    pub async fn create_snapshot(&self, pot_id: i64, date: &str, balance: f64) -> bool {
        let (status, _) = self
            .post_json(
                "/api/snapshots",
                &json!({
                    "potId": pot_id,
                    "date": date,
                    "balance": balance,
                    "source": "USER",
                    "note": "Some note"
                }),
            )
            .await;
        status == StatusCode::CREATED
    }

    /// Record a transaction; returns the response status.
    pub async fn create_transaction(
        &self,
        pot_id: i64,
        date: &str,
        transaction_type: &str,
        amount: f64,
    ) -> StatusCode {
        let (status, _) = self
            .post_json(
                "/api/transactions",
                &json!({
                    "potId": pot_id,
                    "date": date,
                    "type": transaction_type,
                    "amount": amount,
                    "note": transaction_type
                }),
            )
            .await;
        status
    }
}

pub fn id_of(body: &str) -> i64 {
    let value: Value = serde_json::from_str(body).expect("response is not JSON");
    value["id"].as_i64().expect("response has no id")
}
