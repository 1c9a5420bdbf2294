#![cfg(feature = "server")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Route contract for the JSON endpoints.
//!
//! tests/fixtures/api_routes.txt lists every `METHOD /path` the server must
//! answer. Each entry is sent through the real router, so a renamed or
//! dropped handler fails here instead of in the browser.
//!
//! Run with: cargo test --test api_contract

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;

use state_routing_demo::config::Config;
use state_routing_demo::server::api_router;

const GOLDEN: &str = include_str!("fixtures/api_routes.txt");

fn contract() -> Vec<(Method, &'static str)> {
    GOLDEN
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (method, path) = line
                .split_once(' ')
                .unwrap_or_else(|| panic!("malformed contract line: {line:?}"));
            (method.parse().unwrap(), path)
        })
        .collect()
}

#[tokio::test]
async fn every_contract_route_answers() {
    let routes = contract();
    assert!(!routes.is_empty(), "api_routes.txt lists no routes");

    let app = api_router(Arc::new(Config::default()));
    let mut failures = Vec::new();

    for (method, path) in routes {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        if response.status() != StatusCode::OK {
            failures.push(format!("{method} {path} -> {}", response.status()));
        }
    }

    assert!(
        failures.is_empty(),
        "routes in tests/fixtures/api_routes.txt no longer answer:\n  {}",
        failures.join("\n  ")
    );
}

#[tokio::test]
async fn unlisted_path_is_not_served() {
    let app = api_router(Arc::new(Config::default()));
    assert!(!GOLDEN.contains("/api/profile"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn golden_file_is_sorted() {
    let lines: Vec<String> = contract()
        .into_iter()
        .map(|(method, path)| format!("{method} {path}"))
        .collect();

    let mut sorted = lines.clone();
    sorted.sort();

    assert_eq!(lines, sorted, "keep api_routes.txt sorted");
}
