// ABOUTME: Tests for the typed recipe client's wire encoding and live calls
// ABOUTME: Serves the router on a local port and drives it through reqwest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use helpers::test_utils::{lunch_and_dinner, router, seeded_database};
use larder_core::errors::ErrorCode;
use larder_query::TimeBucket;
use larder_server::client::{RecipeApiClient, RecipeListRequest};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[test]
fn test_absent_fields_encode_as_all() {
    let encoded = serde_urlencoded::to_string(RecipeListRequest::new().to_filter_request()).unwrap();
    assert_eq!(encoded, "searchQuery=&meal=All&cuisine=All&diet=All&time=All");
}

#[test]
fn test_set_fields_encode_verbatim() {
    let request = RecipeListRequest::new()
        .search("green curry")
        .cuisine("Thai")
        .time(TimeBucket::From31To60);
    let encoded = serde_urlencoded::to_string(request.to_filter_request()).unwrap();
    assert_eq!(
        encoded,
        "searchQuery=green+curry&meal=All&cuisine=Thai&diet=All&time=60"
    );
}

async fn spawn_server() -> String {
    let db = seeded_database(&lunch_and_dinner(), &[]).await;
    let app = router(db);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_client_lists_and_fetches() {
    let client = RecipeApiClient::new(spawn_server().await);

    let lunch = client
        .list_recipes(&RecipeListRequest::new().meal("Lunch").time(TimeBucket::From15To30))
        .await
        .unwrap();
    assert_eq!(lunch.len(), 1);
    assert_eq!(lunch[0].id, "a");

    let everything = client.list_recipes(&RecipeListRequest::new()).await.unwrap();
    assert_eq!(everything.len(), 2);

    assert!(client.get_recipe("b").await.unwrap().is_some());
    assert!(client.get_recipe("missing").await.unwrap().is_none());
    assert!(client.seasonal_recipes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RecipeApiClient::with_timeout(format!("http://{addr}"), Duration::from_secs(2));
    let err = client
        .list_recipes(&RecipeListRequest::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_truncated_error_body_keeps_the_read_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0_u8; 1024];
        let _ = socket.read(&mut buf).await.unwrap();
        // Promise more bytes than are sent, then hang up
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = RecipeApiClient::with_timeout(format!("http://{addr}"), Duration::from_secs(5));
    let err = client.seasonal_recipes().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("Failed to read response body"), "{}", err.message);
    assert!(err.message.contains("500"), "{}", err.message);
}
