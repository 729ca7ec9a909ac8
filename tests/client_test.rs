//! HTTPクライアントテスト
//!
//! プロセス内に偽バックエンド（axum）を立てて検証

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query as QueryParams;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use minesweeper::client::BackendClient;
use minesweeper::config::Config;
use minesweeper::error::MinesweeperError;
use minesweeper::workflow;
use minesweeper_common::{ApiError, Phase, Query, ResultReport, RiskColor};
use serde_json::{json, Value};

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind TCP listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake backend failed");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String) -> BackendClient {
    BackendClient::new(&Config { base_url, timeout_seconds: 5 }).expect("client build failed")
}

fn joes_diner() -> Value {
    json!({
        "place_name": "Joe's Diner",
        "landmine_score": 7.26,
        "risk_level": "高度風險",
        "summary": "S",
        "key_negative_keywords": ["rude staff"],
        "positive_points": [],
        "details": {"historical_avg": 8.1, "recent_avg": 5.2, "total_reviews": 120, "trend_score": -1.3}
    })
}

/// 検索: キーワードがそのまま届き、候補が応答順で返る
#[tokio::test]
async fn test_search_sends_encoded_query() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let router = Router::new().route(
        "/search",
        get({
            let seen = seen.clone();
            move |QueryParams(params): QueryParams<HashMap<String, String>>| {
                let seen = seen.clone();
                async move {
                    seen.lock().unwrap().push(params.get("query").cloned().unwrap_or_default());
                    Json(json!([
                        {"place_id": "p2", "name": "Joe's Diner & Bar", "address": "台北市大安區"},
                        {"place_id": "p1", "name": "Joe's Diner", "address": "台北市中山區"}
                    ]))
                }
            }
        }),
    );
    let client = client_for(spawn_backend(router).await);

    let query = Query::parse(" Joe's Diner & Bar #2 ").unwrap();
    let candidates = client.search(&query).await.expect("search failed");

    assert_eq!(*seen.lock().unwrap(), vec!["Joe's Diner & Bar #2".to_string()]);
    let ids: Vec<&str> = candidates.iter().map(|c| c.place_id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
}

/// 検索: 0件はNotFound
#[tokio::test]
async fn test_search_empty_is_not_found() {
    let router = Router::new().route("/search", get(|| async { Json(json!([])) }));
    let client = client_for(spawn_backend(router).await);

    let err = workflow::search(&client, &Query::parse("無名小店").unwrap()).await.unwrap_err();
    assert!(matches!(err, MinesweeperError::NotFound));
}

/// 検索: detail付きのエラー応答
#[tokio::test]
async fn test_search_error_detail() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"detail": "Google Places API 金鑰未設定。"})),
            )
        }),
    );
    let client = client_for(spawn_backend(router).await);

    let err = client.search(&Query::parse("拉麵").unwrap()).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(Phase::Search), "搜尋失敗：Google Places API 金鑰未設定。");

    let err = workflow::search(&client, &Query::parse("拉麵").unwrap()).await.unwrap_err();
    assert_eq!(err.to_string(), "搜尋失敗：Google Places API 金鑰未設定。");
}

/// 検索: detailの無いエラー応答はステータスコードを含む
#[tokio::test]
async fn test_search_error_without_detail() {
    let router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let client = client_for(spawn_backend(router).await);

    let err = client.search(&Query::parse("拉麵").unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

/// 分析: JSONボディで place_id を送る
#[tokio::test]
async fn test_analyze_posts_place_id() {
    let seen = Arc::new(Mutex::new(Vec::<(String, String)>::new()));
    let router = Router::new().route(
        "/analyze",
        post({
            let seen = seen.clone();
            move |headers: HeaderMap, body: String| {
                let seen = seen.clone();
                async move {
                    let content_type = headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    seen.lock().unwrap().push((content_type, body));
                    Json(joes_diner())
                }
            }
        }),
    );
    let client = client_for(spawn_backend(router).await);

    let result = client.analyze("abc123").await.expect("analyze failed");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].0.starts_with("application/json"));
    let body: Value = serde_json::from_str(&seen[0].1).unwrap();
    assert_eq!(body, json!({"place_id": "abc123"}));

    let report = ResultReport::from(&result);
    assert_eq!(report.badge, "7.3");
    assert_eq!(report.color, RiskColor::Red);
}

/// 分析: エラー応答は「分析失敗：」付き
#[tokio::test]
async fn test_analyze_error() {
    let router = Router::new().route(
        "/analyze",
        post(|| async { (StatusCode::BAD_GATEWAY, Json(json!({}))) }),
    );
    let client = client_for(spawn_backend(router).await);

    let err = workflow::analyze(&client, "abc123").await.unwrap_err();
    assert_eq!(err.to_string(), "分析失敗：分析伺服器錯誤: 502");
}

/// 接続できない場合はTransportエラー
#[tokio::test]
async fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}", addr));
    let err = client.analyze("abc123").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.user_message(Phase::Analyze).starts_with("分析失敗："));
}
