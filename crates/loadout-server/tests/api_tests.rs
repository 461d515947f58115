//! Integration tests for the advisor API endpoints.
//!
//! Requests go straight to the `Router` through `tower::ServiceExt`, so no
//! TCP listener is needed.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use loadout_server::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let router = build_router(Arc::new(AppState::default()));
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_weapons() {
    let (status, body) = get("/api/weapons").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 21);
    let weapons = body["weapons"].as_array().unwrap();
    assert_eq!(weapons.len(), 21);
    assert!(weapons[0]["weapon"]["id"].is_string());
    assert!(weapons[0]["rangeBand"].is_string());

    let mods = body["mods"].as_array().unwrap();
    let silencer = mods.iter().find(|family| family["name"] == "Silencer").unwrap();
    assert_eq!(silencer["slot"], "Muzzle");
    assert_eq!(silencer["tiers"].as_array().unwrap().len(), 3);
    assert!(silencer["compatible"].as_array().unwrap().iter().any(|id| id == "renegade"));
}

#[tokio::test]
async fn test_advisor_defaults() {
    let (status, body) = get("/api/advisor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
    assert!(body.get("emptyState").is_none());
    assert_eq!(body["inputs"]["location"], "spaceport");
    let next = body["next"].as_str().unwrap();
    assert!(next.starts_with("?tab=advisor&"));
    assert!(next.contains("&sh="));
    assert!(next.ends_with("%3A2"));
}

#[tokio::test]
async fn test_advisor_top_pick() {
    let (status, body) =
        get("/api/advisor?tab=advisor&loc=spaceport&sq=solo&fc=pvp&rg=long&st=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendations"][0]["pairKey"], "renegade__anvil");
    assert!(body["recommendations"][0].get("debug").is_none());
}

#[tokio::test]
async fn test_advisor_follows_next_link() {
    let (_, first) = get("/api/advisor?loc=dam&sq=squad").await;
    let next = first["next"].as_str().unwrap().to_owned();
    let (status, second) = get(&format!("/api/advisor{next}")).await;
    assert_eq!(status, StatusCode::OK);

    let first_keys: Vec<&Value> = first["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|rec| &rec["pairKey"])
        .collect();
    for rec in second["recommendations"].as_array().unwrap() {
        assert!(!first_keys.contains(&&rec["pairKey"]));
    }
    assert_eq!(second["shuffleState"]["seenPairKeys"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_advisor_mismatched_cursor_starts_in_rank_order() {
    let (_, ranked) = get("/api/advisor/ranked").await;
    let ranked = ranked["ranked"].as_array().unwrap();

    let mut link = String::from("?sh=3%3A0");
    let mut shown = Vec::new();
    for _ in 0..4 {
        let (status, body) = get(&format!("/api/advisor{link}")).await;
        assert_eq!(status, StatusCode::OK);
        for rec in body["recommendations"].as_array().unwrap() {
            shown.push(rec["pairKey"].clone());
        }
        link = body["next"].as_str().unwrap().to_owned();
    }

    let expected: Vec<Value> = ranked.iter().take(8).map(|rec| rec["pairKey"].clone()).collect();
    assert_eq!(shown, expected);
}

#[tokio::test]
async fn test_advisor_batch_size() {
    let (_, body) = get("/api/advisor?n=5").await;
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);

    let (_, body) = get("/api/advisor?n=500").await;
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_advisor_bad_batch_size() {
    let (status, body) = get("/api/advisor?n=many").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("n must be"));
}

#[tokio::test]
async fn test_advisor_empty_state() {
    let (status, body) = get("/api/advisor?st=1&wr=l").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["recommendations"].as_array().unwrap().is_empty());
    assert_eq!(body["emptyState"]["code"], "INSUFFICIENT_VALID_WEAPONS");
}

#[tokio::test]
async fn test_advisor_debug_flag() {
    let (_, body) = get("/api/advisor?dbg=1").await;
    let rec = &body["recommendations"][0];
    assert!(rec["debug"]["primaryBreakdown"]["weightedTotal"].is_number());
}

#[tokio::test]
async fn test_ranked() {
    let (status, body) = get("/api/advisor/ranked?loc=blue_gate&sq=squad&fc=pve&rg=long&wr=l").await;
    assert_eq!(status, StatusCode::OK);
    let ranked = body["ranked"].as_array().unwrap();
    assert_eq!(ranked.len(), 6);
    assert_eq!(ranked[0]["pairKey"], "jupiter__equalizer");
    assert_eq!(ranked[0]["rank"], 1);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}
