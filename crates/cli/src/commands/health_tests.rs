// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use lh_storage::{FailingLabRepository, MemoryLabRepository};

#[tokio::test]
async fn failing_primary_is_degraded() {
    let store = LabStore::new(FailingLabRepository::new(), MemoryLabRepository::new());
    assert!(!handle(&store, OutputFormat::Json).await);

    let text = HealthView(store.health().await).to_string();
    assert!(text.contains("status: degraded"));
    assert!(text.contains("sql:    error"));
    assert!(text.contains("injected failure"));
}

#[tokio::test]
async fn memory_primary_is_connected() {
    let store = LabStore::new(MemoryLabRepository::new(), MemoryLabRepository::new());
    assert!(handle(&store, OutputFormat::Text).await);
}

#[test]
fn json_uses_snake_case_states() {
    let health = BackendHealth {
        status: lh_storage::HealthStatus::Healthy,
        sql: BackendStatus::NotConfigured,
        error: None,
    };
    let json = serde_json::to_value(HealthView(health)).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["sql"], "not_configured");
    assert!(json.get("error").is_none());
}
