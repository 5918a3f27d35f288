// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

fn count_modules(conn: &mut Connection) -> Result<i64, RepoError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM lab_modules", [], |row| row.get(0))?)
}

#[tokio::test]
async fn unconfigured_pool_reports_not_configured() {
    let pool = SqlPool::unconfigured();
    assert!(!pool.is_configured());
    let err = pool.with_conn(count_modules).await.unwrap_err();
    assert!(matches!(err, RepoError::NotConfigured));
    assert_eq!(pool.provision_count(), 0);
}

#[tokio::test]
async fn first_use_opens_and_provisions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lab.db");
    let pool = SqlPool::open(&path);
    assert_eq!(pool.provision_count(), 0);
    assert!(!path.exists());

    assert_eq!(pool.with_conn(count_modules).await.unwrap(), 4);
    assert!(path.exists());
    assert_eq!(pool.provision_count(), 1);

    // Reuses the same connection
    pool.with_conn(count_modules).await.unwrap();
    assert_eq!(pool.provision_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_callers_provision_once() {
    let dir = TempDir::new().unwrap();
    let pool = Arc::new(SqlPool::open(dir.path().join("lab.db")));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let pool = Arc::clone(&pool);
        handles.push(tokio::spawn(
            async move { pool.with_conn(count_modules).await },
        ));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 4);
    }
    assert_eq!(pool.provision_count(), 1);
}

#[tokio::test]
async fn failed_open_is_retried() {
    let dir = TempDir::new().unwrap();
    let missing_parent = dir.path().join("not-yet").join("lab.db");
    let pool = SqlPool::open(&missing_parent);

    let err = pool.with_conn(count_modules).await.unwrap_err();
    assert!(matches!(err, RepoError::Sqlite(_)));
    assert_eq!(pool.provision_count(), 0);

    std::fs::create_dir_all(dir.path().join("not-yet")).unwrap();
    assert_eq!(pool.with_conn(count_modules).await.unwrap(), 4);
    assert_eq!(pool.provision_count(), 1);
}

#[test]
fn path_is_exposed() {
    let pool = SqlPool::open("/tmp/lab.db");
    assert_eq!(pool.path(), Some(Path::new("/tmp/lab.db")));
}
