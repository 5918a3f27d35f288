// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::fake::FailingLabRepository;
use crate::memory::MemoryLabRepository;
use lh_core::FakeClock;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a future with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn memory() -> TracedLabRepository<MemoryLabRepository<FakeClock>> {
    TracedLabRepository::new(MemoryLabRepository::with_clock(FakeClock::new()), "memory")
}

#[test]
fn passes_results_through() {
    let traced = memory();
    let (_, modules) = with_tracing(|| traced.list_modules());
    assert_eq!(modules.unwrap().len(), 4);
}

#[test]
fn logs_module_update_with_span_fields() {
    let traced = memory();
    let (logs, result) =
        with_tracing(|| traced.update_module_status(2, ModuleStatus::Completed));
    assert!(result.unwrap().is_some());
    assert!(logs.contains("lab.update_module_status"), "{}", logs);
    assert!(logs.contains("backend=\"memory\""), "{}", logs);
    assert!(logs.contains("module updated"), "{}", logs);
    assert!(logs.contains("elapsed_ms"), "{}", logs);
}

#[test]
fn logs_not_found() {
    let traced = memory();
    let (logs, result) =
        with_tracing(|| traced.update_checkpoint_status(9, CheckpointStatus::Done));
    assert!(result.unwrap().is_none());
    assert!(logs.contains("checkpoint not found"), "{}", logs);
}

#[test]
fn failures_are_logged_as_warnings() {
    let traced = TracedLabRepository::new(FailingLabRepository::new(), "sql");
    let (logs, result) = with_tracing(|| traced.list_modules());
    assert!(result.is_err());
    assert!(logs.contains("WARN"), "{}", logs);
    assert!(logs.contains("injected failure"), "{}", logs);
    assert_eq!(traced.inner().calls().len(), 1);
}

#[test]
fn journal_append_logs_created_id() {
    let traced = memory();
    let entry = NewJournalEntry::parse("validate", "probe ok").unwrap();
    let (logs, result) = with_tracing(|| traced.create_journal_entry(entry));
    assert_eq!(result.unwrap().id, 4);
    assert!(logs.contains("entry_type=validate"), "{}", logs);
    assert!(logs.contains("entry created"), "{}", logs);
}
