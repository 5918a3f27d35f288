// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn module_status_round_trips_through_str() {
    for status in ModuleStatus::ALL {
        assert_eq!(status.as_str().parse::<ModuleStatus>(), Ok(status));
    }
}

#[test]
fn checkpoint_status_round_trips_through_str() {
    for status in CheckpointStatus::ALL {
        assert_eq!(status.to_string().parse::<CheckpointStatus>(), Ok(status));
    }
}

#[test]
fn journal_type_round_trips_through_str() {
    for kind in JournalType::ALL {
        assert_eq!(kind.as_str().parse::<JournalType>(), Ok(kind));
    }
}

#[parameterized(
    bogus = { "bogus" },
    empty = { "" },
    wrong_case = { "Completed" },
    hyphenated = { "in-progress" },
)]
fn module_status_rejects(raw: &str) {
    assert_eq!(
        raw.parse::<ModuleStatus>(),
        Err(LabError::InvalidModuleStatus(raw.to_string()))
    );
}

#[test]
fn checkpoint_status_rejects_unknown() {
    assert!(matches!(
        "finished".parse::<CheckpointStatus>(),
        Err(LabError::InvalidCheckpointStatus(s)) if s == "finished"
    ));
}

#[test]
fn journal_type_rejects_unknown() {
    assert!(matches!(
        "alert".parse::<JournalType>(),
        Err(LabError::InvalidJournalType(_))
    ));
}

#[test]
fn stored_values_fall_back_leniently() {
    assert_eq!(ModuleStatus::from_stored("archived"), ModuleStatus::Planned);
    assert_eq!(CheckpointStatus::from_stored("skipped"), CheckpointStatus::Todo);
    assert_eq!(JournalType::from_stored("alert"), JournalType::Note);
    assert_eq!(ModuleStatus::from_stored("blocked"), ModuleStatus::Blocked);
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&ModuleStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
    let parsed: JournalType = serde_json::from_str("\"incident\"").unwrap();
    assert_eq!(parsed, JournalType::Incident);
}
