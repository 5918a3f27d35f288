// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed lab data used to seed an empty database and to back the fallback store

use crate::lab::{LabCheckpoint, LabJournalEntry, LabModule};
use crate::status::{CheckpointStatus, JournalType, ModuleStatus};
use chrono::{DateTime, Utc};

fn at(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_default()
}

fn checkpoint(
    id: i64,
    module_id: i64,
    sort_order: i64,
    title: &str,
    status: CheckpointStatus,
    evidence: &str,
    updated_at: &str,
) -> LabCheckpoint {
    LabCheckpoint {
        id,
        module_id,
        title: title.to_string(),
        status,
        evidence: evidence.to_string(),
        sort_order,
        updated_at: at(updated_at),
    }
}

/// The four seed modules (`LZ-NET`, `AKS-BASE`, `IDENTITY`, `OBS`) with their checkpoints
pub fn modules() -> Vec<LabModule> {
    use CheckpointStatus::{Done, Todo};

    vec![
        LabModule {
            id: 1,
            code: "LZ-NET".to_string(),
            title: "Networking Foundation".to_string(),
            objective: "Validate hub-spoke topology, private DNS links, and AKS subnet routing."
                .to_string(),
            owner: "Platform Team".to_string(),
            status: ModuleStatus::Completed,
            sort_order: 1,
            updated_at: at("2026-02-15T15:40:00Z"),
            checkpoints: vec![
                checkpoint(
                    101,
                    1,
                    1,
                    "Hub and spoke VNets peered in both directions",
                    Done,
                    "terraform output vnet_peerings",
                    "2026-02-15T14:20:00Z",
                ),
                checkpoint(
                    102,
                    1,
                    2,
                    "Private DNS zone linked to spoke VNet",
                    Done,
                    "az network private-dns link vnet list",
                    "2026-02-15T14:45:00Z",
                ),
            ],
        },
        LabModule {
            id: 2,
            code: "AKS-BASE".to_string(),
            title: "AKS Baseline".to_string(),
            objective: "Deploy AKS cluster, node pools, and baseline policies through Terraform."
                .to_string(),
            owner: "Platform Team".to_string(),
            status: ModuleStatus::InProgress,
            sort_order: 2,
            updated_at: at("2026-02-16T11:30:00Z"),
            checkpoints: vec![
                checkpoint(
                    201,
                    2,
                    1,
                    "Cluster deployed with Azure CNI Overlay",
                    Done,
                    "kubectl get nodes -o wide",
                    "2026-02-16T09:10:00Z",
                ),
                checkpoint(
                    202,
                    2,
                    2,
                    "System and workload node pools labeled",
                    Todo,
                    "Pending pool taint review",
                    "2026-02-16T11:20:00Z",
                ),
                checkpoint(
                    203,
                    2,
                    3,
                    "Cluster autoscaler min/max tuned",
                    Todo,
                    "Need load profile from sample apps",
                    "2026-02-16T11:30:00Z",
                ),
            ],
        },
        LabModule {
            id: 3,
            code: "IDENTITY".to_string(),
            title: "Identity and Secrets".to_string(),
            objective: "Enable workload identity and Key Vault CSI integration for workloads."
                .to_string(),
            owner: "Security Team".to_string(),
            status: ModuleStatus::Planned,
            sort_order: 3,
            updated_at: at("2026-02-17T08:15:00Z"),
            checkpoints: vec![
                checkpoint(
                    301,
                    3,
                    1,
                    "OIDC issuer enabled and validated",
                    Todo,
                    "Not started",
                    "2026-02-17T08:15:00Z",
                ),
                checkpoint(
                    302,
                    3,
                    2,
                    "Federated credential created for app namespace",
                    Todo,
                    "Not started",
                    "2026-02-17T08:15:00Z",
                ),
            ],
        },
        LabModule {
            id: 4,
            code: "OBS".to_string(),
            title: "Observability Stack".to_string(),
            objective: "Collect logs/metrics and expose a focused dashboard for lab health."
                .to_string(),
            owner: "SRE Team".to_string(),
            status: ModuleStatus::Blocked,
            sort_order: 4,
            updated_at: at("2026-02-18T04:05:00Z"),
            checkpoints: vec![
                checkpoint(
                    401,
                    4,
                    1,
                    "Prometheus scrape config applied",
                    Done,
                    "targets up in /api/metrics",
                    "2026-02-17T20:50:00Z",
                ),
                checkpoint(
                    402,
                    4,
                    2,
                    "Grafana dashboard imported",
                    Todo,
                    "Blocked by admin role assignment",
                    "2026-02-18T04:05:00Z",
                ),
            ],
        },
    ]
}

/// The three seed journal entries, oldest first
pub fn journal() -> Vec<LabJournalEntry> {
    vec![
        LabJournalEntry {
            id: 1,
            entry_type: JournalType::Deploy,
            message: "Applied Terraform for base networking and confirmed spoke connectivity."
                .to_string(),
            created_at: at("2026-02-15T16:00:00Z"),
        },
        LabJournalEntry {
            id: 2,
            entry_type: JournalType::Validate,
            message: "Validated cluster API reachability and node registration from jump host."
                .to_string(),
            created_at: at("2026-02-16T10:20:00Z"),
        },
        LabJournalEntry {
            id: 3,
            entry_type: JournalType::Incident,
            message:
                "Monitoring rollout paused: missing `Monitoring Metrics Publisher` role on workspace."
                    .to_string(),
            created_at: at("2026-02-18T04:10:00Z"),
        },
    ]
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
