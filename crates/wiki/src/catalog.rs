// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed vocabularies the page generator rotates through

use serde::Serialize;
use std::fmt;

/// Total number of generated pages
pub const TOTAL_WIKI_PAGES: u32 = 1000;
/// Pages grouped under each module
pub const PAGES_PER_MODULE: u32 = 20;
/// Number of modules
pub const TOTAL_MODULES: u32 = TOTAL_WIKI_PAGES / PAGES_PER_MODULE;

/// Module themes; module `m` uses `THEMES[(m - 1) % 12]`, cycling after 12 modules.
pub const MODULE_THEMES: [&str; 12] = [
    "Platform Bootstrap",
    "Core Cluster Networking",
    "Private Access and DNS",
    "Identity Federation",
    "Secret Distribution",
    "Policy Guardrails",
    "Storage Path Validation",
    "Ingress Exposure",
    "Autoscaling Signals",
    "Monitoring Baselines",
    "Release Validation",
    "Resilience and Recovery",
];

/// Focus rotation, offset by module and position within the module.
pub const DETAIL_FOCUSES: [&str; 8] = [
    "control plane",
    "node pools",
    "service mesh edge",
    "private endpoint routing",
    "identity boundaries",
    "policy compliance",
    "application reliability",
    "incident response",
];

/// Page category; pages cycle through these every five pages within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WikiCategory {
    Foundation,
    Network,
    Security,
    Workloads,
    Operations,
}

impl WikiCategory {
    pub const ALL: [WikiCategory; 5] = [
        WikiCategory::Foundation,
        WikiCategory::Network,
        WikiCategory::Security,
        WikiCategory::Workloads,
        WikiCategory::Operations,
    ];

    /// Category at a position in the five-page cycle
    pub fn from_index(index: u32) -> Self {
        Self::ALL[index as usize % Self::ALL.len()]
    }

    pub fn index(&self) -> u32 {
        match self {
            WikiCategory::Foundation => 0,
            WikiCategory::Network => 1,
            WikiCategory::Security => 2,
            WikiCategory::Workloads => 3,
            WikiCategory::Operations => 4,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            WikiCategory::Foundation => "foundation",
            WikiCategory::Network => "network",
            WikiCategory::Security => "security",
            WikiCategory::Workloads => "workloads",
            WikiCategory::Operations => "operations",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            WikiCategory::Foundation => "Foundation",
            WikiCategory::Network => "Network",
            WikiCategory::Security => "Security",
            WikiCategory::Workloads => "Workloads",
            WikiCategory::Operations => "Operations",
        }
    }

    pub fn full_label(&self) -> &'static str {
        match self {
            WikiCategory::Foundation => "Foundation Baseline",
            WikiCategory::Network => "Network Validation",
            WikiCategory::Security => "Security Hardening",
            WikiCategory::Workloads => "Workload Reliability",
            WikiCategory::Operations => "Operations Drill",
        }
    }

    pub fn accent(&self) -> WikiAccent {
        match self {
            WikiCategory::Foundation => WikiAccent::Sky,
            WikiCategory::Network => WikiAccent::Teal,
            WikiCategory::Security => WikiAccent::Amber,
            WikiCategory::Workloads => WikiAccent::Indigo,
            WikiCategory::Operations => WikiAccent::Rose,
        }
    }
}

impl fmt::Display for WikiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Display accent paired with each category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WikiAccent {
    Sky,
    Teal,
    Amber,
    Indigo,
    Rose,
}

/// Page difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WikiDifficulty {
    Core,
    Advanced,
    Expert,
}

impl fmt::Display for WikiDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WikiDifficulty::Core => write!(f, "Core"),
            WikiDifficulty::Advanced => write!(f, "Advanced"),
            WikiDifficulty::Expert => write!(f, "Expert"),
        }
    }
}
