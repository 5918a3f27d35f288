// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Category-dispatched page text

use crate::catalog::WikiCategory;
use crate::context::PageContext;
use crate::page::{WikiFailurePattern, WikiStep};
use crate::steps;
use crate::template::interpolate;

fn render(ctx: &PageContext, template: &str) -> String {
    interpolate(template, &ctx.vars())
}

fn render_all(ctx: &PageContext, templates: &[&str]) -> Vec<String> {
    let vars = ctx.vars();
    templates.iter().map(|t| interpolate(t, &vars)).collect()
}

pub fn summary(ctx: &PageContext) -> String {
    let template = match ctx.category {
        WikiCategory::Foundation => {
            "Capture a clean baseline for module {module} ({theme}), focused on {focus}."
        }
        WikiCategory::Network => {
            "Run deep network tests for module {module}, validating DNS, ingress, and private routing paths."
        }
        WikiCategory::Security => {
            "Validate security boundaries for module {module}: identity, policy, and runtime controls."
        }
        WikiCategory::Workloads => {
            "Exercise rollout and reliability checks for module {module}, including scale and telemetry."
        }
        WikiCategory::Operations => {
            "Execute incident-response drills for module {module} and document recovery outcomes."
        }
    };
    render(ctx, template)
}

pub fn scenario(ctx: &PageContext) -> String {
    render(
        ctx,
        "You are operating Module {module} in cycle {cycle}. This module expands {theme} with \
         heightened focus on {focus}. Treat this page as an execution-grade runbook: collect \
         evidence, validate outcomes, and record decisions as if this were a production \
         readiness gate.",
    )
}

pub fn objective(ctx: &PageContext) -> String {
    let template = match ctx.category {
        WikiCategory::Foundation => {
            "Establish trusted pre-change signals for module {module}, ensuring {focus} has measurable baselines."
        }
        WikiCategory::Network => {
            "Prove network paths for {focus} are deterministic and recoverable during module {module} changes."
        }
        WikiCategory::Security => {
            "Confirm least-privilege and policy enforcement around {focus} during module {module}."
        }
        WikiCategory::Workloads => {
            "Verify workloads tied to {focus} stay healthy through rollout, restart, and scaling operations."
        }
        WikiCategory::Operations => {
            "Demonstrate repeatable troubleshooting for {focus} with clear recovery evidence and notes."
        }
    };
    render(ctx, template)
}

const SHARED_PREREQUISITES: [&str; 4] = [
    "AKS credentials are current (`az aks get-credentials --overwrite-existing`).",
    "Your active context targets the intended lab cluster.",
    "You can access `lab-apps`, `lab-monitoring`, and ingress namespaces.",
    "Module {module} notes are opened and writable for evidence capture.",
];

/// Four shared prerequisites, plus one extra for network, security and operations pages
pub fn prerequisites(ctx: &PageContext) -> Vec<String> {
    let mut items = render_all(ctx, &SHARED_PREREQUISITES);
    let extra = match ctx.category {
        WikiCategory::Network => Some("Ingress public IP and DNS records are known for test probes."),
        WikiCategory::Security => {
            Some("Workload identity and Key Vault integration are deployed for this stage.")
        }
        WikiCategory::Operations => {
            Some("Rollback plan for {theme} is prepared before drill execution.")
        }
        WikiCategory::Foundation | WikiCategory::Workloads => None,
    };
    if let Some(extra) = extra {
        items.push(render(ctx, extra));
    }
    items
}

pub fn signals_to_watch(ctx: &PageContext) -> Vec<String> {
    let templates: [&str; 3] = match ctx.category {
        WikiCategory::Foundation => [
            "Node readiness and scheduling pressure.",
            "Critical deployment availability deltas.",
            "API server responsiveness during baseline capture.",
        ],
        WikiCategory::Network => [
            "Service endpoint population and churn.",
            "DNS lookup latency and NXDOMAIN spikes.",
            "Ingress status code distribution (2xx/4xx/5xx).",
        ],
        WikiCategory::Security => [
            "Unexpected RBAC allows/denies.",
            "Secret mount or token federation errors.",
            "Policy admission denials in target namespaces.",
        ],
        WikiCategory::Workloads => [
            "Rollout progress and unavailable replica counts.",
            "Container restart frequency.",
            "Latency and saturation metrics during load.",
        ],
        WikiCategory::Operations => [
            "Time-to-detection from symptom onset.",
            "Time-to-recovery after mitigation action.",
            "Residual warnings/events after drill completion.",
        ],
    };
    render_all(ctx, &templates)
}

pub fn verifications(ctx: &PageContext) -> Vec<String> {
    let templates: [&str; 3] = match ctx.category {
        WikiCategory::Foundation => [
            "Baseline evidence for module {module} is recorded and timestamped.",
            "Cluster and namespace health checks completed with no unknown states.",
            "Pre-change deployment inventory is captured.",
        ],
        WikiCategory::Network => [
            "Internal service discovery succeeds from test workloads.",
            "External ingress route serves expected application response.",
            "Private routing and endpoint associations are confirmed.",
        ],
        WikiCategory::Security => [
            "Service account identity bindings are correct.",
            "Policy controls enforce expected restrictions.",
            "Runtime pod security settings align with restricted profile.",
        ],
        WikiCategory::Workloads => [
            "Deployment rollouts complete without regression.",
            "Application health and telemetry remain stable.",
            "Scale behavior matches expected thresholds.",
        ],
        WikiCategory::Operations => [
            "Drill scenario executed and recovery completed.",
            "Post-incident validation checks pass.",
            "Lessons learned and follow-up actions are documented.",
        ],
    };
    render_all(ctx, &templates)
}

fn failure(symptom: &str, likely_cause: &str, recovery: &str) -> WikiFailurePattern {
    WikiFailurePattern {
        symptom: symptom.to_string(),
        likely_cause: likely_cause.to_string(),
        recovery: recovery.to_string(),
    }
}

/// Two failure patterns; foundation and workloads pages share the generic pair
pub fn common_failures(ctx: &PageContext) -> Vec<WikiFailurePattern> {
    match ctx.category {
        WikiCategory::Network => vec![
            failure(
                "Ingress responds with 502/504 during rollout",
                "Backend endpoints became empty or readiness never passed",
                "Check service endpoints and probe paths; roll back bad deployment if needed.",
            ),
            failure(
                "In-cluster DNS lookup intermittently fails",
                "CoreDNS pressure or policy blocking kube-dns",
                "Validate DNS egress policy and CoreDNS pod health in kube-system.",
            ),
        ],
        WikiCategory::Security => vec![
            failure(
                "Workload cannot access Key Vault secret",
                "Workload identity annotation/client ID mismatch",
                "Compare service account annotation, federated credential, and pod env token paths.",
            ),
            failure(
                "Unexpected pod admission denial",
                "Policy assignment conflicts with manifest security context",
                "Review denied rule details and update pod security fields explicitly.",
            ),
        ],
        WikiCategory::Operations => vec![
            failure(
                "Recovery step succeeded but errors continue",
                "Stale config or pending old replicas still serving",
                "Confirm rollout completion and verify service endpoints map to new pods only.",
            ),
            failure(
                "Incident repeats after temporary mitigation",
                "Underlying threshold or dependency issue unresolved",
                "Capture root cause in notes and create a permanent remediation task.",
            ),
        ],
        WikiCategory::Foundation | WikiCategory::Workloads => vec![
            failure(
                "Health endpoint degrades while pods remain running",
                "Dependency check failing (SQL, external endpoint, or identity)",
                "Split liveness/readiness as needed and verify dependency-specific telemetry.",
            ),
            failure(
                "Rollout stalls with unavailable replicas",
                "Probe path mismatch or insufficient resource headroom",
                "Inspect describe/logs, correct probes, and tune requests/limits.",
            ),
        ],
    }
}

pub fn notes_prompt(ctx: &PageContext) -> String {
    render(
        ctx,
        "Document module {module} {category} results: commands used, evidence collected, \
         decisions made, and next actions for {focus}.",
    )
}

/// Seven steps with ids `p{page}-s1` through `p{page}-s7`
pub fn steps(ctx: &PageContext) -> Vec<WikiStep> {
    let vars = ctx.vars();
    steps::templates(ctx.category)
        .iter()
        .enumerate()
        .map(|(i, t)| WikiStep {
            id: format!("p{}-s{}", ctx.page_number, i + 1),
            title: t.title.to_string(),
            description: interpolate(t.description, &vars),
            command: t.command.map(|c| interpolate(c, &vars)),
            expected: t.expected.to_string(),
            why_it_matters: t.why_it_matters.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
