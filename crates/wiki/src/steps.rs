// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step tables per category
//!
//! Each category has exactly seven steps. Text may reference `{module}`,
//! `{theme}` or `{focus}`; commands are copy-pasteable shell and keep any
//! `%{...}` curl fields verbatim.

use crate::catalog::WikiCategory;

/// Uninterpolated step definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub command: Option<&'static str>,
    pub expected: &'static str,
    pub why_it_matters: &'static str,
}

const fn step(
    title: &'static str,
    description: &'static str,
    command: Option<&'static str>,
    expected: &'static str,
    why_it_matters: &'static str,
) -> StepTemplate {
    StepTemplate {
        title,
        description,
        command,
        expected,
        why_it_matters,
    }
}

const FOUNDATION: [StepTemplate; 7] = [
    step(
        "Verify active cluster context and subscription",
        "Ensure all commands target the intended AKS environment before baseline capture.",
        Some("kubectl config current-context && az account show --query name -o tsv"),
        "Context and subscription align with this lab environment.",
        "Prevents accidental changes in the wrong cluster or subscription.",
    ),
    step(
        "Capture node and runtime baseline",
        "Collect node readiness and runtime details tied to {theme}.",
        Some("kubectl get nodes -o wide"),
        "All required nodes are Ready with expected versions.",
        "Establishes baseline system capacity before tests.",
    ),
    step(
        "Inventory namespace-level resources",
        "List deploy, statefulset, job, and service objects in core lab namespaces.",
        Some("kubectl get deploy,sts,job,svc -n lab-apps"),
        "Core resources are discoverable and no unexpected objects appear.",
        "Creates traceable baseline for later drift comparison.",
    ),
    step(
        "Record API responsiveness snapshot",
        "Collect response metrics from healthz endpoints and API checks.",
        Some("kubectl get --raw=/readyz?verbose"),
        "Control-plane readiness checks succeed.",
        "Provides early signal if control plane is degraded.",
    ),
    step(
        "Validate quota and limits coverage",
        "Confirm namespace guardrails are in place before workload operations.",
        Some("kubectl get resourcequota,limitrange -n lab-apps"),
        "Quota and limit ranges are present and enforced.",
        "Reduces noisy failures from unbounded workloads.",
    ),
    step(
        "Snapshot baseline events for module",
        "Collect recent events around {focus} for module {module}.",
        Some("kubectl get events -A --sort-by=.lastTimestamp | tail -n 40"),
        "Only expected warning patterns are present.",
        "Makes post-change anomaly detection easier.",
    ),
    step(
        "Lock baseline in notes",
        "Store command outputs and timestamps in the module notes area.",
        None,
        "Baseline evidence is captured with date/time and operator context.",
        "Supports fast rollback decisions and auditability.",
    ),
];

const NETWORK: [StepTemplate; 7] = [
    step(
        "Map service and ingress surface",
        "Gather all relevant service ports and ingress targets for tests.",
        Some("kubectl -n lab-apps get svc,ingress -o wide"),
        "Service and ingress resources expose expected addresses/ports.",
        "Defines the exact interfaces that need validation.",
    ),
    step(
        "Run in-cluster DNS resolution test",
        "Resolve Learning Hub service names from a transient pod focused on {focus}.",
        Some("kubectl run dns-check-m{module} --image=busybox:1.36 --restart=Never --rm -it -- nslookup learning-hub.lab-apps.svc.cluster.local"),
        "Service FQDN resolves and returns cluster IP.",
        "Detects DNS misconfiguration before deeper traffic tests.",
    ),
    step(
        "Validate endpoint backing pods",
        "Ensure service endpoints are populated with ready pod addresses.",
        Some("kubectl -n lab-apps get endpoints learning-hub -o yaml"),
        "Endpoint subsets include active pod IPs.",
        "Prevents ingress black-hole conditions.",
    ),
    step(
        "Probe ingress from external path",
        "Call the public endpoint and verify route behavior.",
        Some("curl -sS -D - http://<INGRESS_PUBLIC_IP>/ -o /dev/null"),
        "HTTP response headers show healthy upstream behavior.",
        "Confirms internet-facing reachability.",
    ),
    step(
        "Check cross-namespace egress behavior",
        "Validate policies allow required DNS and service egress only.",
        Some("kubectl get networkpolicy -A"),
        "Allow rules for DNS and intended destinations are present.",
        "Catches policy regressions that silently break traffic.",
    ),
    step(
        "Confirm latency baseline with repeated calls",
        "Run multiple requests and observe latency consistency.",
        Some(r#"for i in $(seq 1 10); do curl -s -o /dev/null -w "%{http_code} %{time_total}\n" http://<INGRESS_PUBLIC_IP>/; done"#),
        "Status and latency remain within expected range.",
        "Surface intermittent failures before production-like load.",
    ),
    step(
        "Document network decision points",
        "Record findings, anomalies, and planned fixes for module {module}.",
        None,
        "Clear notes include tested paths and observed outcomes.",
        "Enables reproducible troubleshooting in later modules.",
    ),
];

const SECURITY: [StepTemplate; 7] = [
    step(
        "Review namespace policy posture",
        "Inspect all network and admission policies relevant to this page.",
        Some("kubectl get networkpolicy -A"),
        "Policy objects match expected baseline and naming.",
        "Policy drift is a leading source of hidden outages.",
    ),
    step(
        "Inspect workload identity service account",
        "Validate annotations and token mount behavior for {focus}.",
        Some("kubectl -n lab-apps get sa learning-hub-sa -o yaml"),
        "Client-id annotation and identity settings are present.",
        "Identity issues often manifest as runtime dependency errors.",
    ),
    step(
        "Validate RBAC with can-i checks",
        "Test expected access paths for app service account.",
        Some("kubectl auth can-i get secrets -n lab-apps --as=system:serviceaccount:lab-apps:learning-hub-sa"),
        "Permission result matches your intended least-privilege model.",
        "Prevents over-privileged or broken access configurations.",
    ),
    step(
        "Check secret provider and mounted objects",
        "Verify CSI secret sync and mounted values are healthy.",
        Some("kubectl -n lab-apps get secretproviderclass,secret"),
        "SecretProviderClass and synced Kubernetes secret exist.",
        "Protects apps from startup failures due to missing secrets.",
    ),
    step(
        "Inspect pod security context and runtime hardening",
        "Confirm non-root execution and capability drops are applied.",
        Some("kubectl -n lab-apps describe pod -l app=learning-hub"),
        "Security context shows non-root, no privilege escalation, dropped caps.",
        "Reduces lateral-movement risk and admission failures.",
    ),
    step(
        "Review recent security-related events",
        "Search for denied operations linked to module {module}.",
        Some(r#"kubectl get events -A --sort-by=.lastTimestamp | grep -Ei "denied|forbidden|policy""#),
        "No unresolved high-severity denies affecting application flow.",
        "Turns silent policy breaks into actionable findings.",
    ),
    step(
        "Capture security evidence pack",
        "Store key command outputs and rationale for approvals/exceptions.",
        None,
        "Evidence includes identity, policy, and runtime posture checks.",
        "Supports formal sign-off for secure platform changes.",
    ),
];

const WORKLOADS: [StepTemplate; 7] = [
    step(
        "Inspect deployment and HPA inventory",
        "Baseline workload state for {theme}.",
        Some("kubectl -n lab-apps get deploy,pods,hpa -o wide"),
        "Deployments and HPA resources align with desired counts.",
        "Confirms platform is in a known good state before rollout checks.",
    ),
    step(
        "Validate rollout status and history",
        "Ensure deployment revisions and rollout state are healthy.",
        Some("kubectl -n lab-apps rollout status deployment/learning-hub && kubectl -n lab-apps rollout history deployment/learning-hub"),
        "Rollout succeeds and revision history is consistent.",
        "Identifies stuck updates before traffic impact escalates.",
    ),
    step(
        "Collect recent application logs",
        "Review logs for startup, dependency, and runtime anomalies.",
        Some("kubectl -n lab-apps logs deployment/learning-hub --tail=200"),
        "No repeated fatal errors or probe failure loops.",
        "Logs expose latent issues not visible in deployment status.",
    ),
    step(
        "Measure pod resource usage",
        "Capture CPU and memory profile during active state.",
        Some("kubectl -n lab-apps top pods"),
        "Usage stays within requests/limits envelope.",
        "Protects against throttling and OOM during load.",
    ),
    step(
        "Probe app and health endpoints",
        "Validate user path and operational endpoint responses.",
        Some(r#"curl -sS -o /dev/null -w "%{http_code}\n" http://<INGRESS_PUBLIC_IP>/ && curl -sS -o /dev/null -w "%{http_code}\n" http://<INGRESS_PUBLIC_IP>/health"#),
        "Endpoints respond with expected status codes.",
        "Ensures app is externally accessible and operationally visible.",
    ),
    step(
        "Simulate brief restart and observe recovery",
        "Exercise a controlled restart to validate resilience.",
        Some("kubectl -n lab-apps rollout restart deployment/learning-hub"),
        "Pods recycle and return healthy within SLO window.",
        "Validates safe operations for maintenance and incident response.",
    ),
    step(
        "Document reliability outcome",
        "Record whether module {module} workloads met reliability gates.",
        None,
        "Decision is explicit: pass, conditional pass, or fail with actions.",
        "Improves release discipline across all modules.",
    ),
];

const OPERATIONS: [StepTemplate; 7] = [
    step(
        "Define incident drill scope",
        "Set expected blast radius and success criteria for {focus}.",
        None,
        "Scope, owner, and rollback criteria are clearly written.",
        "Prevents chaotic test execution during drills.",
    ),
    step(
        "Trigger controlled failure mode",
        "Introduce a safe failure stimulus (restart, scaling pressure, or dependency pause).",
        Some("kubectl -n lab-apps rollout restart deployment/learning-hub"),
        "Failure mode is observable and contained.",
        "Builds confidence in operational response under pressure.",
    ),
    step(
        "Monitor live service impact",
        "Track ingress response and pod status while drill runs.",
        Some("kubectl -n lab-apps get pods -w"),
        "Impact is measurable and within acceptable boundaries.",
        "Quantifies customer-facing effect of operational events.",
    ),
    step(
        "Execute mitigation sequence",
        "Apply the documented recovery path for module {module}.",
        Some("kubectl -n lab-apps rollout status deployment/learning-hub"),
        "Service returns to stable state.",
        "Proves your runbook is actionable, not theoretical.",
    ),
    step(
        "Validate post-recovery signals",
        "Confirm health, availability, and error budgets normalize.",
        Some("kubectl -n lab-apps get deploy,pods,events --sort-by=.lastTimestamp"),
        "No unresolved warning patterns remain.",
        "Ensures hidden degradation is caught before closure.",
    ),
    step(
        "Capture timeline and root-cause hypothesis",
        "Write timeline checkpoints and likely technical root cause.",
        None,
        "Timeline includes detection, mitigation, and recovery markers.",
        "Improves repeatability and learning over time.",
    ),
    step(
        "Create follow-up actions",
        "Convert findings into improvements for future {focus} operations.",
        None,
        "Action items have owners and due windows.",
        "Turns drills into measurable platform maturity gains.",
    ),
];

/// The seven step templates for a category, in order
pub fn templates(category: WikiCategory) -> &'static [StepTemplate; 7] {
    match category {
        WikiCategory::Foundation => &FOUNDATION,
        WikiCategory::Network => &NETWORK,
        WikiCategory::Security => &SECURITY,
        WikiCategory::Workloads => &WORKLOADS,
        WikiCategory::Operations => &OPERATIONS,
    }
}
