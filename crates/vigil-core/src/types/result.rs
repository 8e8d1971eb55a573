//! Probe result types

use super::severity::SeverityStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single condition evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionResult {
    /// Rendered condition text
    pub condition: String,

    /// Whether the condition was satisfied
    pub success: bool,

    /// `None` when the condition passed
    pub severity_status: SeverityStatus,
}

impl ConditionResult {
    pub fn new(condition: String, success: bool, severity_status: SeverityStatus) -> Self {
        Self {
            condition,
            success,
            severity_status,
        }
    }
}

/// Snapshot of one probe execution.
///
/// Produced by the probing layer. The condition engine only reads the probe
/// fields and appends to `condition_results` and `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Aggregate outcome, set once every condition has been evaluated
    pub success: bool,

    pub http_status: u16,

    /// Raw response payload
    #[serde(default)]
    pub body: Vec<u8>,

    pub ip: String,

    pub hostname: String,

    pub connected: bool,

    /// Time taken by the probe
    pub duration: Duration,

    /// Time left before the TLS certificate expires
    pub certificate_expiration: Duration,

    /// Time left before the domain registration expires
    pub domain_expiration: Duration,

    /// DNS response code name (e.g. `NOERROR`)
    pub dns_rcode: String,

    /// Highest severity among failed conditions
    pub severity_status: SeverityStatus,

    /// One entry per evaluated condition, in declaration order
    pub condition_results: Vec<ConditionResult>,

    pub errors: Vec<String>,

    pub timestamp: DateTime<Utc>,
}

impl ProbeResult {
    /// Create an empty result stamped with the current time
    pub fn new() -> Self {
        Self {
            success: false,
            http_status: 0,
            body: Vec::new(),
            ip: String::new(),
            hostname: String::new(),
            connected: false,
            duration: Duration::ZERO,
            certificate_expiration: Duration::ZERO,
            domain_expiration: Duration::ZERO,
            dns_rcode: String::new(),
            severity_status: SeverityStatus::None,
            condition_results: Vec::new(),
            errors: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = status;
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_certificate_expiration(mut self, expiration: Duration) -> Self {
        self.certificate_expiration = expiration;
        self
    }

    pub fn with_domain_expiration(mut self, expiration: Duration) -> Self {
        self.domain_expiration = expiration;
        self
    }

    pub fn with_dns_rcode(mut self, rcode: impl Into<String>) -> Self {
        self.dns_rcode = rcode.into();
        self
    }

    /// Record an evaluation error
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Record a condition outcome
    pub fn add_condition_result(&mut self, condition_result: ConditionResult) {
        self.condition_results.push(condition_result);
    }

    /// True when every recorded condition passed
    pub fn all_conditions_passed(&self) -> bool {
        self.condition_results.iter().all(|c| c.success)
    }

    /// Highest severity among failed conditions
    pub fn highest_severity(&self) -> SeverityStatus {
        self.condition_results
            .iter()
            .filter(|c| !c.success)
            .map(|c| c.severity_status)
            .max()
            .unwrap_or(SeverityStatus::None)
    }
}

impl Default for ProbeResult {
    fn default() -> Self {
        Self::new()
    }
}
