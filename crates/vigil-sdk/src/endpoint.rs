//! Endpoint definitions and health evaluation

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vigil_core::{Condition, ProbeResult};

/// Characters replaced by `-` when deriving an endpoint key
const KEY_SEPARATORS: [char; 8] = ['/', '_', ',', '.', '#', '+', '&', ' '];

/// A monitored endpoint and the rules its probe results must satisfy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Endpoint {
    pub name: String,

    #[serde(default)]
    pub group: String,

    /// Probe target, consumed by the probing layer
    #[serde(default)]
    pub url: String,

    /// Evaluated in declaration order
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Display options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UiConfig {
    /// Keep resolved values out of the rendered text of failed conditions
    #[serde(default)]
    pub dont_resolve_failed_conditions: bool,
}

impl Endpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            url: String::new(),
            conditions: Vec::new(),
            ui: UiConfig::default(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_condition(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn dont_resolve_failed_conditions(mut self, enable: bool) -> Self {
        self.ui.dont_resolve_failed_conditions = enable;
        self
    }

    /// `group/name`, or just `name` without a group
    pub fn display_name(&self) -> String {
        if self.group.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.group, self.name)
        }
    }

    /// Storage key derived from group and name, e.g. `core_api-health`
    pub fn key(&self) -> String {
        format!("{}_{}", sanitize_key(&self.group), sanitize_key(&self.name))
    }

    /// Fail fast on an incomplete endpoint or the first malformed condition
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SdkError::InvalidEndpoint("name must not be empty".to_string()));
        }
        if self.conditions.is_empty() {
            return Err(SdkError::InvalidEndpoint(format!(
                "{} has no conditions",
                self.display_name()
            )));
        }
        for condition in &self.conditions {
            condition
                .validate()
                .map_err(|source| SdkError::InvalidCondition {
                    endpoint: self.display_name(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Evaluate every condition in order against `result`.
    ///
    /// Sets `result.success` when all conditions pass and
    /// `result.severity_status` to the highest severity among the failures.
    pub fn evaluate_health(&self, result: &mut ProbeResult) {
        let redact = self.ui.dont_resolve_failed_conditions;
        let mut success = true;
        for condition in &self.conditions {
            if !condition.evaluate(result, redact) {
                success = false;
            }
        }
        result.success = success;
        result.severity_status = result.highest_severity();

        if success {
            debug!(endpoint = %self.display_name(), "All conditions passed");
        } else {
            info!(
                endpoint = %self.display_name(),
                severity = %result.severity_status,
                errors = result.errors.len(),
                "Health check failed"
            );
        }
    }

    pub fn needs_to_read_body(&self) -> bool {
        self.conditions.iter().any(Condition::has_body_placeholder)
    }

    pub fn needs_to_retrieve_ip(&self) -> bool {
        self.conditions.iter().any(Condition::has_ip_placeholder)
    }

    pub fn needs_to_retrieve_domain_expiration(&self) -> bool {
        self.conditions
            .iter()
            .any(Condition::has_domain_expiration_placeholder)
    }

    pub fn needs_to_retrieve_certificate_expiration(&self) -> bool {
        self.conditions
            .iter()
            .any(Condition::has_certificate_expiration_placeholder)
    }
}

fn sanitize_key(value: &str) -> String {
    value.to_lowercase().replace(&KEY_SEPARATORS[..], "-")
}
