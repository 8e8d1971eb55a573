//! Integration tests for condition validation and evaluation
//!
//! Exercises the public `Condition` API end to end: syntax validation,
//! severity prefixes, placeholder resolution, functions and rendering.

use std::time::Duration;
use vigil_core::{Condition, ConditionError, ProbeResult, SeverityStatus};

fn evaluate(condition: &str, mut result: ProbeResult) -> ProbeResult {
    Condition::from(condition).evaluate(&mut result, false);
    result
}

fn users_body(count: usize) -> String {
    let users: Vec<String> = (0..count).map(|i| format!(r#"{{"id": {}}}"#, i)).collect();
    format!(r#"{{"users": [{}]}}"#, users.join(","))
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validate_accepts_valid_conditions() {
    let valid = [
        "[STATUS] == 200",
        "[STATUS] != 200",
        "[STATUS] <= 200",
        "[STATUS] >= 200",
        "[STATUS] < 200",
        "[STATUS] > 200",
        "[STATUS] == any(200, 201, 202, 203)",
        "[STATUS] == [BODY].status",
        "[CONNECTED] == true",
        "[RESPONSE_TIME] < 500",
        "[IP] == 127.0.0.1",
        "[BODY] == 1",
        "[BODY].test == wat",
        "[BODY].test.wat == wat",
        "[BODY].age == [BODY].id",
        "[BODY].users[0].id == 1",
        "len([BODY].users) == 100",
        "len([BODY].data) < 5",
        "has([BODY].errors) == false",
        "has([BODY].users[0].name) == true",
        "[BODY].name == pat(john*)",
        "[CERTIFICATE_EXPIRATION] > 48h",
        "[DOMAIN_EXPIRATION] > 720h",
        "[DNS_RCODE] == NOERROR",
        "raw == raw",
        "Low :: [STATUS] == 200",
    ];
    for condition in valid {
        assert!(
            Condition::from(condition).validate().is_ok(),
            "expected '{}' to be valid",
            condition
        );
    }
}

#[test]
fn test_validate_rejects_malformed_conditions() {
    let invalid = [
        "[STATUS] ? 201",
        "[STATUS]==201",
        "[STATUS] = = 201",
        "[STATUS] ==",
        "[STATUS]",
    ];
    for condition in invalid {
        let error = Condition::from(condition).validate().unwrap_err();
        assert_eq!(error, ConditionError::InvalidCondition(condition.to_string()));
        assert_eq!(error.to_string(), format!("invalid condition: {}", condition));
    }
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluate_scenarios() {
    let cases: Vec<(&str, &str, ProbeResult, bool, &str, SeverityStatus)> = vec![
        ("IP matches", "[IP] == 127.0.0.1", ProbeResult::new().with_ip("127.0.0.1"), true, "[IP] == 127.0.0.1", SeverityStatus::None),
        ("Status is 200", "[STATUS] == 200", ProbeResult::new().with_http_status(200), true, "[STATUS] == 200", SeverityStatus::None),
        ("Status is not 200", "[STATUS] == 200", ProbeResult::new().with_http_status(500), false, "[STATUS] (500) == 200", SeverityStatus::Critical),
        ("Custom severity low", "Low :: [STATUS] == 200", ProbeResult::new().with_http_status(500), false, "[STATUS] (500) == 200", SeverityStatus::Low),
        ("Custom severity medium", "Medium :: [STATUS] == 200", ProbeResult::new().with_http_status(500), false, "[STATUS] (500) == 200", SeverityStatus::Medium),
        ("Custom severity high", "High :: [STATUS] == 200", ProbeResult::new().with_http_status(500), false, "[STATUS] (500) == 200", SeverityStatus::High),
        ("Custom severity critical", "Critical :: [STATUS] == 200", ProbeResult::new().with_http_status(500), false, "[STATUS] (500) == 200", SeverityStatus::Critical),
        ("Response time under limit", "[RESPONSE_TIME] < 500", ProbeResult::new().with_duration(Duration::from_millis(50)), true, "[RESPONSE_TIME] < 500", SeverityStatus::None),
        ("Response time over limit", "[RESPONSE_TIME] > 500", ProbeResult::new().with_duration(Duration::from_millis(750)), true, "[RESPONSE_TIME] > 500", SeverityStatus::None),
        ("Body JSONPath value match", "[BODY].status == UP", ProbeResult::new().with_body(r#"{"status":"UP"}"#), true, "[BODY].status == UP", SeverityStatus::None),
        ("Body JSONPath complex", "[BODY].data.name == john", ProbeResult::new().with_body(r#"{"data": {"id": 1, "name": "john"}}"#), true, "[BODY].data.name == john", SeverityStatus::None),
        ("Body JSONPath array", "[BODY][0].id == 1", ProbeResult::new().with_body(r#"[{"id": 1}, {"id": 2}]"#), true, "[BODY][0].id == 1", SeverityStatus::None),
        ("Connected", "[CONNECTED] == true", ProbeResult::new().with_connected(true), true, "[CONNECTED] == true", SeverityStatus::None),
        ("Not connected", "[CONNECTED] == true", ProbeResult::new(), false, "[CONNECTED] (false) == true", SeverityStatus::Critical),
        ("DNS rcode", "[DNS_RCODE] == NOERROR", ProbeResult::new().with_dns_rcode("NXDOMAIN"), false, "[DNS_RCODE] (NXDOMAIN) == NOERROR", SeverityStatus::Critical),
        ("Status in any", "[STATUS] == any(200, 201)", ProbeResult::new().with_http_status(201), true, "[STATUS] == any(200, 201)", SeverityStatus::None),
        ("Status not in any", "[STATUS] == any(200, 201)", ProbeResult::new().with_http_status(503), false, "[STATUS] (503) == any(200, 201)", SeverityStatus::Critical),
        ("Placeholder on both sides", "[STATUS] == [BODY].status", ProbeResult::new().with_http_status(200).with_body(r#"{"status": 200}"#), true, "[STATUS] == [BODY].status", SeverityStatus::None),
        ("Placeholders on both sides differ", "[BODY].age == [BODY].id", ProbeResult::new().with_body(r#"{"age": 1, "id": 2}"#), false, "[BODY].age (1) == [BODY].id (2)", SeverityStatus::Critical),
    ];

    for (name, condition, result, success, rendered, severity) in cases {
        let result = evaluate(condition, result);
        let outcome = &result.condition_results[0];
        assert_eq!(outcome.success, success, "{}: success", name);
        assert_eq!(outcome.condition, rendered, "{}: rendered", name);
        assert_eq!(outcome.severity_status, severity, "{}: severity", name);
    }
}

#[test]
fn test_evaluate_with_invalid_operator() {
    let result = evaluate("[STATUS] ? 201", ProbeResult::new().with_http_status(201));
    assert_eq!(result.errors, vec!["invalid condition: [STATUS] ? 201".to_string()]);
    assert_eq!(result.condition_results.len(), 1);
    assert!(!result.condition_results[0].success);
}

#[test]
fn test_response_time_against_duration_literal() {
    let result = evaluate("[RESPONSE_TIME] < 1s", ProbeResult::new().with_duration(Duration::from_millis(750)));
    assert!(result.condition_results[0].success);
    assert!(result.errors.is_empty());

    for condition in ["[RESPONSE_TIME] < 500ms", "[RESPONSE_TIME] < 500"] {
        let result = evaluate(condition, ProbeResult::new().with_duration(Duration::from_millis(750)));
        let outcome = &result.condition_results[0];
        assert!(!outcome.success, "{}", condition);
        assert!(outcome.condition.starts_with("[RESPONSE_TIME] (750) < "), "{}", condition);
    }
}

#[test]
fn test_len_of_body_array() {
    let result = evaluate("len([BODY].users) == 100", ProbeResult::new().with_body(users_body(100)));
    assert!(result.condition_results[0].success);

    let result = evaluate("len([BODY].users) == 100", ProbeResult::new().with_body(users_body(99)));
    assert!(!result.condition_results[0].success);
    assert_eq!(result.condition_results[0].condition, "len([BODY].users) (99) == 100");
}

#[test]
fn test_has_body_key() {
    let result = evaluate("has([BODY].errors) == false", ProbeResult::new().with_body(r#"{"data": 1}"#));
    assert!(result.condition_results[0].success);
    assert!(result.errors.is_empty());

    let result = evaluate("has([BODY].errors) == false", ProbeResult::new().with_body(r#"{"errors": []}"#));
    assert!(!result.condition_results[0].success);
}

#[test]
fn test_pattern_match() {
    let result = evaluate("[BODY].name == pat(john*)", ProbeResult::new().with_body(r#"{"name":"johnny"}"#));
    assert!(result.condition_results[0].success);

    let result = evaluate("[BODY].name == pat(john*)", ProbeResult::new().with_body(r#"{"name":"alice"}"#));
    assert!(!result.condition_results[0].success);
    assert_eq!(result.condition_results[0].condition, "[BODY].name (alice) == pat(john*)");
}

#[test]
fn test_certificate_expiration_against_hours() {
    let condition = "[CERTIFICATE_EXPIRATION] > 48h";

    let result = evaluate(condition, ProbeResult::new().with_certificate_expiration(Duration::from_secs(72 * 3600)));
    assert!(result.condition_results[0].success);

    let result = evaluate(condition, ProbeResult::new().with_certificate_expiration(Duration::from_secs(24 * 3600)));
    assert!(!result.condition_results[0].success);

    // Sub-second precision does not change the outcome
    let result = evaluate(
        condition,
        ProbeResult::new().with_certificate_expiration(Duration::from_millis(48 * 3600 * 1000 + 1)),
    );
    assert!(result.condition_results[0].success);
}

#[test]
fn test_domain_expiration_against_hours() {
    let result = evaluate(
        "[DOMAIN_EXPIRATION] > 720h",
        ProbeResult::new().with_domain_expiration(Duration::from_secs(31 * 24 * 3600)),
    );
    assert!(result.condition_results[0].success);
}

#[test]
fn test_unparsable_body_degrades_condition() {
    let mut result = ProbeResult::new().with_body("<html>oops</html>");
    let first = Condition::from("[BODY].status == UP").evaluate(&mut result, false);
    let second = Condition::from("[BODY] == <html>oops</html>").evaluate(&mut result, false);

    assert!(!first);
    assert!(second);
    assert_eq!(result.condition_results.len(), 2);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_evaluation_is_deterministic() {
    let condition = Condition::from("Medium :: [BODY].users[0].id == 7");
    let mut result = ProbeResult::new().with_body(users_body(3));

    condition.evaluate(&mut result, false);
    condition.evaluate(&mut result, false);

    assert_eq!(result.condition_results.len(), 2);
    assert_eq!(result.condition_results[0], result.condition_results[1]);
    assert_eq!(result.condition_results[0].condition, "[BODY].users[0].id (0) == 7");
    assert_eq!(result.condition_results[0].severity_status, SeverityStatus::Medium);
}

#[test]
fn test_redaction() {
    let condition = Condition::from("[BODY].token == expected");
    let body = r#"{"token": "s3cr3t"}"#;

    let mut redacted = ProbeResult::new().with_body(body);
    condition.evaluate(&mut redacted, true);
    assert_eq!(redacted.condition_results[0].condition, "[BODY].token == expected");

    let mut revealed = ProbeResult::new().with_body(body);
    condition.evaluate(&mut revealed, false);
    assert_eq!(revealed.condition_results[0].condition, "[BODY].token (s3cr3t) == expected");
}

#[test]
fn test_conditions_append_in_declaration_order() {
    let mut result = ProbeResult::new().with_http_status(200).with_connected(true);
    for condition in ["[STATUS] == 200", "[CONNECTED] == false", "[RESPONSE_TIME] < 100"] {
        Condition::from(condition).evaluate(&mut result, false);
    }

    let rendered: Vec<&str> = result
        .condition_results
        .iter()
        .map(|c| c.condition.as_str())
        .collect();
    assert_eq!(
        rendered,
        vec!["[STATUS] == 200", "[CONNECTED] (true) == false", "[RESPONSE_TIME] < 100"]
    );
}

#[test]
fn test_severity_prefix_is_stripped_from_rendered_text() -> anyhow::Result<()> {
    let condition = Condition::from("High :: [STATUS] == 200");
    condition.validate()?;

    let (severity, text) = condition.severity();
    assert_eq!(severity, SeverityStatus::High);
    assert_eq!(text, "[STATUS] == 200");

    let result = evaluate(condition.as_str(), ProbeResult::new().with_http_status(200));
    assert_eq!(result.condition_results[0].condition, "[STATUS] == 200");
    assert_eq!(result.condition_results[0].severity_status, SeverityStatus::None);
    Ok(())
}
