//! JSON output renderer.
//!
//! Outputs `{"operation", "first", "second", "status", "code", "result",
//! "unsigned", "message"}`. `result` is `null` unless the status is
//! `all_right`.

use serde::Serialize;

use crate::models::{OperationKind, OperationalStatus, Value};
use crate::output::{OutputRenderer, Report};

/// JSON output renderer.
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonReport {
    operation: OperationKind,
    first: Option<i64>,
    second: Option<i64>,
    status: OperationalStatus,
    code: u8,
    result: Option<Value>,
    unsigned: Option<bool>,
    message: Option<String>,
}

impl From<&Report> for JsonReport {
    fn from(report: &Report) -> Self {
        let status = report.status();
        let (result, message) = match &report.outcome {
            Ok(value) => (Some(*value), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            operation: report.operation,
            first: report.first,
            second: report.second,
            status,
            code: status.code(),
            unsigned: result.map(|v| v.is_unsigned()),
            result,
            message,
        }
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        let body = JsonReport::from(report);
        let mut out = serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EvalError;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_success_json() {
        let report = Report {
            operation: OperationKind::Fact,
            first: Some(5),
            second: None,
            outcome: Ok(Value::Unsigned(120)),
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!({
                "operation": "fact",
                "first": 5,
                "second": null,
                "status": "all_right",
                "code": 0,
                "result": 120,
                "unsigned": true,
                "message": null,
            })
        );
    }

    #[test]
    fn render_error_json_has_no_result() {
        let report = Report {
            operation: OperationKind::Add,
            first: Some(i64::MAX),
            second: Some(1),
            outcome: Err(EvalError::Overflow),
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(parsed["status"], "overflow");
        assert_eq!(parsed["code"], 3);
        assert!(parsed["result"].is_null());
        assert!(parsed["unsigned"].is_null());
        assert_eq!(parsed["first"], i64::MAX);
        assert!(parsed["message"].as_str().unwrap().contains("representable range"));
    }
}
