use anyhow::Context;
use camino::Utf8Path;
use metalint_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport,
};
use metalint_types::{
    Finding, MetalintData, MetalintReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta,
    VerdictStatus, ids,
};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// `data` keys surfaced as detail lines, in display order.
const DETAIL_KEYS: &[&str] = &["expected", "allowed", "actual", "min_length", "source"];

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "metalint".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn serialize_report(report: &MetalintReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Report for input errors that prevented any rule from running.
pub fn runtime_error_report(document: &str, message: &str) -> MetalintReport {
    let now = OffsetDateTime::now_utc();

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: VerdictStatus::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the input error and re-run metalint.".to_string()),
            url: None,
            fingerprint: None,
            data: JsonValue::Null,
        }],
        data: MetalintData {
            document: document.to_string(),
            component_id: None,
            checks_run: 0,
            screenshots_checked: 0,
            errors: 1,
            warnings: 0,
        },
    }
}

pub fn write_report(path: &Utf8Path, report: &MetalintReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report json: {}", path))?;
    Ok(())
}

pub fn to_renderable(report: &MetalintReport) -> RenderableReport {
    RenderableReport {
        verdict: report.verdict.into(),
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            document: report.data.document.clone(),
            checks_run: report.data.checks_run,
            errors: report.data.errors,
            warnings: report.data.warnings,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: f.severity.into(),
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.clone(),
            line: loc.line,
        }),
        help: f.help.clone(),
        url: f.url.clone(),
        details: details(&f.data),
    }
}

fn details(data: &JsonValue) -> Vec<(String, String)> {
    DETAIL_KEYS
        .iter()
        .filter_map(|key| {
            let value = data.get(*key)?;
            Some((key.to_string(), display_value(value)))
        })
        .collect()
}

fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) if s.is_empty() => "\"\"".to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
