//! The `check` use case: load a document, evaluate the rules, and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use metalint_domain::{DomainReport, RuleConfig, Verdict};
use metalint_types::{MetalintData, MetalintReport, ReportEnvelope, SCHEMA_REPORT_V1, VerdictStatus};
use time::OffsetDateTime;

use crate::report::tool_meta;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Path of the metainfo document; its final component is the filename checked against the id.
    pub document_path: &'a Utf8Path,
    pub config: &'a RuleConfig,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: MetalintReport,
    /// The domain verdict the report was built from.
    pub verdict: Verdict,
}

/// Run the check use case: read and decode the document, evaluate the rules, produce a report.
///
/// Unreadable or undecodable input is an `Err`; rule violations are part of the report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let document = metalint_parse::load_document(input.document_path).context("load document")?;
    tracing::debug!(
        filename = %document.filename,
        id = %document.component.id,
        screenshots = document.component.screenshots.len(),
        "decoded component"
    );

    let DomainReport {
        verdict,
        counts,
        checks_run,
        screenshots_checked,
    } = metalint_domain::evaluate(&document.component, &document.filename, input.config);

    for warning in verdict.warnings() {
        tracing::debug!(check_id = %warning.check_id, code = %warning.code, "warning");
    }
    if let Some(error) = verdict.error() {
        tracing::info!(check_id = %error.check_id, code = %error.code, "document rejected");
    }

    let component_id = Some(document.component.id.clone()).filter(|id| !id.is_empty());

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: verdict.status(),
        findings: verdict.findings(),
        data: MetalintData {
            document: input.document_path.to_string(),
            component_id,
            checks_run,
            screenshots_checked,
            errors: counts.error,
            warnings: counts.warning,
        },
    };

    Ok(CheckOutput { report, verdict })
}

/// Map verdict to exit code: 0 = pass/warn, 1 = fail.
pub fn verdict_exit_code(verdict: VerdictStatus) -> i32 {
    match verdict {
        VerdictStatus::Pass => 0,
        VerdictStatus::Warn => 0,
        VerdictStatus::Fail => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use metalint_types::ids;

    const VALID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<component type="desktop-application">
  <id>org.example.Editor</id>
  <metadata_license>CC0-1.0</metadata_license>
  <project_license>MIT</project_license>
  <name>Editor</name>
  <summary>Edit plain text files</summary>
  <description><p>A small editor.</p></description>
  <launchable type="desktop-id">org.example.Editor.desktop</launchable>
</component>
"#;

    fn write_doc(dir: &tempfile::TempDir, name: &str, text: &str) -> Utf8PathBuf {
        let root = Utf8Path::from_path(dir.path()).expect("utf8 path");
        let path = root.join(name);
        std::fs::write(&path, text).expect("write document");
        path
    }

    fn check(path: &Utf8Path) -> anyhow::Result<CheckOutput> {
        run_check(CheckInput {
            document_path: path,
            config: &RuleConfig::DEFAULT,
        })
    }

    #[test]
    fn valid_document_is_accepted_with_screenshot_warning() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = write_doc(&tmp, "org.example.Editor.metainfo.xml", VALID);

        let output = check(&path).expect("run_check");
        let report = &output.report;

        assert!(output.verdict.is_accepted());
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.tool.name, "metalint");
        assert_eq!(report.verdict, VerdictStatus::Warn);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].code, ids::CODE_NO_SCREENSHOTS);
        assert_eq!(report.data.document, path.as_str());
        assert_eq!(report.data.component_id.as_deref(), Some("org.example.Editor"));
        assert_eq!(report.data.checks_run, 9);
        assert_eq!(report.data.warnings, 1);
        assert_eq!(report.data.errors, 0);
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn filename_is_taken_from_the_final_path_component() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = write_doc(&tmp, "editor.xml", VALID);

        let output = check(&path).expect("run_check");
        let error = output.verdict.error().expect("rejected");
        assert_eq!(error.code, ids::CODE_FILENAME_MISMATCH);
        assert_eq!(error.data["actual"], "editor.xml");
        assert_eq!(output.report.verdict, VerdictStatus::Fail);
        assert_eq!(output.report.data.checks_run, 1);
    }

    #[test]
    fn service_component_is_rejected() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let text = VALID.replace("desktop-application", "service");
        let path = write_doc(&tmp, "org.example.Editor.metainfo.xml", &text);

        let output = check(&path).expect("run_check");
        let error = output.verdict.error().expect("rejected");
        assert_eq!(error.check_id, ids::CHECK_COMPONENT_KIND);
        assert_eq!(verdict_exit_code(output.report.verdict), 1);
    }

    #[test]
    fn unreadable_and_malformed_documents_are_errors() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let missing = Utf8Path::from_path(tmp.path())
            .expect("utf8 path")
            .join("missing.metainfo.xml");
        assert!(check(&missing).is_err());

        let path = write_doc(&tmp, "broken.metainfo.xml", "<component><id>x</component>");
        let err = check(&path).expect_err("malformed");
        assert!(format!("{err:#}").contains("load document"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(VerdictStatus::Pass), 0);
        assert_eq!(verdict_exit_code(VerdictStatus::Warn), 0);
        assert_eq!(verdict_exit_code(VerdictStatus::Fail), 1);
    }
}
