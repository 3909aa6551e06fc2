use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Metalint report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Document: `{}`\n- Verdict: **{}**\n- Checks run: {}\n- Findings: {} error(s), {} warning(s)\n\n",
        report.data.document,
        verdict,
        report.data.checks_run,
        report.data.errors,
        report.data.warnings
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}\n",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        ));

        for (key, value) in &f.details {
            out.push_str(&format!("  - {}: `{}`\n", key, value));
        }
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{empty_report, rejected_report};

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&empty_report(RenderableVerdictStatus::Pass));
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Checks run: 9"));
        assert!(md.contains("No findings"));
    }

    #[test]
    fn renders_findings_with_details_help_and_url() {
        let md = render_markdown(&rejected_report());

        assert!(md.starts_with("# Metalint report\n"));
        assert!(md.contains("- Document: `org.example.Editor.metainfo.xml`"));
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("1 error(s), 1 warning(s)"));
        assert!(md.contains("## Findings"));
        assert!(md.contains(
            "- [WARN] `component.metadata_license` / `license_not_allowed`: metadata license is not allowed"
        ));
        assert!(md.contains("  - actual: `GPL-3.0`"));
        assert!(md.contains("help: Use a permissive license"));
        assert!(md.contains("url: https://example.com/docs/metadata_license"));
        assert!(md.contains("- [ERROR] `component.kind` / `unsupported_kind`"));
    }

    #[test]
    fn warnings_are_listed_before_the_error() {
        let md = render_markdown(&rejected_report());
        let warn = md.find("[WARN]").expect("warning");
        let err = md.find("[ERROR]").expect("error");
        assert!(warn < err);
    }
}
