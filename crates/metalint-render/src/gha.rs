use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
        };

        let mut meta = String::new();
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={}", escape_property(&loc.path)));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
        }

        let check_id = f.check_id.as_deref().unwrap_or("metalint");
        let mut message = format!("[{}:{}] {}", check_id, f.code, f.message);
        for (key, value) in &f.details {
            message.push_str(&format!("\n{}: {}", key, value));
        }

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, escape_data(&message)));
        } else {
            out.push(format!("::{} {}::{}", level, meta, escape_data(&message)));
        }
    }

    out
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{empty_report, kind_error, rejected_report};
    use crate::RenderableVerdictStatus;

    #[test]
    fn one_annotation_per_finding() {
        let lines = render_github_annotations(&rejected_report());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("::warning file=org.example.Editor.metainfo.xml::"));
        assert!(lines[1].starts_with("::error file=org.example.Editor.metainfo.xml::"));
    }

    #[test]
    fn details_are_encoded_as_escaped_newlines() {
        let mut report = empty_report(RenderableVerdictStatus::Fail);
        report.findings.push(kind_error());

        let lines = render_github_annotations(&report);
        assert_eq!(
            lines,
            vec![
                "::error file=org.example.Editor.metainfo.xml::[component.kind:unsupported_kind] \
                 component type must be 'desktop-application'%0Aactual: service"
                    .to_string()
            ]
        );
    }

    #[test]
    fn findings_without_location_omit_properties() {
        let mut finding = kind_error();
        finding.location = None;
        finding.check_id = None;
        finding.details.clear();
        finding.message = "100% broken".to_string();

        let mut report = empty_report(RenderableVerdictStatus::Fail);
        report.findings.push(finding);

        let lines = render_github_annotations(&report);
        assert_eq!(
            lines,
            vec!["::error::[metalint:unsupported_kind] 100%25 broken".to_string()]
        );
    }

    #[test]
    fn property_values_escape_separators() {
        let mut finding = kind_error();
        finding.location.as_mut().expect("location").path = "a,b:c.metainfo.xml".to_string();

        let mut report = empty_report(RenderableVerdictStatus::Fail);
        report.findings.push(finding);

        let lines = render_github_annotations(&report);
        assert!(lines[0].starts_with("::error file=a%2Cb%3Ac.metainfo.xml::"));
    }
}
