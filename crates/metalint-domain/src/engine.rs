use crate::checks::{self, Check};
use crate::model::Component;
use crate::policy::RuleConfig;
use crate::report::{DomainReport, SeverityCounts, Verdict};
use metalint_types::{Finding, ids};

/// Validate one component against the fixed rule pipeline.
///
/// Warnings accumulate; the first error ends evaluation.
pub fn validate(component: &Component, filename: &str, cfg: &RuleConfig) -> Verdict {
    run_pipeline(checks::PIPELINE, component, filename, cfg).0
}

/// [`validate`] plus summary data for reporting.
pub fn evaluate(component: &Component, filename: &str, cfg: &RuleConfig) -> DomainReport {
    let (verdict, checks_run) = run_pipeline(checks::PIPELINE, component, filename, cfg);

    let counts = SeverityCounts::from_findings(&verdict.findings());
    let screenshots_checked = screenshots_checked(component, &verdict, checks_run);

    DomainReport {
        verdict,
        counts,
        checks_run,
        screenshots_checked,
    }
}

fn run_pipeline(
    pipeline: &[Check],
    component: &Component,
    filename: &str,
    cfg: &RuleConfig,
) -> (Verdict, u32) {
    let mut warnings: Vec<Finding> = Vec::new();
    let mut checks_run = 0u32;

    for check in pipeline {
        checks_run += 1;
        let Some(finding) = (check.run)(component, filename, cfg) else {
            continue;
        };
        debug_assert_eq!(finding.check_id, check.id);
        if finding.is_error() {
            return (
                Verdict::Rejected {
                    error: finding,
                    warnings,
                },
                checks_run,
            );
        }
        warnings.push(finding);
    }

    (Verdict::Accepted { warnings }, checks_run)
}

fn screenshots_checked(component: &Component, verdict: &Verdict, checks_run: u32) -> u32 {
    if checks_run < checks::PIPELINE.len() as u32 {
        return 0;
    }
    match verdict.error() {
        Some(error) if error.check_id == ids::CHECK_SCREENSHOTS_IMAGES => error.data["screenshot"]
            .as_u64()
            .map(|n| n as u32)
            .unwrap_or(0),
        Some(_) => 0,
        None => component.screenshots.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{screenshot, valid_component, FILENAME};
    use metalint_types::{Severity, VerdictStatus};

    #[test]
    fn valid_component_without_screenshots_is_accepted_with_one_warning() {
        let component = valid_component();
        let verdict = validate(&component, FILENAME, &RuleConfig::DEFAULT);

        assert!(verdict.is_accepted());
        assert_eq!(verdict.warnings().len(), 1);
        assert_eq!(verdict.warnings()[0].code, ids::CODE_NO_SCREENSHOTS);
        assert_eq!(verdict.status(), VerdictStatus::Warn);
    }

    #[test]
    fn service_kind_is_rejected_by_kind_rule() {
        let mut component = valid_component();
        component.kind = "service".to_string();

        let verdict = validate(&component, FILENAME, &RuleConfig::DEFAULT);
        let error = verdict.error().expect("rejected");
        assert_eq!(error.check_id, ids::CHECK_COMPONENT_KIND);
        assert!(error.message.contains("component type"));
        assert_eq!(verdict.status(), VerdictStatus::Fail);
    }

    #[test]
    fn warnings_before_the_error_are_kept() {
        let mut component = valid_component();
        component.metadata_license = "GPL-3.0".to_string();
        component.name = "E".to_string();

        let verdict = validate(&component, FILENAME, &RuleConfig::DEFAULT);
        let Verdict::Rejected { error, warnings } = verdict else {
            panic!("expected rejection");
        };
        assert_eq!(error.code, ids::CODE_NAME_TOO_SHORT);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ids::CODE_LICENSE_NOT_ALLOWED);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }

    #[test]
    fn evaluate_reports_counts_and_progress() {
        let mut component = valid_component();
        component.screenshots = vec![
            screenshot("source", "https://example.com/a.png"),
            screenshot("source", "https://example.com/b.gif"),
            screenshot("source", "https://example.com/c.png"),
        ];

        let report = evaluate(&component, FILENAME, &RuleConfig::DEFAULT);
        assert_eq!(report.checks_run, checks::PIPELINE.len() as u32);
        assert_eq!(report.screenshots_checked, 2);
        assert_eq!(report.counts.error, 1);
        assert_eq!(report.counts.warning, 0);
    }

    #[test]
    fn evaluate_stops_counting_at_first_error() {
        let mut component = valid_component();
        component.id = String::new();

        let report = evaluate(&component, FILENAME, &RuleConfig::DEFAULT);
        assert_eq!(report.checks_run, 1);
        assert_eq!(report.screenshots_checked, 0);
        assert_eq!(
            report.verdict.error().map(|f| f.code.as_str()),
            Some(ids::CODE_MISSING_ID)
        );
    }

    #[test]
    fn accepted_screenshots_are_all_counted() {
        let mut component = valid_component();
        component.screenshots = vec![
            screenshot("source", "https://example.com/a.png"),
            screenshot("video", "https://example.com/a.webm"),
        ];

        let report = evaluate(&component, FILENAME, &RuleConfig::DEFAULT);
        assert_eq!(report.verdict.status(), VerdictStatus::Pass);
        assert_eq!(report.screenshots_checked, 2);
    }
}
