use crate::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};

pub fn empty_report(verdict: RenderableVerdictStatus) -> RenderableReport {
    RenderableReport {
        verdict,
        findings: Vec::new(),
        data: RenderableData {
            document: "org.example.Editor.metainfo.xml".to_string(),
            checks_run: 9,
            errors: 0,
            warnings: 0,
        },
    }
}

pub fn license_warning() -> RenderableFinding {
    RenderableFinding {
        severity: RenderableSeverity::Warning,
        check_id: Some("component.metadata_license".to_string()),
        code: "license_not_allowed".to_string(),
        message: "metadata license is not allowed".to_string(),
        location: Some(RenderableLocation {
            path: "org.example.Editor.metainfo.xml".to_string(),
            line: None,
        }),
        help: Some("Use a permissive license such as CC0-1.0 for the metadata.".to_string()),
        url: Some("https://example.com/docs/metadata_license".to_string()),
        details: vec![
            ("allowed".to_string(), "FSFAP, MIT, CC0-1.0".to_string()),
            ("actual".to_string(), "GPL-3.0".to_string()),
        ],
    }
}

pub fn kind_error() -> RenderableFinding {
    RenderableFinding {
        severity: RenderableSeverity::Error,
        check_id: Some("component.kind".to_string()),
        code: "unsupported_kind".to_string(),
        message: "component type must be 'desktop-application'".to_string(),
        location: Some(RenderableLocation {
            path: "org.example.Editor.metainfo.xml".to_string(),
            line: None,
        }),
        help: None,
        url: None,
        details: vec![("actual".to_string(), "service".to_string())],
    }
}

pub fn rejected_report() -> RenderableReport {
    let mut report = empty_report(RenderableVerdictStatus::Fail);
    report.findings = vec![license_warning(), kind_error()];
    report.data.checks_run = 4;
    report.data.errors = 1;
    report.data.warnings = 1;
    report
}
