use crate::checks::utils::{char_len, tag_url};
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    let len = char_len(&component.summary);
    if len >= cfg.min_summary_len {
        return None;
    }

    Some(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_COMPONENT_SUMMARY.to_string(),
        code: ids::CODE_SUMMARY_TOO_SHORT.to_string(),
        message: format!(
            "summary must be at least {} characters long",
            cfg.min_summary_len
        ),
        location: Some(Location::document(filename)),
        help: Some("Describe what the application does in a short sentence.".to_string()),
        url: Some(tag_url("summary")),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_COMPONENT_SUMMARY,
            ids::CODE_SUMMARY_TOO_SHORT,
            filename,
            Some(component.summary.as_str()),
        )),
        data: json!({
            "min_length": cfg.min_summary_len,
            "length": len,
            "actual": component.summary,
        }),
    })
}
