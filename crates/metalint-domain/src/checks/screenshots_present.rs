use crate::checks::utils::tag_url;
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::Value;

/// Screenshots are recommended, not mandatory.
pub fn run(component: &Component, filename: &str, _cfg: &RuleConfig) -> Option<Finding> {
    if !component.screenshots.is_empty() {
        return None;
    }

    Some(Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_SCREENSHOTS_PRESENT.to_string(),
        code: ids::CODE_NO_SCREENSHOTS.to_string(),
        message: "no screenshots found".to_string(),
        location: Some(Location::document(filename)),
        help: Some("Add a <screenshots> block with at least one source image.".to_string()),
        url: Some(tag_url("screenshots")),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_SCREENSHOTS_PRESENT,
            ids::CODE_NO_SCREENSHOTS,
            filename,
            None,
        )),
        data: Value::Null,
    })
}
