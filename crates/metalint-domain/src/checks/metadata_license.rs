use crate::checks::utils::tag_url;
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

/// Advisory only: newer metadata revisions may accept licenses missing from the list.
pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    let license = component.metadata_license.as_str();
    if cfg.metadata_licenses.contains(&license) {
        return None;
    }

    Some(Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_COMPONENT_METADATA_LICENSE.to_string(),
        code: ids::CODE_LICENSE_NOT_ALLOWED.to_string(),
        message: "metadata license is not in the list of allowed licenses".to_string(),
        location: Some(Location::document(filename)),
        help: Some(
            "Use a permissive metadata license such as CC0-1.0, or check the current AppStream metadata documentation."
                .to_string(),
        ),
        url: Some(tag_url("metadata_license")),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_COMPONENT_METADATA_LICENSE,
            ids::CODE_LICENSE_NOT_ALLOWED,
            filename,
            Some(license),
        )),
        data: json!({
            "allowed": cfg.metadata_licenses,
            "actual": license,
        }),
    })
}
