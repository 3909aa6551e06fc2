use crate::checks::utils::desktop_app_url;
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    if cfg.component_kinds.contains(&component.kind.as_str()) {
        return None;
    }

    Some(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_COMPONENT_KIND.to_string(),
        code: ids::CODE_UNSUPPORTED_KIND.to_string(),
        message: "component type must be 'desktop-application'".to_string(),
        location: Some(Location::document(filename)),
        help: Some("Set type=\"desktop-application\" on the root <component> element.".to_string()),
        url: Some(desktop_app_url()),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_COMPONENT_KIND,
            ids::CODE_UNSUPPORTED_KIND,
            filename,
            Some(component.kind.as_str()),
        )),
        data: json!({
            "allowed": cfg.component_kinds,
            "actual": component.kind,
        }),
    })
}
