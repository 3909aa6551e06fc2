use crate::checks::utils::{char_len, tag_url};
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    let len = char_len(&component.name);
    if len >= cfg.min_name_len {
        return None;
    }

    Some(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_COMPONENT_NAME.to_string(),
        code: ids::CODE_NAME_TOO_SHORT.to_string(),
        message: format!("name must be at least {} characters long", cfg.min_name_len),
        location: Some(Location::document(filename)),
        help: Some("Use the full, human-readable application name.".to_string()),
        url: Some(tag_url("name")),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_COMPONENT_NAME,
            ids::CODE_NAME_TOO_SHORT,
            filename,
            Some(component.name.as_str()),
        )),
        data: json!({
            "min_length": cfg.min_name_len,
            "length": len,
            "actual": component.name,
        }),
    })
}
