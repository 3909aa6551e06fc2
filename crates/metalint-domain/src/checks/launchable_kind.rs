use crate::checks::utils::tag_url;
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    let kind = component.launchable.kind.as_str();
    if kind == cfg.launchable_kind {
        return None;
    }

    Some(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_LAUNCHABLE_KIND.to_string(),
        code: ids::CODE_UNSUPPORTED_LAUNCHABLE.to_string(),
        message: format!("launchable type must be '{}'", cfg.launchable_kind),
        location: Some(Location::document(filename)),
        help: Some(
            "Declare the desktop file: <launchable type=\"desktop-id\">app.desktop</launchable>."
                .to_string(),
        ),
        url: Some(tag_url("launchable")),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_LAUNCHABLE_KIND,
            ids::CODE_UNSUPPORTED_LAUNCHABLE,
            filename,
            Some(kind),
        )),
        data: json!({
            "expected": cfg.launchable_kind,
            "actual": kind,
        }),
    })
}
