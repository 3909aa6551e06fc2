use crate::checks::utils::desktop_app_url;
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

/// Reports the first empty mandatory field, in declaration order.
pub fn run(component: &Component, filename: &str, _cfg: &RuleConfig) -> Option<Finding> {
    let (field, _) = component
        .required_fields()
        .into_iter()
        .find(|(_, value)| value.is_empty())?;

    Some(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_COMPONENT_REQUIRED_FIELDS.to_string(),
        code: ids::CODE_EMPTY_FIELD.to_string(),
        message: format!("{field} must not be empty"),
        location: Some(Location::document(filename)),
        help: Some("Add the element with a non-empty, untranslated value.".to_string()),
        url: Some(desktop_app_url()),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_COMPONENT_REQUIRED_FIELDS,
            ids::CODE_EMPTY_FIELD,
            filename,
            Some(field),
        )),
        data: json!({ "field": field }),
    })
}
