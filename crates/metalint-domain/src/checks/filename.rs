use crate::checks::utils::tag_url;
use crate::fingerprint::fingerprint_for;
use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    let id = component.id.as_str();

    // An empty id would make `.metainfo.xml` itself a "matching" filename.
    if id.is_empty() {
        return Some(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_DOCUMENT_FILENAME.to_string(),
            code: ids::CODE_MISSING_ID.to_string(),
            message: "component id must not be empty; the filename cannot be matched against it"
                .to_string(),
            location: Some(Location::document(filename)),
            help: Some("Add an <id/> element and name the file <id>.metainfo.xml.".to_string()),
            url: Some(tag_url("id-generic")),
            fingerprint: Some(fingerprint_for(
                ids::CHECK_DOCUMENT_FILENAME,
                ids::CODE_MISSING_ID,
                filename,
                None,
            )),
            data: json!({ "actual": filename }),
        });
    }

    if matches_id(filename, id, cfg.filename_suffixes) {
        return None;
    }

    Some(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_DOCUMENT_FILENAME.to_string(),
        code: ids::CODE_FILENAME_MISMATCH.to_string(),
        message: "filename must be the component id with a .metainfo.xml or .appdata.xml extension"
            .to_string(),
        location: Some(Location::document(filename)),
        help: Some("Rename the file after the component id.".to_string()),
        url: Some(tag_url("id-generic")),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_DOCUMENT_FILENAME,
            ids::CODE_FILENAME_MISMATCH,
            filename,
            Some(id),
        )),
        data: json!({
            "expected": cfg.preferred_filename(id),
            "actual": filename,
            "id": id,
        }),
    })
}

fn matches_id(filename: &str, id: &str, suffixes: &[&str]) -> bool {
    filename
        .strip_prefix(id)
        .is_some_and(|rest| suffixes.contains(&rest))
}
