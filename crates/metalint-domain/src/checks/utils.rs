const DOCS_METADATA: &str = "https://www.freedesktop.org/software/appstream/docs/chap-Metadata.html";
const DOCS_DESKTOP_APP: &str =
    "https://www.freedesktop.org/software/appstream/docs/sect-Metadata-Application.html";

/// Documentation anchor for a metainfo tag.
pub fn tag_url(tag: &str) -> String {
    format!("{DOCS_METADATA}#tag-{tag}")
}

pub fn desktop_app_url() -> String {
    DOCS_DESKTOP_APP.to_string()
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Human-readable list of allowed values, e.g. `'a', 'b'`.
pub fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
