use crate::checks::utils::{quoted_list, tag_url};
use crate::fingerprint::fingerprint_for;
use crate::model::{Component, Image};
use crate::policy::RuleConfig;
use metalint_types::{Finding, Location, Severity, ids};
use serde_json::json;

/// Checks screenshots in document order and stops at the first violation.
///
/// Only `source` images carry a URL; `video` and untyped images are accepted as-is.
/// URLs are checked by prefix and suffix only.
pub fn run(component: &Component, filename: &str, cfg: &RuleConfig) -> Option<Finding> {
    component
        .screenshots
        .iter()
        .enumerate()
        .find_map(|(idx, shot)| check_image(&shot.image, idx + 1, filename, cfg))
}

fn check_image(
    image: &Image,
    position: usize,
    filename: &str,
    cfg: &RuleConfig,
) -> Option<Finding> {
    if !cfg.image_kinds.contains(&image.kind.as_str()) {
        let named: Vec<&str> = cfg
            .image_kinds
            .iter()
            .copied()
            .filter(|k| !k.is_empty())
            .collect();
        return Some(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_SCREENSHOTS_IMAGES.to_string(),
            code: ids::CODE_UNSUPPORTED_IMAGE_KIND.to_string(),
            message: format!(
                "screenshot #{position}: image type must be {}",
                quoted_list(&named).replace(", ", " or ")
            ),
            location: Some(Location::document(filename)),
            help: Some("Use type=\"source\" for screenshot images.".to_string()),
            url: Some(tag_url("screenshots")),
            fingerprint: Some(fingerprint_for(
                ids::CHECK_SCREENSHOTS_IMAGES,
                ids::CODE_UNSUPPORTED_IMAGE_KIND,
                filename,
                Some(image.kind.as_str()),
            )),
            data: json!({
                "screenshot": position,
                "allowed": named,
                "actual": image.kind,
            }),
        });
    }

    if !image.is_source() {
        return None;
    }

    let source = image.source.as_str();

    if !has_url_scheme(source, cfg.url_schemes) {
        return Some(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_SCREENSHOTS_IMAGES.to_string(),
            code: ids::CODE_SOURCE_NOT_HTTP.to_string(),
            message: format!(
                "screenshot #{position}: image source must start with http:// or https://"
            ),
            location: Some(Location::document(filename)),
            help: Some("Serve screenshot images over http(s).".to_string()),
            url: Some(tag_url("screenshots")),
            fingerprint: Some(fingerprint_for(
                ids::CHECK_SCREENSHOTS_IMAGES,
                ids::CODE_SOURCE_NOT_HTTP,
                filename,
                Some(source),
            )),
            data: json!({
                "screenshot": position,
                "allowed": cfg.url_schemes,
                "actual": source,
            }),
        });
    }

    if !has_image_extension(source, cfg.image_extensions) {
        return Some(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_SCREENSHOTS_IMAGES.to_string(),
            code: ids::CODE_SOURCE_BAD_EXTENSION.to_string(),
            message: format!(
                "screenshot #{position}: image source must end with a valid image extension"
            ),
            location: Some(Location::document(filename)),
            help: Some("Publish screenshots as PNG or JPEG images.".to_string()),
            url: Some(tag_url("screenshots")),
            fingerprint: Some(fingerprint_for(
                ids::CHECK_SCREENSHOTS_IMAGES,
                ids::CODE_SOURCE_BAD_EXTENSION,
                filename,
                Some(source),
            )),
            data: json!({
                "screenshot": position,
                "allowed": cfg.image_extensions,
                "actual": actual_extension(source),
                "source": source,
            }),
        });
    }

    None
}

/// `starts_with` never reads past the end, so sources shorter than a scheme are safe.
fn has_url_scheme(source: &str, schemes: &[&str]) -> bool {
    schemes.iter().any(|scheme| source.starts_with(scheme))
}

/// Each candidate is tested on its own; a bare `.png` has no file name and does not count.
fn has_image_extension(source: &str, extensions: &[&str]) -> bool {
    extensions
        .iter()
        .any(|ext| source.len() > ext.len() && source.ends_with(ext))
}

/// The extension of the last path segment including the dot, or `""` when there is none.
fn actual_extension(source: &str) -> &str {
    let segment = source.rsplit('/').next().unwrap_or(source);
    match segment.rfind('.') {
        Some(idx) => &segment[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_check_handles_short_strings() {
        let schemes = &["http://", "https://"];
        assert!(!has_url_scheme("", schemes));
        assert!(!has_url_scheme("ht", schemes));
        assert!(!has_url_scheme("http:/", schemes));
        assert!(has_url_scheme("http://", schemes));
        assert!(has_url_scheme("https://x", schemes));
        assert!(!has_url_scheme("HTTPS://x", schemes));
    }

    #[test]
    fn extension_check_is_case_sensitive_and_needs_a_stem() {
        let exts = &[".png", ".jpg", ".jpeg"];
        assert!(has_image_extension("https://e.org/a.png", exts));
        assert!(has_image_extension("https://e.org/a.jpeg", exts));
        assert!(!has_image_extension("https://e.org/a.PNG", exts));
        assert!(!has_image_extension(".png", exts));
        assert!(!has_image_extension("png", exts));
        assert!(!has_image_extension("", exts));
    }

    #[test]
    fn actual_extension_is_taken_from_last_segment() {
        assert_eq!(actual_extension("https://example.com/a.gif"), ".gif");
        assert_eq!(actual_extension("https://example.com/shots/main"), "");
        assert_eq!(actual_extension("https://example.com/a.tar.gz"), ".gz");
        assert_eq!(actual_extension("ht"), "");
        assert_eq!(actual_extension(""), "");
    }

    #[test]
    fn actual_extension_handles_multibyte_text() {
        assert_eq!(actual_extension("https://e.org/écran.wébp"), ".wébp");
        assert_eq!(actual_extension("日本"), "");
    }
}
