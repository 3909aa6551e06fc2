//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks, in evaluation order
pub const CHECK_DOCUMENT_FILENAME: &str = "document.filename";
pub const CHECK_COMPONENT_REQUIRED_FIELDS: &str = "component.required_fields";
pub const CHECK_COMPONENT_KIND: &str = "component.kind";
pub const CHECK_COMPONENT_METADATA_LICENSE: &str = "component.metadata_license";
pub const CHECK_COMPONENT_NAME: &str = "component.name";
pub const CHECK_COMPONENT_SUMMARY: &str = "component.summary";
pub const CHECK_LAUNCHABLE_KIND: &str = "launchable.kind";
pub const CHECK_SCREENSHOTS_PRESENT: &str = "screenshots.present";
pub const CHECK_SCREENSHOTS_IMAGES: &str = "screenshots.images";

// Codes: document.filename
pub const CODE_MISSING_ID: &str = "missing_id";
pub const CODE_FILENAME_MISMATCH: &str = "filename_mismatch";

// Codes: component.required_fields
pub const CODE_EMPTY_FIELD: &str = "empty_field";

// Codes: component.kind
pub const CODE_UNSUPPORTED_KIND: &str = "unsupported_kind";

// Codes: component.metadata_license
pub const CODE_LICENSE_NOT_ALLOWED: &str = "license_not_allowed";

// Codes: component.name
pub const CODE_NAME_TOO_SHORT: &str = "name_too_short";

// Codes: component.summary
pub const CODE_SUMMARY_TOO_SHORT: &str = "summary_too_short";

// Codes: launchable.kind
pub const CODE_UNSUPPORTED_LAUNCHABLE: &str = "unsupported_launchable";

// Codes: screenshots.present
pub const CODE_NO_SCREENSHOTS: &str = "no_screenshots";

// Codes: screenshots.images
pub const CODE_UNSUPPORTED_IMAGE_KIND: &str = "unsupported_image_kind";
pub const CODE_SOURCE_NOT_HTTP: &str = "source_not_http";
pub const CODE_SOURCE_BAD_EXTENSION: &str = "source_bad_extension";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
