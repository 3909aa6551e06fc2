//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after document examples.
    pub examples: ExamplePair,
}

/// Before and after document examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Markup that would trigger a finding.
    pub before: &'static str,
    /// Markup that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_DOCUMENT_FILENAME => Some(explain_filename()),
        ids::CHECK_COMPONENT_REQUIRED_FIELDS => Some(explain_required_fields()),
        ids::CHECK_COMPONENT_KIND => Some(explain_component_kind()),
        ids::CHECK_COMPONENT_METADATA_LICENSE => Some(explain_metadata_license()),
        ids::CHECK_COMPONENT_NAME => Some(explain_name()),
        ids::CHECK_COMPONENT_SUMMARY => Some(explain_summary()),
        ids::CHECK_LAUNCHABLE_KIND => Some(explain_launchable()),
        ids::CHECK_SCREENSHOTS_PRESENT => Some(explain_screenshots_present()),
        ids::CHECK_SCREENSHOTS_IMAGES => Some(explain_screenshot_images()),

        // Codes
        ids::CODE_MISSING_ID => Some(explain_missing_id()),
        ids::CODE_FILENAME_MISMATCH => Some(explain_filename()),
        ids::CODE_EMPTY_FIELD => Some(explain_required_fields()),
        ids::CODE_UNSUPPORTED_KIND => Some(explain_component_kind()),
        ids::CODE_LICENSE_NOT_ALLOWED => Some(explain_metadata_license()),
        ids::CODE_NAME_TOO_SHORT => Some(explain_name()),
        ids::CODE_SUMMARY_TOO_SHORT => Some(explain_summary()),
        ids::CODE_UNSUPPORTED_LAUNCHABLE => Some(explain_launchable()),
        ids::CODE_NO_SCREENSHOTS => Some(explain_screenshots_present()),
        ids::CODE_UNSUPPORTED_IMAGE_KIND => Some(explain_unsupported_image_kind()),
        ids::CODE_SOURCE_NOT_HTTP => Some(explain_source_not_http()),
        ids::CODE_SOURCE_BAD_EXTENSION => Some(explain_source_bad_extension()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_DOCUMENT_FILENAME,
        ids::CHECK_COMPONENT_REQUIRED_FIELDS,
        ids::CHECK_COMPONENT_KIND,
        ids::CHECK_COMPONENT_METADATA_LICENSE,
        ids::CHECK_COMPONENT_NAME,
        ids::CHECK_COMPONENT_SUMMARY,
        ids::CHECK_LAUNCHABLE_KIND,
        ids::CHECK_SCREENSHOTS_PRESENT,
        ids::CHECK_SCREENSHOTS_IMAGES,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_ID,
        ids::CODE_FILENAME_MISMATCH,
        ids::CODE_EMPTY_FIELD,
        ids::CODE_UNSUPPORTED_KIND,
        ids::CODE_LICENSE_NOT_ALLOWED,
        ids::CODE_NAME_TOO_SHORT,
        ids::CODE_SUMMARY_TOO_SHORT,
        ids::CODE_UNSUPPORTED_LAUNCHABLE,
        ids::CODE_NO_SCREENSHOTS,
        ids::CODE_UNSUPPORTED_IMAGE_KIND,
        ids::CODE_SOURCE_NOT_HTTP,
        ids::CODE_SOURCE_BAD_EXTENSION,
    ]
}

// --- Check-level explanations ---

fn explain_filename() -> Explanation {
    Explanation {
        title: "Filename Matches Component ID",
        description: "\
The metainfo file must be named after the component `<id/>`, with either the
`.metainfo.xml` extension or the legacy `.appdata.xml` extension.

Packaging tools locate the document by its ID. A file whose name does not match
the ID is silently ignored by software centers, so the mismatch is fatal.",
        remediation: "\
Rename the file to `<id>.metainfo.xml`, for example:

    org.example.Editor.metainfo.xml

The legacy `<id>.appdata.xml` name is still accepted for older projects.",
        examples: ExamplePair {
            before: r#"<!-- file: editor.xml -->
<component type="desktop-application">
  <id>org.example.Editor</id>
</component>"#,
            after: r#"<!-- file: org.example.Editor.metainfo.xml -->
<component type="desktop-application">
  <id>org.example.Editor</id>
</component>"#,
        },
    }
}

fn explain_missing_id() -> Explanation {
    let mut exp = explain_filename();
    exp.title = "Missing Component ID";
    exp
}

fn explain_required_fields() -> Explanation {
    Explanation {
        title: "Required Fields Present",
        description: "\
Every desktop-application component must declare:
- the component `type` attribute
- `<id/>`
- `<name/>`
- `<summary/>`
- `<metadata_license/>`
- `<project_license/>`
- `<description/>`
- `<launchable/>` with its `type` attribute

Fields are checked in that order and the first empty one is reported.
Translated elements (carrying `xml:lang`) do not count.",
        remediation: "\
Add the missing element with a non-empty, untranslated value.",
        examples: ExamplePair {
            before: r#"<component type="desktop-application">
  <id>org.example.Editor</id>
  <name>Editor</name>
</component>"#,
            after: r#"<component type="desktop-application">
  <id>org.example.Editor</id>
  <name>Editor</name>
  <summary>Edit plain text files</summary>
  <metadata_license>CC0-1.0</metadata_license>
  <project_license>GPL-3.0-or-later</project_license>
  <description><p>A small text editor.</p></description>
  <launchable type="desktop-id">org.example.Editor.desktop</launchable>
</component>"#,
        },
    }
}

fn explain_component_kind() -> Explanation {
    Explanation {
        title: "Desktop Application Component Type",
        description: "\
Only desktop applications can be packaged. The `type` attribute of the root
`<component>` must be `desktop-application`.

The older `desktop` value is accepted for compatibility with pre-2016 tooling,
but should not be used for new files.",
        remediation: "\
Set `type=\"desktop-application\"` on the root element.",
        examples: ExamplePair {
            before: r#"<component type="service">"#,
            after: r#"<component type="desktop-application">"#,
        },
    }
}

fn explain_metadata_license() -> Explanation {
    Explanation {
        title: "Permissive Metadata License",
        description: "\
The metainfo file itself must be licensed under a permissive license so that
distributors can aggregate it. The accepted licenses are:

FSFAP, MIT, 0BSD, CC0-1.0, CC-BY-3.0, CC-BY-4.0, CC-BY-SA-3.0, CC-BY-SA-4.0,
GFDL-1.1, GFDL-1.2, GFDL-1.3, BSL-1.0, FTL, FSFUL

Newer revisions of the metadata format may allow more licenses, so a miss is
reported as a warning rather than an error.",
        remediation: "\
Use one of the accepted licenses, `CC0-1.0` being the most common choice.
This license covers the metadata file only, not the application.",
        examples: ExamplePair {
            before: r#"<metadata_license>GPL-3.0-or-later</metadata_license>"#,
            after: r#"<metadata_license>CC0-1.0</metadata_license>"#,
        },
    }
}

fn explain_name() -> Explanation {
    Explanation {
        title: "Application Name Length",
        description: "\
`<name/>` is the human-readable name users see before installing the
application. It must be at least 2 characters long.",
        remediation: "\
Use the full product name.",
        examples: ExamplePair {
            before: r#"<name>E</name>"#,
            after: r#"<name>Editor</name>"#,
        },
    }
}

fn explain_summary() -> Explanation {
    Explanation {
        title: "Summary Length",
        description: "\
`<summary/>` is a short description of what the application does, roughly the
`Comment` field of its desktop file. It must be at least 10 characters long.",
        remediation: "\
Describe the purpose of the application in a short sentence.",
        examples: ExamplePair {
            before: r#"<summary>Editor</summary>"#,
            after: r#"<summary>Edit plain text files</summary>"#,
        },
    }
}

fn explain_launchable() -> Explanation {
    Explanation {
        title: "Desktop-ID Launchable",
        description: "\
`<launchable/>` declares how the application is started. Only the `desktop-id`
type is supported: the value names the desktop file that launches the
application.",
        remediation: "\
Declare the desktop file with `type=\"desktop-id\"`.",
        examples: ExamplePair {
            before: r#"<launchable type="service">editor</launchable>"#,
            after: r#"<launchable type="desktop-id">org.example.Editor.desktop</launchable>"#,
        },
    }
}

fn explain_screenshots_present() -> Explanation {
    Explanation {
        title: "Screenshots Recommended",
        description: "\
Software centers show screenshots prominently. A document without any
`<screenshot/>` is accepted, but a warning is reported.",
        remediation: "\
Add at least one screenshot with a source image.",
        examples: ExamplePair {
            before: r#"<component type="desktop-application">
  <!-- no screenshots -->
</component>"#,
            after: r#"<screenshots>
  <screenshot type="default">
    <caption>The main window</caption>
    <image type="source">https://example.org/editor/main.png</image>
  </screenshot>
</screenshots>"#,
        },
    }
}

fn explain_screenshot_images() -> Explanation {
    Explanation {
        title: "Screenshot Images",
        description: "\
Every screenshot image must have type `source`, `video`, or no type at all.
Source images must be HTTP(S) URLs ending in `.png`, `.jpg` or `.jpeg`.

Screenshots are checked in document order and the first violation stops
validation. URLs are only checked by prefix and suffix; they are not fetched.",
        remediation: "\
Point each source image at a publicly reachable PNG or JPEG over http(s).",
        examples: ExamplePair {
            before: r#"<image type="source">ftp://example.org/main.gif</image>"#,
            after: r#"<image type="source">https://example.org/main.png</image>"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_unsupported_image_kind() -> Explanation {
    let mut exp = explain_screenshot_images();
    exp.title = "Unsupported Image Type";
    exp.examples = ExamplePair {
        before: r#"<image type="poster">https://example.org/main.png</image>"#,
        after: r#"<image type="source">https://example.org/main.png</image>"#,
    };
    exp
}

fn explain_source_not_http() -> Explanation {
    let mut exp = explain_screenshot_images();
    exp.title = "Image Source Must Be HTTP(S)";
    exp.examples = ExamplePair {
        before: r#"<image type="source">ftp://example.org/main.png</image>"#,
        after: r#"<image type="source">https://example.org/main.png</image>"#,
    };
    exp
}

fn explain_source_bad_extension() -> Explanation {
    let mut exp = explain_screenshot_images();
    exp.title = "Image Source Extension";
    exp.examples = ExamplePair {
        before: r#"<image type="source">https://example.org/main.gif</image>"#,
        after: r#"<image type="source">https://example.org/main.png</image>"#,
    };
    exp
}
