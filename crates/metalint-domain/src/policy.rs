/// Licenses accepted for the metainfo file itself.
pub const METADATA_LICENSES: &[&str] = &[
    "FSFAP",
    "MIT",
    "0BSD",
    "CC0-1.0",
    "CC-BY-3.0",
    "CC-BY-4.0",
    "CC-BY-SA-3.0",
    "CC-BY-SA-4.0",
    "GFDL-1.1",
    "GFDL-1.2",
    "GFDL-1.3",
    "BSL-1.0",
    "FTL",
    "FSFUL",
];

/// `desktop` is the pre-2016 spelling of `desktop-application`.
pub const COMPONENT_KINDS: &[&str] = &["desktop-application", "desktop"];

/// The empty string stands for an image without a `type` attribute.
pub const IMAGE_KINDS: &[&str] = &["source", "video", ""];

pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

pub const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// `.appdata.xml` is the legacy suffix and is still accepted.
pub const FILENAME_SUFFIXES: &[&str] = &[".appdata.xml", ".metainfo.xml"];

pub const LAUNCHABLE_KIND: &str = "desktop-id";

/// Fixed rule configuration. All tables are process-wide constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleConfig {
    pub component_kinds: &'static [&'static str],
    pub metadata_licenses: &'static [&'static str],
    pub image_kinds: &'static [&'static str],
    pub image_extensions: &'static [&'static str],
    pub url_schemes: &'static [&'static str],
    pub filename_suffixes: &'static [&'static str],
    pub launchable_kind: &'static str,
    /// Minimum length in characters (Unicode scalar values).
    pub min_name_len: usize,
    pub min_summary_len: usize,
}

impl RuleConfig {
    pub const DEFAULT: RuleConfig = RuleConfig {
        component_kinds: COMPONENT_KINDS,
        metadata_licenses: METADATA_LICENSES,
        image_kinds: IMAGE_KINDS,
        image_extensions: IMAGE_EXTENSIONS,
        url_schemes: URL_SCHEMES,
        filename_suffixes: FILENAME_SUFFIXES,
        launchable_kind: LAUNCHABLE_KIND,
        min_name_len: 2,
        min_summary_len: 10,
    };

    /// Filename the document is expected to carry. The first accepted suffix that is
    /// not the legacy one is preferred.
    pub fn preferred_filename(&self, id: &str) -> String {
        let suffix = self
            .filename_suffixes
            .iter()
            .find(|s| **s == ".metainfo.xml")
            .or_else(|| self.filename_suffixes.first())
            .copied()
            .unwrap_or_default();
        format!("{id}{suffix}")
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
