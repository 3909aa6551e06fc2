//! Component data model handed over by the decoder.
//!
//! Absent elements and attributes are represented as empty strings.

use serde::{Deserialize, Serialize};

/// Root entity: one `<component>` per document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// The `type` attribute, e.g. `desktop-application`.
    pub kind: String,
    pub id: String,
    pub name: String,
    pub summary: String,
    pub metadata_license: String,
    pub project_license: String,
    pub description: String,
    pub launchable: Launchable,
    /// Display order; not semantically checked.
    pub screenshots: Vec<Screenshot>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launchable {
    /// The `type` attribute, e.g. `desktop-id`.
    pub kind: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub caption: String,
    pub environment: String,
    pub image: Image,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// `source`, `video`, or empty when unset.
    pub kind: String,
    pub width: i64,
    pub height: i64,
    pub source: String,
}

impl Component {
    /// Mandatory fields in declaration order, paired with their document names.
    pub fn required_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("type", self.kind.as_str()),
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("summary", self.summary.as_str()),
            ("metadata_license", self.metadata_license.as_str()),
            ("project_license", self.project_license.as_str()),
            ("description", self.description.as_str()),
            ("launchable type", self.launchable.kind.as_str()),
            ("launchable", self.launchable.value.as_str()),
        ]
    }
}

impl Image {
    pub fn is_source(&self) -> bool {
        self.kind == "source"
    }
}
