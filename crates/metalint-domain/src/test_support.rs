use crate::model::{Component, Image, Launchable, Screenshot};

pub const FILENAME: &str = "org.example.Editor.metainfo.xml";

/// A minimal component that passes every mandatory rule (and has no screenshots).
pub fn valid_component() -> Component {
    Component {
        kind: "desktop-application".to_string(),
        id: "org.example.Editor".to_string(),
        name: "Editor".to_string(),
        summary: "Edit plain text files".to_string(),
        metadata_license: "MIT".to_string(),
        project_license: "GPL-3.0-or-later".to_string(),
        description: "A small text editor.".to_string(),
        launchable: Launchable {
            kind: "desktop-id".to_string(),
            value: "org.example.Editor.desktop".to_string(),
        },
        screenshots: Vec::new(),
    }
}

pub fn screenshot(kind: &str, source: &str) -> Screenshot {
    Screenshot {
        caption: String::new(),
        environment: String::new(),
        image: Image {
            kind: kind.to_string(),
            width: 1600,
            height: 900,
            source: source.to_string(),
        },
    }
}
