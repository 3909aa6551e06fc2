//! Map the element tree onto the component model.

use crate::DecodeError;
use crate::xml::{Element, parse_root};
use metalint_domain::model::{Component, Image, Launchable, Screenshot};

const ROOT: &str = "component";

/// Decode a metainfo document.
///
/// Absent elements and attributes decode to empty strings and zero dimensions,
/// leaving presence checks to the rule pipeline.
pub fn decode_component(bytes: &[u8]) -> Result<Component, DecodeError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let text = std::str::from_utf8(bytes)?;
    let root = parse_root(text)?;

    if root.name != ROOT {
        return Err(DecodeError::UnexpectedRoot(root.name));
    }

    Ok(Component {
        kind: root.attr("type").unwrap_or_default().to_string(),
        id: child_text(&root, "id"),
        name: child_text(&root, "name"),
        summary: child_text(&root, "summary"),
        metadata_license: child_text(&root, "metadata_license"),
        project_license: child_text(&root, "project_license"),
        description: child_text(&root, "description"),
        launchable: root.child("launchable").map(launchable).unwrap_or_default(),
        screenshots: screenshots(&root)?,
    })
}

fn child_text(parent: &Element, name: &str) -> String {
    parent.child(name).map(Element::text).unwrap_or_default()
}

fn launchable(el: &Element) -> Launchable {
    Launchable {
        kind: el.attr("type").unwrap_or_default().to_string(),
        value: el.text(),
    }
}

fn screenshots(root: &Element) -> Result<Vec<Screenshot>, DecodeError> {
    let Some(list) = root.child("screenshots") else {
        return Ok(Vec::new());
    };

    list.children_named("screenshot")
        .map(|el| {
            let image = el
                .child("image")
                .or_else(|| el.children_named("image").next())
                .map(decode_image)
                .transpose()?
                .unwrap_or_default();

            Ok(Screenshot {
                caption: child_text(el, "caption"),
                environment: el.attr("environment").unwrap_or_default().to_string(),
                image,
            })
        })
        .collect()
}

fn decode_image(el: &Element) -> Result<Image, DecodeError> {
    Ok(Image {
        kind: el.attr("type").unwrap_or_default().to_string(),
        width: dimension(el, "width")?,
        height: dimension(el, "height")?,
        source: el.text(),
    })
}

fn dimension(el: &Element, attribute: &'static str) -> Result<i64, DecodeError> {
    let Some(raw) = el.attr(attribute) else {
        return Ok(0);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| DecodeError::InvalidInteger {
        element: "image",
        attribute,
        value: raw.to_string(),
    })
}
