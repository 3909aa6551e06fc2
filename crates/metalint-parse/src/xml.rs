//! Minimal element tree built from quick-xml events.
//!
//! Metainfo documents are small, so a tree keeps the mapping code straightforward.

use crate::DecodeError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Translated elements carry `xml:lang`; only the untranslated value counts.
    pub fn is_translated(&self) -> bool {
        self.attr("xml:lang").is_some()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Children are borrowed from `self`; `name` only has to live as long as the iterator.
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Element> + use<'a, 'n> {
        self.elements().filter(move |e| e.name == name)
    }

    /// First untranslated child with the given name.
    pub fn child<'a>(&'a self, name: &str) -> Option<&'a Element> {
        self.children_named(name).find(|e| !e.is_translated())
    }

    /// Text of the element and all descendants: each piece trimmed, joined by a space.
    pub fn text(&self) -> String {
        let mut pieces = Vec::new();
        self.collect_text(&mut pieces);
        pieces.join(" ")
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for node in &self.children {
            match node {
                Node::Text(t) => {
                    let t = t.trim();
                    if !t.is_empty() {
                        out.push(t);
                    }
                }
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Parse `text` and return its root element. Content after the root is ignored.
pub fn parse_root(text: &str) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|source| xml_error(&reader, source))?;

        match event {
            Event::Start(start) => {
                stack.push(start_element(&reader, &start)?);
            }
            Event::Empty(start) => {
                let element = start_element(&reader, &start)?;
                if let Some(root) = attach(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::End(_) => {
                let Some(element) = stack.pop() else {
                    continue;
                };
                if let Some(root) = attach(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::Text(t) => {
                if let Some(current) = stack.last_mut() {
                    let value = t.unescape().map_err(|source| xml_error(&reader, source))?;
                    current.children.push(Node::Text(value.into_owned()));
                }
            }
            Event::CData(c) => {
                if let Some(current) = stack.last_mut() {
                    let value = String::from_utf8_lossy(&c).into_owned();
                    current.children.push(Node::Text(value));
                }
            }
            Event::Eof => {
                return match stack.into_iter().next() {
                    Some(open) => Err(DecodeError::Unclosed(open.name)),
                    None => Err(DecodeError::Empty),
                };
            }
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
    }
}

/// Attach a finished element to its parent; returns it when it was the root.
fn attach(stack: &mut [Element], element: Element) -> Option<Element> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(element));
            None
        }
        None => Some(element),
    }
}

fn start_element(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, DecodeError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| xml_error(reader, source.into()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|source| xml_error(reader, source))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn xml_error(reader: &Reader<&[u8]>, source: quick_xml::Error) -> DecodeError {
    DecodeError::Xml {
        position: reader.buffer_position() as u64,
        source,
    }
}
