//! Document adapters: read a metainfo file and decode it into the component model.
//!
//! This crate is allowed to do filesystem IO. Rule evaluation lives in `metalint-domain`.

#![forbid(unsafe_code)]

mod decode;
mod xml;

use anyhow::Context;
use camino::Utf8Path;
use metalint_domain::model::Component;
use thiserror::Error;

pub use decode::decode_component;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("malformed XML near byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("document has no root element")]
    Empty,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("expected root element <component>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("invalid integer in <{element} {attribute}=\"{value}\">")]
    InvalidInteger {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

/// A decoded document together with the name used for filename correlation.
#[derive(Clone, Debug)]
pub struct LoadedDocument {
    /// Final path component of the document path.
    pub filename: String,
    pub component: Component,
}

/// Read and decode the document at `path`.
pub fn load_document(path: &Utf8Path) -> anyhow::Result<LoadedDocument> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path))?;
    tracing::debug!(path = %path, bytes = bytes.len(), "read document");

    let component = decode_component(&bytes).with_context(|| format!("parse {}", path))?;
    let filename = path.file_name().unwrap_or(path.as_str()).to_string();

    Ok(LoadedDocument {
        filename,
        component,
    })
}

/// Fuzz-friendly API for testing decoding robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Decode arbitrary bytes as a metainfo document.
    ///
    /// Returns `Ok(())` when the bytes decode into a component, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn decode(data: &[u8]) -> Result<(), DecodeError> {
        decode_component(data).map(|_| ())
    }
}
