//! Stable DTOs and IDs used across the metalint workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Finding, Location, MetalintData, MetalintReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, VerdictStatus,
};
