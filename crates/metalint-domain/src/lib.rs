//! Pure rule evaluation (no IO).
//!
//! Input: a decoded component plus the document filename.
//! Output: a fatal-fast verdict (accepted with warnings, or rejected by the first error).

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod proptest;

pub use engine::{evaluate, validate};
pub use policy::RuleConfig;
pub use report::{DomainReport, SeverityCounts, Verdict};
