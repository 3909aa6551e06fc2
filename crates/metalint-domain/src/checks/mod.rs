//! The rule pipeline. Each check is a pure function of the component, the document
//! filename and the rule configuration; the engine runs them in the order below.

use crate::model::Component;
use crate::policy::RuleConfig;
use metalint_types::{Finding, ids};

mod component_kind;
mod filename;
mod launchable_kind;
mod metadata_license;
mod name_length;
mod required_fields;
mod screenshot_images;
mod screenshots_present;
mod summary_length;
mod utils;


pub type CheckFn = fn(&Component, &str, &RuleConfig) -> Option<Finding>;

#[derive(Clone, Copy, Debug)]
pub struct Check {
    pub id: &'static str,
    pub run: CheckFn,
}

/// Evaluation order. Warnings never stop the pipeline; the first error does.
pub const PIPELINE: &[Check] = &[
    Check {
        id: ids::CHECK_DOCUMENT_FILENAME,
        run: filename::run,
    },
    Check {
        id: ids::CHECK_COMPONENT_REQUIRED_FIELDS,
        run: required_fields::run,
    },
    Check {
        id: ids::CHECK_COMPONENT_KIND,
        run: component_kind::run,
    },
    Check {
        id: ids::CHECK_COMPONENT_METADATA_LICENSE,
        run: metadata_license::run,
    },
    Check {
        id: ids::CHECK_COMPONENT_NAME,
        run: name_length::run,
    },
    Check {
        id: ids::CHECK_COMPONENT_SUMMARY,
        run: summary_length::run,
    },
    Check {
        id: ids::CHECK_LAUNCHABLE_KIND,
        run: launchable_kind::run,
    },
    Check {
        id: ids::CHECK_SCREENSHOTS_PRESENT,
        run: screenshots_present::run,
    },
    Check {
        id: ids::CHECK_SCREENSHOTS_IMAGES,
        run: screenshot_images::run,
    },
];
