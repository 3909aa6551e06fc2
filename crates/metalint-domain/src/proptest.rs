//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - filename correlation
//! - length thresholds
//! - allow-list membership
//! - robustness of the URL checks on arbitrary input

use crate::engine::{evaluate, validate};
use crate::policy::RuleConfig;
use crate::report::Verdict;
use crate::test_support::{FILENAME, screenshot, valid_component};
use metalint_types::{Severity, ids};
use proptest::prelude::*;

const CFG: RuleConfig = RuleConfig::DEFAULT;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Reverse-DNS shaped identifiers.
fn arb_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}(\\.[a-zA-Z][a-zA-Z0-9_]{0,10}){1,3}").unwrap()
}

fn arb_filename_suffix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(".metainfo.xml"), Just(".appdata.xml")]
}

fn arb_text(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), min..=max).prop_map(|chars| chars.into_iter().collect())
}

fn error_code(verdict: &Verdict) -> Option<&str> {
    verdict.error().map(|f| f.code.as_str())
}

// ============================================================================
// Filename correlation
// ============================================================================

proptest! {
    #[test]
    fn empty_id_is_always_rejected_at_filename(filename in ".*") {
        let mut component = valid_component();
        component.id = String::new();

        let verdict = validate(&component, &filename, &CFG);
        prop_assert_eq!(error_code(&verdict), Some(ids::CODE_MISSING_ID));
    }

    #[test]
    fn id_with_accepted_suffix_passes_filename(id in arb_id(), suffix in arb_filename_suffix()) {
        let mut component = valid_component();
        component.id = id.clone();

        let filename = format!("{id}{suffix}");
        let verdict = validate(&component, &filename, &CFG);
        prop_assert!(verdict.is_accepted());
    }

    #[test]
    fn other_filenames_are_rejected_at_filename(id in arb_id(), filename in ".*") {
        prop_assume!(filename != format!("{id}.metainfo.xml"));
        prop_assume!(filename != format!("{id}.appdata.xml"));

        let mut component = valid_component();
        component.id = id;

        let verdict = validate(&component, &filename, &CFG);
        prop_assert_eq!(error_code(&verdict), Some(ids::CODE_FILENAME_MISMATCH));
    }
}

// ============================================================================
// Thresholds and allow-lists
// ============================================================================

proptest! {
    #[test]
    fn short_names_are_rejected(name in arb_text(1, 1)) {
        let mut component = valid_component();
        component.name = name;

        let verdict = validate(&component, FILENAME, &CFG);
        prop_assert_eq!(error_code(&verdict), Some(ids::CODE_NAME_TOO_SHORT));
    }

    #[test]
    fn long_enough_names_pass(name in arb_text(2, 40)) {
        let mut component = valid_component();
        component.name = name;

        let verdict = validate(&component, FILENAME, &CFG);
        prop_assert!(verdict.is_accepted());
    }

    #[test]
    fn summary_threshold_is_ten_characters(summary in arb_text(1, 30)) {
        let len = summary.chars().count();
        let mut component = valid_component();
        component.summary = summary;

        let verdict = validate(&component, FILENAME, &CFG);
        if len < 10 {
            prop_assert_eq!(error_code(&verdict), Some(ids::CODE_SUMMARY_TOO_SHORT));
        } else {
            prop_assert!(verdict.is_accepted());
        }
    }

    #[test]
    fn unknown_kinds_are_rejected(kind in "[a-z-]{1,24}") {
        prop_assume!(kind != "desktop-application" && kind != "desktop");
        let mut component = valid_component();
        component.kind = kind;

        let verdict = validate(&component, FILENAME, &CFG);
        prop_assert_eq!(error_code(&verdict), Some(ids::CODE_UNSUPPORTED_KIND));
    }

    #[test]
    fn license_never_changes_the_verdict(license in "[A-Za-z0-9.-]{1,20}") {
        let mut component = valid_component();
        component.metadata_license = license.clone();

        let verdict = validate(&component, FILENAME, &CFG);
        prop_assert!(verdict.is_accepted());

        let expected = if CFG.metadata_licenses.contains(&license.as_str()) { 1 } else { 2 };
        prop_assert_eq!(verdict.warnings().len(), expected);
        prop_assert!(verdict.warnings().iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn non_desktop_id_launchables_are_rejected(kind in "[a-z-]{1,16}") {
        prop_assume!(kind != "desktop-id");
        let mut component = valid_component();
        component.launchable.kind = kind;

        let verdict = validate(&component, FILENAME, &CFG);
        prop_assert_eq!(error_code(&verdict), Some(ids::CODE_UNSUPPORTED_LAUNCHABLE));
    }
}

// ============================================================================
// Screenshot robustness
// ============================================================================

proptest! {
    #[test]
    fn arbitrary_sources_never_panic(source in ".{0,40}") {
        let mut component = valid_component();
        component.screenshots = vec![screenshot("source", &source)];

        let report = evaluate(&component, FILENAME, &CFG);
        if let Some(error) = report.verdict.error() {
            prop_assert_eq!(error.check_id.as_str(), ids::CHECK_SCREENSHOTS_IMAGES);
        }
    }

    #[test]
    fn well_formed_sources_pass(
        scheme in prop_oneof![Just("http://"), Just("https://")],
        path in "[a-z0-9/]{0,20}[a-z0-9]",
        ext in prop_oneof![Just(".png"), Just(".jpg"), Just(".jpeg")],
    ) {
        let mut component = valid_component();
        component.screenshots = vec![screenshot("source", &format!("{scheme}{path}{ext}"))];

        let verdict = validate(&component, FILENAME, &CFG);
        prop_assert!(verdict.is_accepted());
        prop_assert!(verdict.warnings().is_empty());
    }

    #[test]
    fn validation_is_deterministic(kind in "[a-z-]{0,20}", name in arb_text(0, 5)) {
        let mut component = valid_component();
        component.kind = kind;
        component.name = name;

        let first = validate(&component, FILENAME, &CFG);
        let second = validate(&component, FILENAME, &CFG);
        prop_assert_eq!(first, second);
    }
}
