//! Fuzz target for rule evaluation over structured components.
//!
//! Goal: validation should **never panic**, including on short or non-ASCII
//! screenshot sources, and the verdict must be consistent with its findings.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use metalint_domain::model::{Component, Image, Launchable, Screenshot};
use metalint_domain::{RuleConfig, evaluate};

#[derive(Arbitrary, Debug)]
struct FuzzShot {
    kind: String,
    source: String,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    filename: String,
    kind: String,
    id: String,
    name: String,
    summary: String,
    metadata_license: String,
    project_license: String,
    description: String,
    launchable_kind: String,
    launchable: String,
    screenshots: Vec<FuzzShot>,
}

fuzz_target!(|input: FuzzInput| {
    let component = Component {
        kind: input.kind,
        id: input.id,
        name: input.name,
        summary: input.summary,
        metadata_license: input.metadata_license,
        project_license: input.project_license,
        description: input.description,
        launchable: Launchable {
            kind: input.launchable_kind,
            value: input.launchable,
        },
        screenshots: input
            .screenshots
            .into_iter()
            .map(|s| Screenshot {
                image: Image {
                    kind: s.kind,
                    source: s.source,
                    ..Image::default()
                },
                ..Screenshot::default()
            })
            .collect(),
    };

    let report = evaluate(&component, &input.filename, &RuleConfig::DEFAULT);
    assert_eq!(report.verdict.is_accepted(), report.counts.error == 0);
    assert!(report.screenshots_checked as usize <= component.screenshots.len());
});
