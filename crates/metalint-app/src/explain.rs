//! The `explain` use case: look up check/code documentation.

use metalint_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let underline = "=".repeat(exp.title.chars().count());

    let mut out = format!("{}\n{}\n\n{}\n\n", exp.title, underline, exp.description);
    out.push_str("Remediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");

    for (label, snippet) in [
        ("Before (violation)", exp.examples.before),
        ("After (fixed)", exp.examples.after),
    ] {
        out.push_str(&format!("{label}:\n```xml\n{}\n```\n", snippet.trim_end()));
        if label.starts_with("Before") {
            out.push('\n');
        }
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {}\n\n", identifier);

    out.push_str("Available check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
