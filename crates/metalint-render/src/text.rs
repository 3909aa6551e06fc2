use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

/// Render findings as plain terminal text.
///
/// Each finding prints as `Error: <message>` or `Warning: <message>`, followed by
/// its detail lines indented by two spaces. Accepted reports end with
/// `Validation complete.`.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for f in &report.findings {
        let label = match f.severity {
            RenderableSeverity::Error => "Error",
            RenderableSeverity::Warning => "Warning",
        };
        out.push_str(&format!("{}: {}\n", label, f.message));

        for (key, value) in &f.details {
            out.push_str(&format!("  {}: {}\n", key, value));
        }
    }

    if report.verdict != RenderableVerdictStatus::Fail {
        out.push_str("Validation complete.\n");
    }

    out
}
