//! Render use cases: text, markdown and GitHub annotations from in-memory reports.

use metalint_render::RenderableReport;

pub fn render_text(report: &RenderableReport) -> String {
    metalint_render::render_text(report)
}

pub fn render_markdown(report: &RenderableReport) -> String {
    metalint_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    metalint_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}
