use metalint_types::{Severity, VerdictStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Warning,
    Error,
}

impl From<Severity> for RenderableSeverity {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

impl From<VerdictStatus> for RenderableVerdictStatus {
    fn from(value: VerdictStatus) -> Self {
        match value {
            VerdictStatus::Pass => Self::Pass,
            VerdictStatus::Warn => Self::Warn,
            VerdictStatus::Fail => Self::Fail,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    pub help: Option<String>,
    pub url: Option<String>,
    /// Labelled values shown under the message, e.g. `("actual", "service")`.
    pub details: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub document: String,
    pub checks_run: u32,
    pub errors: u32,
    pub warnings: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
