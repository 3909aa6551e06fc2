use metalint_types::{Finding, Severity, VerdictStatus};

/// Outcome of one validation run.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// No mandatory rule was violated.
    Accepted { warnings: Vec<Finding> },
    /// The first violated mandatory rule, plus the warnings emitted before it.
    Rejected {
        error: Finding,
        warnings: Vec<Finding>,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    pub fn error(&self) -> Option<&Finding> {
        match self {
            Verdict::Accepted { .. } => None,
            Verdict::Rejected { error, .. } => Some(error),
        }
    }

    pub fn warnings(&self) -> &[Finding] {
        match self {
            Verdict::Accepted { warnings } | Verdict::Rejected { warnings, .. } => warnings,
        }
    }

    /// All findings in emission order: warnings first, then the error (if any).
    pub fn findings(&self) -> Vec<Finding> {
        let mut out = self.warnings().to_vec();
        if let Some(error) = self.error() {
            out.push(error.clone());
        }
        out
    }

    pub fn status(&self) -> VerdictStatus {
        match self {
            Verdict::Rejected { .. } => VerdictStatus::Fail,
            Verdict::Accepted { warnings } if warnings.is_empty() => VerdictStatus::Pass,
            Verdict::Accepted { .. } => VerdictStatus::Warn,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub counts: SeverityCounts,
    /// Number of pipeline checks that were evaluated before stopping.
    pub checks_run: u32,
    /// Number of screenshots whose image was inspected.
    pub screenshots_checked: u32,
}
