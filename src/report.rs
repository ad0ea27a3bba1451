use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::recipe::types::{Finding, Severity};

/// Findings of one validation run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    files_scanned: usize,
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the findings of one scanned file.
    pub fn record(&mut self, findings: Vec<Finding>) {
        self.files_scanned += 1;
        self.findings.extend(findings);
    }

    /// Appends a finding that does not belong to a scanned file.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.severity() == severity)
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 5)?;
        state.serialize_field("files_scanned", &self.files_scanned)?;
        state.serialize_field("error_count", &self.error_count())?;
        state.serialize_field("warning_count", &self.warning_count())?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("findings", &self.findings)?;
        state.end()
    }
}
