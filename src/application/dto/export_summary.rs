use crate::shared::error::ExitCode;
use std::fmt;
use std::path::PathBuf;

/// An output that could not be produced, with the error that stopped it
#[derive(Debug)]
pub struct ExportFailure {
    /// What was being produced, e.g. `output/components.csv`
    pub target: String,
    pub error: anyhow::Error,
}

impl ExportFailure {
    pub fn new(target: impl Into<String>, error: anyhow::Error) -> Self {
        Self {
            target: target.into(),
            error,
        }
    }
}

impl fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_failure(&self.target, &self.error))
    }
}

/// Console text for a failed output: the error followed by one
/// `Caused by` line per source in its chain
pub fn describe_failure(target: &str, error: &anyhow::Error) -> String {
    let mut text = format!("❌ Could not produce {}:\n{}", target, error);
    for cause in error.chain().skip(1) {
        text.push_str(&format!("\nCaused by: {}", cause));
    }
    text
}

/// ExportSummary - Outcome of one exporter run
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Files written, in the order they completed
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Exit status for the process: any failure turns into `ExportFailed`
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::Success
        } else {
            ExitCode::ExportFailed
        }
    }

    pub fn completion_message(&self) -> String {
        if self.is_success() {
            format!("✅ Export complete: {} file(s) written", self.written.len())
        } else {
            format!(
                "⚠️  Export finished with {} failure(s); {} file(s) written",
                self.failures.len(),
                self.written.len()
            )
        }
    }
}
