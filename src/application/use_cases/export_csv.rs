use super::report_fetch::ReportFetch;
use crate::application::dto::{describe_failure, ExportFailure, ExportSummary};
use crate::ports::outbound::{ProgressReporter, ReportFormatter, ReportRepository, ReportWriter};
use crate::report_export::domain::{ComponentRecord, ReportKind, SecurityFinding};
use crate::report_export::services::FieldExtractor;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Destination of the bill-of-materials table
pub const COMPONENTS_CSV_PATH: &str = "output/components.csv";

/// Destination of the security findings table
pub const SECURITY_CSV_PATH: &str = "output/security.csv";

/// ExportCsvUseCase - Exports both reports as CSV tables
///
/// The two reports are fetched concurrently and each one is formatted and
/// written as soon as it arrives. A failure on one side never prevents the
/// other file from being written.
///
/// # Type Parameters
/// * `REPO` - ReportRepository implementation
/// * `CF` - Formatter for `components.csv`
/// * `SF` - Formatter for `security.csv`
/// * `W` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportCsvUseCase<REPO, CF, SF, W, PR> {
    repository: REPO,
    components_formatter: CF,
    security_formatter: SF,
    writer: W,
    progress_reporter: PR,
}

impl<REPO, CF, SF, W, PR> ExportCsvUseCase<REPO, CF, SF, W, PR>
where
    REPO: ReportRepository,
    CF: ReportFormatter<[ComponentRecord]>,
    SF: ReportFormatter<[SecurityFinding]>,
    W: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new ExportCsvUseCase with injected dependencies
    pub fn new(
        repository: REPO,
        components_formatter: CF,
        security_formatter: SF,
        writer: W,
        progress_reporter: PR,
    ) -> Self {
        Self {
            repository,
            components_formatter,
            security_formatter,
            writer,
            progress_reporter,
        }
    }

    /// Runs the export. Errors are collected in the summary, not returned.
    pub async fn execute(&self) -> ExportSummary {
        self.progress_reporter
            .report("🔍 Fetching bom.json and security.json...");

        let fetch = ReportFetch::new(&self.repository, &self.progress_reporter);
        let (components, security) = tokio::join!(
            self.export_components(&fetch),
            self.export_security(&fetch),
        );

        let mut summary = ExportSummary::default();
        for (target, outcome) in [
            (COMPONENTS_CSV_PATH, components),
            (SECURITY_CSV_PATH, security),
        ] {
            match outcome {
                Ok(path) => summary.written.push(path),
                Err(error) => summary.failures.push(ExportFailure::new(target, error)),
            }
        }

        self.progress_reporter
            .report_completion(&summary.completion_message());
        summary
    }

    async fn export_components(&self, fetch: &ReportFetch<'_, REPO, PR>) -> Result<PathBuf> {
        let outcome: Result<PathBuf> = async {
            let payload = fetch.fetch(ReportKind::BillOfMaterials).await?;
            let components = FieldExtractor::extract_components(payload.rows());
            let csv = self.components_formatter.format(components.as_slice())?;
            self.writer.write_report(Path::new(COMPONENTS_CSV_PATH), &csv)
        }
        .await;
        self.announce(COMPONENTS_CSV_PATH, outcome)
    }

    async fn export_security(&self, fetch: &ReportFetch<'_, REPO, PR>) -> Result<PathBuf> {
        let outcome: Result<PathBuf> = async {
            let payload = fetch.fetch(ReportKind::Security).await?;
            let findings = FieldExtractor::extract_findings(payload.rows());
            let csv = self.security_formatter.format(findings.as_slice())?;
            self.writer.write_report(Path::new(SECURITY_CSV_PATH), &csv)
        }
        .await;
        self.announce(SECURITY_CSV_PATH, outcome)
    }

    /// Reports the outcome of one output as soon as it is known
    fn announce(&self, target: &str, outcome: Result<PathBuf>) -> Result<PathBuf> {
        match outcome {
            Ok(path) => {
                self.progress_reporter
                    .report(&format!("✅ Output complete: {}", path.display()));
                Ok(path)
            }
            Err(error) => {
                self.progress_reporter
                    .report_error(&describe_failure(target, &error));
                Err(error)
            }
        }
    }
}
