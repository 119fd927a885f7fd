use super::report_fetch::ReportFetch;
use crate::application::dto::{describe_failure, ExportFailure, ExportSummary};
use crate::ports::outbound::{ProgressReporter, ReportFormatter, ReportRepository, ReportWriter};
use crate::report_export::domain::{BomContent, ReportKind, ReportPayload};
use crate::report_export::services::FieldExtractor;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Destination of the XML bill of materials. The `xc-report` part of the
/// file name identifies the source when the file is imported elsewhere.
pub const BOM_XML_PATH: &str = "output/xc-report-bom.xml";

/// ExportBomXmlUseCase - Exports both reports as one XML bill of materials
///
/// Runs in two phases: both reports are fetched concurrently and extracted
/// independently, then merged into a single document in one synchronous
/// step. Nothing is written unless both reports were retrieved.
///
/// # Type Parameters
/// * `REPO` - ReportRepository implementation
/// * `F` - Formatter for the bill of materials
/// * `W` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportBomXmlUseCase<REPO, F, W, PR> {
    repository: REPO,
    formatter: F,
    writer: W,
    progress_reporter: PR,
}

impl<REPO, F, W, PR> ExportBomXmlUseCase<REPO, F, W, PR>
where
    REPO: ReportRepository,
    F: ReportFormatter<BomContent>,
    W: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new ExportBomXmlUseCase with injected dependencies
    pub fn new(repository: REPO, formatter: F, writer: W, progress_reporter: PR) -> Self {
        Self {
            repository,
            formatter,
            writer,
            progress_reporter,
        }
    }

    /// Runs the export. Errors are collected in the summary, not returned.
    pub async fn execute(&self) -> ExportSummary {
        self.progress_reporter
            .report("🔍 Fetching bom.json and security.json...");

        // Phase 1: fetch both reports
        let fetch = ReportFetch::new(&self.repository, &self.progress_reporter);
        let (bom, security) = tokio::join!(
            fetch.fetch(ReportKind::BillOfMaterials),
            fetch.fetch(ReportKind::Security),
        );

        let mut summary = ExportSummary::default();
        let fetched = [
            (ReportKind::BillOfMaterials, bom),
            (ReportKind::Security, security),
        ];
        let mut payloads = Vec::with_capacity(fetched.len());
        for (kind, outcome) in fetched {
            match outcome {
                Ok(payload) => payloads.push(payload),
                Err(error) => {
                    let target = format!("{} ({})", BOM_XML_PATH, kind);
                    self.progress_reporter
                        .report_error(&describe_failure(&target, &error));
                    summary.failures.push(ExportFailure::new(target, error));
                }
            }
        }

        // Phase 2: merge and write, only with both reports in hand
        if let [bom, security] = payloads.as_slice() {
            match self.write_document(bom, security) {
                Ok(path) => {
                    self.progress_reporter
                        .report(&format!("✅ Output complete: {}", path.display()));
                    summary.written.push(path);
                }
                Err(error) => {
                    self.progress_reporter
                        .report_error(&describe_failure(BOM_XML_PATH, &error));
                    summary.failures.push(ExportFailure::new(BOM_XML_PATH, error));
                }
            }
        }

        self.progress_reporter
            .report_completion(&summary.completion_message());
        summary
    }

    fn write_document(&self, bom: &ReportPayload, security: &ReportPayload) -> Result<PathBuf> {
        let content = BomContent::merge(
            FieldExtractor::extract_components(bom.rows()),
            FieldExtractor::extract_components(security.rows()),
        );

        if let BomContent::Document(document) = &content {
            self.progress_reporter.report(&format!(
                "📝 Generating CycloneDX XML with {} component(s)...",
                document.components().len()
            ));
        }

        let xml = self.formatter.format(&content)?;
        self.writer.write_report(Path::new(BOM_XML_PATH), &xml)
    }
}
