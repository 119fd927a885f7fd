use crate::ports::outbound::{ProgressReporter, ReportRepository};
use crate::report_export::domain::{ReportKind, ReportPayload};
use crate::shared::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fetches reports through a repository and keeps the progress display
/// current as each one arrives, in whatever order they arrive
pub(crate) struct ReportFetch<'a, REPO, PR> {
    repository: &'a REPO,
    progress_reporter: &'a PR,
    completed: AtomicUsize,
}

impl<'a, REPO, PR> ReportFetch<'a, REPO, PR>
where
    REPO: ReportRepository,
    PR: ProgressReporter,
{
    pub(crate) fn new(repository: &'a REPO, progress_reporter: &'a PR) -> Self {
        Self {
            repository,
            progress_reporter,
            completed: AtomicUsize::new(0),
        }
    }

    pub(crate) async fn fetch(&self, kind: ReportKind) -> Result<ReportPayload> {
        let result = self.repository.fetch_report(kind).await;

        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        self.progress_reporter.report_progress(
            completed,
            ReportKind::ALL.len(),
            Some(kind.file_name()),
        );

        if let Ok(payload) = &result {
            self.progress_reporter.report(&format!(
                "📥 Received {} with {} row(s)",
                kind,
                payload.rows().len()
            ));
        }

        result
    }
}
