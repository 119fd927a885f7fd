use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use xc_report_export::prelude::*;

/// Mock ReportRepository serving canned payloads or failures per report
#[derive(Default, Clone)]
pub struct MockReportRepository {
    responses: HashMap<ReportKind, std::result::Result<ReportPayload, String>>,
    request_count: Arc<AtomicUsize>,
}

impl MockReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, kind: ReportKind, rows: Vec<ReportRow>) -> Self {
        self.responses.insert(kind, Ok(ReportPayload::new(rows)));
        self
    }

    pub fn with_failure(mut self, kind: ReportKind, message: &str) -> Self {
        self.responses.insert(kind, Err(message.to_string()));
        self
    }

    /// Requests seen by this mock and all of its clones
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportRepository for MockReportRepository {
    async fn fetch_report(&self, kind: ReportKind) -> Result<ReportPayload> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(&kind) {
            Some(Ok(payload)) => Ok(payload.clone()),
            Some(Err(message)) => Err(ExportError::ReportFetchError {
                report: kind.to_string(),
                url: format!("mock://{}", kind),
                details: message.clone(),
            }
            .into()),
            None => Ok(ReportPayload::default()),
        }
    }
}
