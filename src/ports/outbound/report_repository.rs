use crate::report_export::domain::{ReportKind, ReportPayload};
use crate::shared::Result;
use async_trait::async_trait;

/// ReportRepository port for retrieving reports from the scanning server
///
/// Implementations must be `Send + Sync` so both reports can be requested
/// concurrently.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetches and parses one report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The server answers with a non-success status
    /// - The response body is not a valid report
    async fn fetch_report(&self, kind: ReportKind) -> Result<ReportPayload>;
}
