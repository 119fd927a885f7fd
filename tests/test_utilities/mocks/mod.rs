/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_repository;
mod mock_report_writer;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_repository::MockReportRepository;
pub use mock_report_writer::MockReportWriter;
