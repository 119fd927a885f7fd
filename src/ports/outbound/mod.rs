/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod formatter;
pub mod progress_reporter;
pub mod report_repository;
pub mod report_writer;

pub use formatter::ReportFormatter;
pub use progress_reporter::ProgressReporter;
pub use report_repository::ReportRepository;
pub use report_writer::ReportWriter;
