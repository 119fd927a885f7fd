/// Data Transfer Objects for application layer
///
/// DTOs carry use case results back to the command-line entry points.
mod export_summary;

pub use export_summary::{describe_failure, ExportFailure, ExportSummary};
