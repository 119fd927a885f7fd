//! xc-report-export - Export XC scan reports
//!
//! Fetches the bill-of-materials (`bom.json`) and security (`security.json`)
//! reports of an application scan from an XC server and writes them either
//! as two CSV tables or as one CycloneDX 1.1 XML bill of materials.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_export`): Report rows, extracted records and extraction rules
//! - **Application Layer** (`application`): Export use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use xc_report_export::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = XcReportClient::new(
//!     ReportLocation::new(
//!         "http://localhost:8070".to_string(),
//!         "app".to_string(),
//!         "ba3631c176fa40f59c7f19225e853b27".to_string(),
//!     ),
//!     Credentials::new("admin".to_string(), "admin123".to_string()),
//!     None,
//! )?;
//!
//! let use_case = ExportBomXmlUseCase::new(
//!     client,
//!     CycloneDxXmlFormatter::new(),
//!     FileSystemWriter::in_working_directory(),
//!     StderrProgressReporter::new(),
//! );
//! let summary = use_case.execute().await;
//! assert!(summary.is_success());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod launcher;
pub mod ports;
pub mod report_export;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::formatters::{
        ComponentsCsvFormatter, CycloneDxXmlFormatter, SecurityCsvFormatter,
    };
    pub use crate::adapters::outbound::network::{Credentials, ReportLocation, XcReportClient};
    pub use crate::application::dto::{ExportFailure, ExportSummary};
    pub use crate::application::use_cases::{
        ExportBomXmlUseCase, ExportCsvUseCase, BOM_XML_PATH, COMPONENTS_CSV_PATH,
        SECURITY_CSV_PATH,
    };
    pub use crate::ports::outbound::{
        ProgressReporter, ReportFormatter, ReportRepository, ReportWriter,
    };
    pub use crate::report_export::domain::{
        BomContent, BomDocument, ComponentCoordinates, ComponentRecord, ReportKind,
        ReportPayload, ReportRow, SecurityFinding, VulnerabilityRecord, EMPTY_LIST_MESSAGE,
    };
    pub use crate::report_export::services::FieldExtractor;
    pub use crate::shared::error::{ExitCode, ExportError};
    pub use crate::shared::Result;
}
