pub mod bom_document;
pub mod component;
pub mod report_kind;
pub mod report_row;
pub mod vulnerability;

pub use bom_document::{BomContent, BomDocument};
pub use component::{
    ComponentCoordinates, ComponentRecord, SecurityFinding, CSV_VERSION_SENTINEL,
    XML_VERSION_SENTINEL,
};
pub use report_kind::ReportKind;
pub use report_row::{ReportPayload, ReportRow};
pub use vulnerability::VulnerabilityRecord;

/// Written in place of a table or document when a report lists no rows
pub const EMPTY_LIST_MESSAGE: &str = "This list is empty.";
