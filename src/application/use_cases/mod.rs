/// Use cases module containing application business logic orchestration
mod export_bom_xml;
mod export_csv;
mod report_fetch;

pub use export_bom_xml::{ExportBomXmlUseCase, BOM_XML_PATH};
pub use export_csv::{ExportCsvUseCase, COMPONENTS_CSV_PATH, SECURITY_CSV_PATH};
