/// Formatter adapters for the CSV and CycloneDX XML exports
mod csv_formatter;
mod cyclonedx_xml_formatter;

pub use csv_formatter::{ComponentsCsvFormatter, SecurityCsvFormatter};
pub use cyclonedx_xml_formatter::CycloneDxXmlFormatter;
