use crate::report_export::domain::bom_document::{BOM_NAMESPACE, VULNERABILITY_NAMESPACE};
use crate::report_export::domain::{
    BomContent, BomDocument, ComponentRecord, VulnerabilityRecord, EMPTY_LIST_MESSAGE,
    XML_VERSION_SENTINEL,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ExportError;
use crate::shared::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const COMPONENT_TYPE: &str = "library";

const VULNERABILITY_DESCRIPTION: &str = "Imported from XC report using custom script. \
Expect some sections to be blank. For more details about this vulnerability, \
click on the link under ISSUE on the left.";

const INDENT_SIZE: usize = 2;

/// CycloneDxXmlFormatter adapter for the CycloneDX 1.1 XML format
///
/// Vulnerabilities use the 1.0 vulnerability extension under the `v`
/// prefix. Output is indented and UTF-8 encoded.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_document(&self, document: &BomDocument) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let version = document.version().to_string();
        let bom = BytesStart::new("bom").with_attributes([
            ("serialNumber", document.serial_number()),
            ("version", version.as_str()),
            ("xmlns", BOM_NAMESPACE),
            ("xmlns:v", VULNERABILITY_NAMESPACE),
        ]);
        writer.write_event(Event::Start(bom))?;

        writer.write_event(Event::Start(BytesStart::new("components")))?;
        for component in document.components() {
            write_component(&mut writer, component)?;
        }
        writer.write_event(Event::End(BytesEnd::new("components")))?;

        writer.write_event(Event::End(BytesEnd::new("bom")))?;

        let xml = String::from_utf8(writer.into_inner()).map_err(|e| {
            ExportError::OutputGenerationError {
                format: "CycloneDX XML".to_string(),
                details: e.to_string(),
            }
        })?;
        Ok(xml)
    }
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter<BomContent> for CycloneDxXmlFormatter {
    fn format(&self, content: &BomContent) -> Result<String> {
        match content {
            BomContent::Empty => Ok(EMPTY_LIST_MESSAGE.to_string()),
            BomContent::Document(document) => self.render_document(document),
        }
    }
}

fn write_component(writer: &mut Writer<Vec<u8>>, component: &ComponentRecord) -> Result<()> {
    let coordinates = component.coordinates();
    let version = coordinates.version_or(XML_VERSION_SENTINEL);

    writer.write_event(Event::Start(
        BytesStart::new("component").with_attributes([("type", COMPONENT_TYPE)]),
    ))?;
    write_text_element(writer, "name", coordinates.name())?;
    write_text_element(writer, "version", version)?;
    write_text_element(writer, "purl", &coordinates.purl())?;

    if let Some(vulnerability) = component.vulnerability() {
        writer.write_event(Event::Start(BytesStart::new("v:vulnerabilities")))?;
        write_vulnerability(writer, vulnerability)?;
        writer.write_event(Event::End(BytesEnd::new("v:vulnerabilities")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("component")))?;
    Ok(())
}

fn write_vulnerability(
    writer: &mut Writer<Vec<u8>>,
    vulnerability: &VulnerabilityRecord,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("v:vulnerability")))?;
    write_text_element(writer, "v:id", vulnerability.cve_id())?;

    writer.write_event(Event::Start(
        BytesStart::new("v:source").with_attributes([("name", vulnerability.source_name())]),
    ))?;
    write_text_element(writer, "v:url", vulnerability.source_url())?;
    writer.write_event(Event::End(BytesEnd::new("v:source")))?;

    // v:ratings > v:rating > v:score > v:base
    for tag in ["v:ratings", "v:rating", "v:score"] {
        writer.write_event(Event::Start(BytesStart::new(tag)))?;
    }
    write_text_element(writer, "v:base", vulnerability.cvss_score())?;
    for tag in ["v:score", "v:rating", "v:ratings"] {
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
    }

    write_text_element(writer, "v:description", VULNERABILITY_DESCRIPTION)?;
    writer.write_event(Event::End(BytesEnd::new("v:vulnerability")))?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
