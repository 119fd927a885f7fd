use super::component::ComponentRecord;

/// Serial number stamped on every exported bill of materials
pub const BOM_SERIAL_NUMBER: &str = "urn:uuid:3e671687-395b-41f5-a30f-a58921a69b79";

/// Document version attribute
pub const BOM_VERSION: u32 = 1;

/// Default namespace of the CycloneDX 1.1 schema
pub const BOM_NAMESPACE: &str = "http://cyclonedx.org/schema/bom/1.1";

/// Namespace bound to the `v` prefix for the vulnerability extension
pub const VULNERABILITY_NAMESPACE: &str = "http://cyclonedx.org/schema/ext/vulnerability/1.0";

/// Bill of materials assembled from both reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomDocument {
    components: Vec<ComponentRecord>,
}

impl BomDocument {
    pub fn new(components: Vec<ComponentRecord>) -> Self {
        Self { components }
    }

    pub fn serial_number(&self) -> &'static str {
        BOM_SERIAL_NUMBER
    }

    pub fn version(&self) -> u32 {
        BOM_VERSION
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }
}

/// What ends up in the XML output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BomContent {
    /// The bill-of-materials report listed no components
    Empty,
    Document(BomDocument),
}

impl BomContent {
    /// Merges the two extracted record lists into one document.
    ///
    /// Bill-of-materials components come first, followed by every security
    /// row in report order. Components present in both reports appear twice.
    /// An empty bill-of-materials list yields [`BomContent::Empty`] whatever
    /// the security report holds.
    pub fn merge(
        bom_components: Vec<ComponentRecord>,
        security_components: Vec<ComponentRecord>,
    ) -> Self {
        if bom_components.is_empty() {
            return BomContent::Empty;
        }

        let mut components = bom_components;
        components.extend(security_components);
        BomContent::Document(BomDocument::new(components))
    }
}
