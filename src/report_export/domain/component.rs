use super::vulnerability::VulnerabilityRecord;

/// Version shown in the XML bill of materials when a component has none
pub const XML_VERSION_SENTINEL: &str = "-";

/// Version shown in CSV output when a component has none
pub const CSV_VERSION_SENTINEL: &str = "";

const NAME_VERSION_SEPARATOR: char = ':';

/// Name and version split out of a combined `name:version` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCoordinates {
    name: String,
    version: Option<String>,
}

impl ComponentCoordinates {
    /// Splits on `:`. The first segment is the name, the second the version.
    /// Anything after a second separator is dropped.
    pub fn parse(combined: &str) -> Self {
        let mut segments = combined.split(NAME_VERSION_SEPARATOR);
        let name = segments.next().unwrap_or_default().to_string();
        let version = segments.next().map(str::to_string);
        Self { name, version }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Version, or `sentinel` when the combined string had no separator
    pub fn version_or<'a>(&'a self, sentinel: &'a str) -> &'a str {
        self.version.as_deref().unwrap_or(sentinel)
    }

    /// Package URL as written into the XML bill of materials
    pub fn purl(&self) -> String {
        format!(
            "pkg:php/{}@{}",
            self.name,
            self.version_or(XML_VERSION_SENTINEL)
        )
    }
}

/// A component row, optionally carrying the vulnerability reported for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    combined_name: String,
    coordinates: ComponentCoordinates,
    file_paths: String,
    vulnerability: Option<VulnerabilityRecord>,
}

impl ComponentRecord {
    pub fn new(
        combined_name: String,
        file_paths: String,
        vulnerability: Option<VulnerabilityRecord>,
    ) -> Self {
        let coordinates = ComponentCoordinates::parse(&combined_name);
        Self {
            combined_name,
            coordinates,
            file_paths,
            vulnerability,
        }
    }

    /// The untouched `name:version` string from the report
    pub fn combined_name(&self) -> &str {
        &self.combined_name
    }

    pub fn coordinates(&self) -> &ComponentCoordinates {
        &self.coordinates
    }

    pub fn file_paths(&self) -> &str {
        &self.file_paths
    }

    pub fn vulnerability(&self) -> Option<&VulnerabilityRecord> {
        self.vulnerability.as_ref()
    }
}

/// A row of the security report as listed in `security.csv`
///
/// Unlike [`VulnerabilityRecord`], every column is present even when the
/// row carries no CVE reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityFinding {
    cvss_score: String,
    cve_id: String,
    component: String,
    source_url: String,
}

impl SecurityFinding {
    pub fn new(cvss_score: String, cve_id: String, component: String, source_url: String) -> Self {
        Self {
            cvss_score,
            cve_id,
            component,
            source_url,
        }
    }

    pub fn cvss_score(&self) -> &str {
        &self.cvss_score
    }

    pub fn cve_id(&self) -> &str {
        &self.cve_id
    }

    /// Combined `name:version` string, as reported
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}
