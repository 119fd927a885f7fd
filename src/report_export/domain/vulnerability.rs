/// A known vulnerability attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityRecord {
    cve_id: String,
    source_name: String,
    source_url: String,
    cvss_score: String,
}

impl VulnerabilityRecord {
    pub fn new(cve_id: String, source_name: String, source_url: String, cvss_score: String) -> Self {
        Self {
            cve_id,
            source_name,
            source_url,
            cvss_score,
        }
    }

    pub fn cve_id(&self) -> &str {
        &self.cve_id
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn cvss_score(&self) -> &str {
        &self.cvss_score
    }
}
