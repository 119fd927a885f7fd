use crate::report_export::domain::{
    ComponentRecord, ReportRow, SecurityFinding, VulnerabilityRecord,
};

/// FieldExtractor service for deriving export records from report rows
///
/// Both reports share one row shape, so the same extraction applies to
/// bill-of-materials rows and security rows alike.
pub struct FieldExtractor;

impl FieldExtractor {
    /// Extracts a component, attaching a vulnerability when the row
    /// carries a non-empty CVE reference
    pub fn extract_component(row: &ReportRow) -> ComponentRecord {
        ComponentRecord::new(
            row.name.clone(),
            row.pathnames.clone(),
            Self::extract_vulnerability(row),
        )
    }

    /// Extracts every component, preserving report order
    pub fn extract_components(rows: &[ReportRow]) -> Vec<ComponentRecord> {
        rows.iter().map(Self::extract_component).collect()
    }

    pub fn extract_vulnerability(row: &ReportRow) -> Option<VulnerabilityRecord> {
        if row.reference.is_empty() {
            return None;
        }

        Some(VulnerabilityRecord::new(
            row.reference.clone(),
            row.source.clone(),
            row.url.clone(),
            row.score.clone(),
        ))
    }

    pub fn extract_finding(row: &ReportRow) -> SecurityFinding {
        SecurityFinding::new(
            row.score.clone(),
            row.reference.clone(),
            row.name.clone(),
            row.url.clone(),
        )
    }

    pub fn extract_findings(rows: &[ReportRow]) -> Vec<SecurityFinding> {
        rows.iter().map(Self::extract_finding).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security_row() -> ReportRow {
        ReportRow {
            name: "acme/foo:1.2.3".to_string(),
            reference: "CVE-2020-0001".to_string(),
            score: "7.5".to_string(),
            source: "cve".to_string(),
            url: "http://example/cve1".to_string(),
            pathnames: String::new(),
        }
    }

    #[test]
    fn test_extract_component_with_vulnerability() {
        let component = FieldExtractor::extract_component(&security_row());

        assert_eq!(component.coordinates().name(), "acme/foo");
        assert_eq!(component.coordinates().version(), Some("1.2.3"));

        let vulnerability = component.vulnerability().unwrap();
        assert_eq!(vulnerability.cve_id(), "CVE-2020-0001");
        assert_eq!(vulnerability.cvss_score(), "7.5");
        assert_eq!(vulnerability.source_name(), "cve");
        assert_eq!(vulnerability.source_url(), "http://example/cve1");
    }

    #[test]
    fn test_extract_component_without_reference() {
        let row = ReportRow {
            pathnames: "vendor/acme/bar".to_string(),
            ..ReportRow::component("acme/bar")
        };
        let component = FieldExtractor::extract_component(&row);

        assert!(component.vulnerability().is_none());
        assert_eq!(component.file_paths(), "vendor/acme/bar");
    }

    #[test]
    fn test_score_without_reference_is_not_a_vulnerability() {
        let row = ReportRow {
            reference: String::new(),
            ..security_row()
        };
        assert!(FieldExtractor::extract_vulnerability(&row).is_none());
    }

    #[test]
    fn test_extract_components_preserves_order() {
        let rows = vec![
            ReportRow::component("c:3"),
            ReportRow::component("a:1"),
            ReportRow::component("b:2"),
        ];
        let names: Vec<String> = FieldExtractor::extract_components(&rows)
            .iter()
            .map(|c| c.combined_name().to_string())
            .collect();
        assert_eq!(names, vec!["c:3", "a:1", "b:2"]);
    }

    #[test]
    fn test_extract_finding_keeps_all_columns() {
        let finding = FieldExtractor::extract_finding(&security_row());
        assert_eq!(finding.cvss_score(), "7.5");
        assert_eq!(finding.cve_id(), "CVE-2020-0001");
        assert_eq!(finding.component(), "acme/foo:1.2.3");
        assert_eq!(finding.source_url(), "http://example/cve1");

        let blank = FieldExtractor::extract_finding(&ReportRow::component("acme/bar"));
        assert_eq!(blank.cve_id(), "");
        assert_eq!(blank.source_url(), "");
    }
}
