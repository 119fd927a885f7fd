use std::fmt;

/// The two reports the scanning server exposes for an application report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Detected components (`bom.json`)
    BillOfMaterials,
    /// Components with known vulnerabilities (`security.json`)
    Security,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::BillOfMaterials, ReportKind::Security];

    /// File name of the report under `browseReport/`
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::BillOfMaterials => "bom.json",
            ReportKind::Security => "security.json",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ReportKind::BillOfMaterials.file_name(), "bom.json");
        assert_eq!(ReportKind::Security.file_name(), "security.json");
    }

    #[test]
    fn test_display_matches_file_name() {
        assert_eq!(format!("{}", ReportKind::Security), "security.json");
    }
}
