use crate::report_export::domain::{ComponentRecord, SecurityFinding, EMPTY_LIST_MESSAGE};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

const COMPONENTS_HEADER: &str = "#,Component,Filepath";
const SECURITY_HEADER: &str = "#,Thread Level,Problem Code,Component,Link";

/// Renders the bill-of-materials report as `components.csv`
///
/// Fields are joined with a bare comma and are not quoted, so values that
/// themselves contain commas or newlines shift the columns. Consumers of
/// these files rely on the unquoted layout.
pub struct ComponentsCsvFormatter;

impl ComponentsCsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComponentsCsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter<[ComponentRecord]> for ComponentsCsvFormatter {
    fn format(&self, components: &[ComponentRecord]) -> Result<String> {
        if components.is_empty() {
            return Ok(EMPTY_LIST_MESSAGE.to_string());
        }

        let rows = components
            .iter()
            .map(|c| [c.combined_name(), c.file_paths()]);
        render_table(COMPONENTS_HEADER, rows)
    }
}

/// Renders the security report as `security.csv`
///
/// Same unquoted layout as [`ComponentsCsvFormatter`].
pub struct SecurityCsvFormatter;

impl SecurityCsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SecurityCsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter<[SecurityFinding]> for SecurityCsvFormatter {
    fn format(&self, findings: &[SecurityFinding]) -> Result<String> {
        if findings.is_empty() {
            return Ok(EMPTY_LIST_MESSAGE.to_string());
        }

        let rows = findings.iter().map(|f| {
            [
                f.cvss_score(),
                f.cve_id(),
                f.component(),
                f.source_url(),
            ]
        });
        render_table(SECURITY_HEADER, rows)
    }
}

/// Header line, then one newline-terminated line per row prefixed with its
/// 1-based position
fn render_table<'a, const N: usize>(
    header: &str,
    rows: impl Iterator<Item = [&'a str; N]>,
) -> Result<String> {
    let mut output = String::new();
    writeln!(output, "{}", header)?;

    for (index, fields) in rows.enumerate() {
        write!(output, "{}", index + 1)?;
        for field in fields {
            write!(output, ",{}", field)?;
        }
        output.push('\n');
    }

    Ok(output)
}
