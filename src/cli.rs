use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::outbound::network::{Credentials, ReportLocation};
use crate::config::ConfigFile;
use crate::shared::error::ExportError;

/// Server used when neither `--serverURL` nor the config file names one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8070";

/// Value clap stores for a flag passed without a value. A NUL byte cannot
/// appear in a real argument, so an explicit `--appId ""` stays distinct.
const BARE_FLAG: &str = "\0";

/// The two exporters share one argument set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// `export-xc-report`: components.csv and security.csv
    CsvReport,
    /// `export-xc-lc`: xc-report-bom.xml
    BomXml,
}

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Program::CsvReport => "export-xc-report",
            Program::BomXml => "export-xc-lc",
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Program::CsvReport => {
                "Export an XC report to output/components.csv and output/security.csv"
            }
            Program::BomXml => {
                "Export an XC report to output/xc-report-bom.xml (CycloneDX 1.1 with vulnerabilities)"
            }
        }
    }
}

/// Export reports from an XC scanning server
///
/// Every value flag also accepts being passed bare (`--appId` with no
/// value); a bare flag counts as not given. An explicit empty value is a
/// value.
#[derive(Parser, Debug, Default)]
#[command(version, long_about = None)]
pub struct Args {
    /// Scanning server base URL [default: http://localhost:8070]
    #[arg(long = "serverURL", value_name = "URL", num_args = 0..=1, default_missing_value = BARE_FLAG)]
    pub server_url: Option<String>,

    /// Application id on the scanning server
    #[arg(long = "appId", value_name = "ID", num_args = 0..=1, default_missing_value = BARE_FLAG)]
    pub app_id: Option<String>,

    /// Report id of the scan to export
    #[arg(long = "reportId", value_name = "ID", num_args = 0..=1, default_missing_value = BARE_FLAG)]
    pub report_id: Option<String>,

    /// Username for basic authentication
    #[arg(long = "u", value_name = "USERNAME", num_args = 0..=1, default_missing_value = BARE_FLAG)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long = "p", value_name = "PASSWORD", num_args = 0..=1, default_missing_value = BARE_FLAG)]
    pub password: Option<String>,

    /// Path to a YAML config file (defaults to ./xc-export.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Everything an exporter needs to contact the server
#[derive(Debug, Clone)]
pub struct ResolvedArguments {
    pub location: ReportLocation,
    pub credentials: Credentials,
    pub timeout: Option<Duration>,
}

impl Args {
    /// Parses the process arguments under the given program's name.
    /// Exits with code 2 on malformed input, 0 for `--help`/`--version`.
    pub fn parse_for(program: Program) -> Self {
        let matches = Self::command()
            .name(program.name())
            .about(program.about())
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Merges flags with the config file and checks the required values.
    ///
    /// # Errors
    /// Returns `ExportError::MissingArguments` naming every required value
    /// that is absent from both, in the order appId, reportId, u, p.
    pub fn resolve(self, config: &ConfigFile) -> Result<ResolvedArguments, ExportError> {
        let server_url = pick(self.server_url, &config.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let mut missing = Vec::new();
        let app_id = require(self.app_id, &config.app_id, "appId", &mut missing);
        let report_id = require(self.report_id, &config.report_id, "reportId", &mut missing);
        let username = require(self.username, &config.username, "u", &mut missing);
        let password = require(self.password, &config.password, "p", &mut missing);

        if !missing.is_empty() {
            return Err(ExportError::MissingArguments { names: missing });
        }

        Ok(ResolvedArguments {
            location: ReportLocation::new(server_url, app_id, report_id),
            credentials: Credentials::new(username, password),
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Flag value unless absent or bare, else the config value
fn pick(flag: Option<String>, configured: &Option<String>) -> Option<String> {
    flag.filter(|v| v != BARE_FLAG)
        .or_else(|| configured.clone())
}

fn require(
    flag: Option<String>,
    configured: &Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    pick(flag, configured).unwrap_or_else(|| {
        missing.push(name);
        String::new()
    })
}
