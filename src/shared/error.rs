use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI applications.
///
/// These codes allow calling scripts to distinguish between argument
/// problems and failed exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested output was written
    Success = 0,
    /// One or more required arguments were not supplied
    MissingArguments = 1,
    /// Invalid command-line arguments (clap parsing errors, unreadable config file)
    InvalidArguments = 2,
    /// At least one report could not be fetched, parsed or written
    ExportFailed = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MissingArguments => write!(f, "Missing Arguments (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ExportFailed => write!(f, "Export Failed (3)"),
        }
    }
}

/// Application-specific errors for report export.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum ExportError {
    /// One line per missing flag, in the order the flags are checked
    #[error("{}", format_missing_arguments(.names))]
    MissingArguments { names: Vec<&'static str> },

    #[error("Failed to fetch {report} from {url}\nDetails: {details}\n\n💡 Hint: Please verify that the server URL is reachable")]
    ReportFetchError {
        report: String,
        url: String,
        details: String,
    },

    #[error("Server returned status {status} for {report} ({url})\n\n💡 Hint: Please verify the application id, report id and credentials")]
    ReportStatusError {
        report: String,
        url: String,
        status: u16,
    },

    #[error("Failed to parse {report} response\nDetails: {details}")]
    ReportParseError { report: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions in the working directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },
}

fn format_missing_arguments(names: &[&'static str]) -> String {
    names
        .iter()
        .map(|name| format!("Missing argument: --{}", name))
        .collect::<Vec<_>>()
        .join("\n")
}
