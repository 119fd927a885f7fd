//! Entry point shared by the `export-xc-report` and `export-xc-lc` binaries.

use owo_colors::OwoColorize;
use std::path::Path;

use crate::adapters::outbound::console::StderrProgressReporter;
use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::adapters::outbound::formatters::{
    ComponentsCsvFormatter, CycloneDxXmlFormatter, SecurityCsvFormatter,
};
use crate::adapters::outbound::network::XcReportClient;
use crate::application::use_cases::{ExportBomXmlUseCase, ExportCsvUseCase};
use crate::cli::{Args, Program};
use crate::config::{discover_config, load_config_from_path, ConfigFile};
use crate::shared::error::ExitCode;
use crate::shared::Result;

/// Parses the command line, runs the chosen exporter and returns the
/// process exit code. Missing arguments stop the run before any request
/// is sent.
pub async fn launch(program: Program) -> ExitCode {
    let args = Args::parse_for(program);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            print_error(&format!("{:#}", e));
            return ExitCode::InvalidArguments;
        }
    };

    let resolved = match args.resolve(&config) {
        Ok(resolved) => resolved,
        Err(e) => {
            print_error(&e.to_string());
            return ExitCode::MissingArguments;
        }
    };

    let repository =
        match XcReportClient::new(resolved.location, resolved.credentials, resolved.timeout) {
            Ok(client) => client,
            Err(e) => {
                print_error(&format!("Failed to initialize HTTP client: {:#}", e));
                return ExitCode::ExportFailed;
            }
        };

    let writer = FileSystemWriter::in_working_directory();
    let progress_reporter = StderrProgressReporter::new();

    let summary = match program {
        Program::CsvReport => {
            ExportCsvUseCase::new(
                repository,
                ComponentsCsvFormatter::new(),
                SecurityCsvFormatter::new(),
                writer,
                progress_reporter,
            )
            .execute()
            .await
        }
        Program::BomXml => {
            ExportBomXmlUseCase::new(
                repository,
                CycloneDxXmlFormatter::new(),
                writer,
                progress_reporter,
            )
            .execute()
            .await
        }
    };

    summary.exit_code()
}

/// Explicit `--config` must load; otherwise a file in the working directory
/// is used when present
fn load_config(args: &Args) -> Result<ConfigFile> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
