use crate::ports::outbound::ReportWriter;
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing exports to disk
///
/// Destinations are resolved against `base_dir` (the working directory in
/// the CLI). Missing parent directories are created and existing files are
/// replaced.
pub struct FileSystemWriter {
    base_dir: PathBuf,
}

impl FileSystemWriter {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Writer rooted at the current working directory. Reported paths stay
    /// relative, e.g. `output/components.csv`.
    pub fn in_working_directory() -> Self {
        Self::new(PathBuf::new())
    }

    fn resolve(&self, destination: &Path) -> PathBuf {
        if destination.is_absolute() {
            destination.to_path_buf()
        } else {
            self.base_dir.join(destination)
        }
    }

    fn ensure_parent_directory(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ExportError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ),
                })?;
            }
        }
        Ok(())
    }
}

impl ReportWriter for FileSystemWriter {
    fn write_report(&self, destination: &Path, content: &str) -> Result<PathBuf> {
        let output_path = self.resolve(destination);
        self.ensure_parent_directory(&output_path)?;

        fs::write(&output_path, content).map_err(|e| ExportError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());

        let written = writer
            .write_report(Path::new("output/components.csv"), "test content")
            .unwrap();

        assert_eq!(written, temp_dir.path().join("output/components.csv"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "test content");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        let destination = Path::new("output/security.csv");

        writer
            .write_report(destination, "a much longer first version of the file")
            .unwrap();
        let written = writer.write_report(destination, "second").unwrap();

        assert_eq!(fs::read_to_string(written).unwrap(), "second");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("output"), "not a directory").unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());

        let result = writer.write_report(Path::new("output/xc-report-bom.xml"), "<bom/>");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to write to file"));
    }

    #[test]
    fn test_working_directory_paths_stay_relative() {
        let writer = FileSystemWriter::in_working_directory();
        assert_eq!(
            writer.resolve(Path::new("output/components.csv")),
            PathBuf::from("output/components.csv")
        );
    }
}
