use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ReportWriter port for persisting formatted output
pub trait ReportWriter {
    /// Writes `content` to `destination`, replacing any existing file
    ///
    /// # Returns
    /// The path that was actually written
    ///
    /// # Errors
    /// Returns an error if the file or its parent directory cannot be created
    fn write_report(&self, destination: &Path, content: &str) -> Result<PathBuf>;
}
