use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use xc_report_export::prelude::*;

/// Mock ReportWriter keeping written files in memory
#[derive(Default, Clone)]
pub struct MockReportWriter {
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub fail_on: Option<PathBuf>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails any write to `destination`
    pub fn failing_on(destination: &str) -> Self {
        Self {
            fail_on: Some(PathBuf::from(destination)),
            ..Self::default()
        }
    }

    pub fn content(&self, destination: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(Path::new(destination))
            .cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, destination: &Path, content: &str) -> Result<PathBuf> {
        if self.fail_on.as_deref() == Some(destination) {
            return Err(ExportError::FileWriteError {
                path: destination.to_path_buf(),
                details: "Mock write failure".to_string(),
            }
            .into());
        }

        self.files
            .lock()
            .unwrap()
            .insert(destination.to_path_buf(), content.to_string());
        Ok(destination.to_path_buf())
    }
}
