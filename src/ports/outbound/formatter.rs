use crate::shared::Result;

/// ReportFormatter port for rendering extracted records
///
/// `T` is the content being rendered: a list of components, a list of
/// security findings, or a whole bill of materials.
pub trait ReportFormatter<T: ?Sized> {
    /// Renders `content` into the text written to the output file
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, content: &T) -> Result<String>;
}
