/// Filesystem adapters for writing export files
mod file_writer;

pub use file_writer::FileSystemWriter;
