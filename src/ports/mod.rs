/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe what the export use cases need from
/// the outside world: the report server, the formatters, the file system
/// and the console.
pub mod outbound;
