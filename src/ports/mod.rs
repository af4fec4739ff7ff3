/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI drives the application
/// layer directly.
pub mod outbound;
