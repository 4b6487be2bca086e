/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives infrastructure only through these traits.
pub mod outbound;
