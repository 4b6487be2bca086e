/// Document model layer - SBOM record shapes and their JSON codec
///
/// This layer has no dependencies on the application or adapter layers.
/// Every operation in it is synchronous and pure.
pub mod codec;
pub mod domain;
