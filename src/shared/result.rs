/// Result alias used by the application and adapter layers.
///
/// The codec layer returns its own typed errors (`DecodeError`, `EncodeError`);
/// everything above it converts into `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
