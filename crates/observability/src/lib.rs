//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing using `CATCOLLECTOR_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;
