//! Shared error plumbing.

/// Grepable error code attached to service errors so the route layer can
/// return stable `E_*` identifiers alongside the human message.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
