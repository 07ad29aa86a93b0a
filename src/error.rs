use thiserror::Error;

/// Errors raised while wiring the compression layer.
///
/// These are setup faults. Nothing in this enum is produced while a request
/// is being served; request-time failures surface as [`std::io::Error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested gzip level is outside `0..=9`.
    #[error("invalid gzip compression level {0}, expected 0..=9")]
    InvalidLevel(u32),
}
