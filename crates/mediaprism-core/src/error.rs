//! Shared error type across mediaPrism crates.

use thiserror::Error;

/// Stable error codes (used by the inspect report and test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Fewer than 4 bytes, no signature to read.
    TruncatedSignature,
    /// `gzip_packed` marker without a readable bytes field.
    MalformedLengthPrefix,
    /// Inflate rejected the packed payload.
    DecompressionFailure,
    /// Constructor id not in the known schema set.
    UnrecognizedSchema,
    /// Valid object that is neither a photo nor a document.
    UnhandledSchema,
    /// Truncated or malformed field inside an object.
    MalformedStream,
    /// Input or inflated output over the configured limit.
    PayloadTooLarge,
    /// Invalid configuration.
    BadConfig,
    /// File system error.
    Io,
}

impl ErrorCode {
    /// String representation used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::TruncatedSignature => "TRUNCATED_SIGNATURE",
            ErrorCode::MalformedLengthPrefix => "MALFORMED_LENGTH_PREFIX",
            ErrorCode::DecompressionFailure => "DECOMPRESSION_FAILURE",
            ErrorCode::UnrecognizedSchema => "UNRECOGNIZED_SCHEMA",
            ErrorCode::UnhandledSchema => "UNHANDLED_SCHEMA",
            ErrorCode::MalformedStream => "MALFORMED_STREAM",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MediaError>;

/// Unified error type used by core and tooling.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("envelope shorter than signature ({0} bytes)")]
    TruncatedSignature(usize),
    #[error("malformed length prefix: {0}")]
    MalformedLengthPrefix(String),
    #[error("decompression failed: {0}")]
    DecompressionFailure(String),
    #[error("unrecognized constructor {0:#010x}")]
    UnrecognizedSchema(u32),
    #[error("unhandled constructor {0:#010x}")]
    UnhandledSchema(u32),
    #[error("malformed stream: {0}")]
    MalformedStream(String),
    #[error("payload too large: {len} > {limit}")]
    PayloadTooLarge { len: usize, limit: usize },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("io: {0}")]
    Io(String),
}

impl MediaError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MediaError::TruncatedSignature(_) => ErrorCode::TruncatedSignature,
            MediaError::MalformedLengthPrefix(_) => ErrorCode::MalformedLengthPrefix,
            MediaError::DecompressionFailure(_) => ErrorCode::DecompressionFailure,
            MediaError::UnrecognizedSchema(_) => ErrorCode::UnrecognizedSchema,
            MediaError::UnhandledSchema(_) => ErrorCode::UnhandledSchema,
            MediaError::MalformedStream(_) => ErrorCode::MalformedStream,
            MediaError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            MediaError::BadConfig(_) => ErrorCode::BadConfig,
            MediaError::Io(_) => ErrorCode::Io,
        }
    }
}
