use thiserror::Error;

/// The cause carried by [`Extraction::Failure`](crate::Extraction::Failure).
///
/// Built-in strategies never produce this; it originates from custom
/// strategies and post-extraction transforms. A failure halts a
/// [`MultiExtractor`](crate::MultiExtractor) chain and reaches the caller
/// unchanged.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// A strategy or transform rejected the extracted value
    #[error("token rejected: {reason}")]
    Rejected {
        /// Why the value was rejected
        reason: String,
    },
    /// An arbitrary error raised by a custom strategy
    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ExtractionError {
    /// Creates a rejection with the given reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Wraps an arbitrary error from a custom strategy.
    pub fn custom<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Custom(Box::new(err))
    }
}

/// Errors reported while decoding a request's form and query arguments.
///
/// [`ArgumentExtractor`](crate::ArgumentExtractor) discards these and keeps
/// whatever arguments were decoded; they are surfaced for callers that use
/// [`TokenRequest::decode_form`](crate::TokenRequest::decode_form) directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The body exceeds the decode limit and was not parsed
    #[error("form body of {actual} bytes exceeds limit of {limit} bytes")]
    BodyTooLarge {
        /// The configured limit in bytes
        limit: usize,
        /// The actual body size in bytes
        actual: usize,
    },
    /// The body uses a form encoding this decoder does not parse
    #[error("unsupported form content type '{content_type}'")]
    UnsupportedContentType {
        /// The declared content type
        content_type: String,
    },
}
