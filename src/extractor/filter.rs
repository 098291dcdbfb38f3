use std::fmt;

use crate::error::ExtractionError;
use crate::extraction::Extraction;
use crate::request::TokenRequest;

use super::Extractor;

/// Post-processes the token found by an inner strategy.
///
/// The filter owns exactly one inner extractor and one transform. When the
/// inner strategy yields a token, the transform runs on it:
///
/// - `Ok(value)` becomes the new token (an empty value becomes `Absent`)
/// - `Err(err)` becomes a `Failure`
///
/// `Absent` and `Failure` from the inner strategy pass through unchanged and
/// the transform is not called.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{
///     ArgumentExtractor, ExtractionError, Extractor, PostExtractionFilter, Token,
/// };
///
/// // Tokens are sent hex-encoded in a query argument
/// let extractor = PostExtractionFilter::new(
///     ArgumentExtractor::new(["t"]),
///     |raw: &str| {
///         if raw.len() % 2 != 0 {
///             return Err(ExtractionError::rejected("odd-length hex"));
///         }
///         (0..raw.len())
///             .step_by(2)
///             .map(|i| u8::from_str_radix(&raw[i..i + 2], 16).map(char::from))
///             .collect::<Result<String, _>>()
///             .map_err(ExtractionError::custom)
///     },
/// );
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.set_query("t=616263");
///
/// let outcome = extractor.extract(&adapter);
/// assert_eq!(outcome.token().map(Token::expose_secret), Some("abc"));
/// ```
pub struct PostExtractionFilter<E, F> {
    inner: E,
    filter: F,
}

impl<E, F> PostExtractionFilter<E, F>
where
    E: Extractor,
    F: Fn(&str) -> Result<String, ExtractionError> + Send + Sync,
{
    /// Wraps `inner`, applying `filter` to every token it yields.
    pub fn new(inner: E, filter: F) -> Self {
        Self { inner, filter }
    }

    /// Returns the wrapped strategy.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E, F> Extractor for PostExtractionFilter<E, F>
where
    E: Extractor,
    F: Fn(&str) -> Result<String, ExtractionError> + Send + Sync,
{
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        match self.inner.extract(request) {
            Extraction::Token(token) => match (self.filter)(token.expose_secret()) {
                Ok(value) => Extraction::from_value(value),
                Err(err) => {
                    tracing::debug!(error = %err, "post-extraction filter rejected token");
                    Extraction::Failure(err)
                }
            },
            passthrough => passthrough,
        }
    }
}

impl<E: fmt::Debug, F> fmt::Debug for PostExtractionFilter<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostExtractionFilter")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
