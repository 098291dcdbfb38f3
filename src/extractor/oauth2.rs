//! Ready-made strategies for OAuth 2.0 bearer tokens (RFC 6750).

use crate::error::ExtractionError;

use super::{ArgumentExtractor, HeaderExtractor, MultiExtractor, PostExtractionFilter};

/// Reads the `Authorization` header and strips an optional `Bearer ` prefix.
pub type AuthorizationHeaderExtractor =
    PostExtractionFilter<HeaderExtractor, fn(&str) -> Result<String, ExtractionError>>;

/// Removes a leading, case-insensitive `"Bearer "` from `value`.
///
/// Values without the prefix are returned unchanged. Never fails; the
/// `Result` lets it serve directly as a [`PostExtractionFilter`] transform.
///
/// ```
/// use request_token::strip_bearer_prefix;
///
/// assert_eq!(strip_bearer_prefix("BEARER abc").unwrap(), "abc");
/// assert_eq!(strip_bearer_prefix("abc").unwrap(), "abc");
/// ```
pub fn strip_bearer_prefix(value: &str) -> Result<String, ExtractionError> {
    const PREFIX: &str = "bearer ";

    match value.get(..PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(PREFIX) => {
            Ok(value[PREFIX.len()..].to_string())
        }
        _ => Ok(value.to_string()),
    }
}

/// Extracts the `Authorization` header value, with or without a `Bearer `
/// prefix.
///
/// Unlike [`BearerExtractor`](crate::BearerExtractor), a header without the
/// scheme (`Authorization: abc`) still yields `abc`.
pub fn authorization_header_extractor() -> AuthorizationHeaderExtractor {
    PostExtractionFilter::new(
        HeaderExtractor::new([http::header::AUTHORIZATION.as_str()]),
        strip_bearer_prefix as fn(&str) -> Result<String, ExtractionError>,
    )
}

/// Extracts an OAuth 2.0 bearer token from the `Authorization` header, or
/// failing that from the `access_token` form or query argument.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{oauth2_extractor, Extractor, Token};
///
/// let extractor = oauth2_extractor();
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.set_query("access_token=from-query");
///
/// let outcome = extractor.extract(&adapter);
/// assert_eq!(outcome.token().map(Token::expose_secret), Some("from-query"));
/// ```
pub fn oauth2_extractor() -> MultiExtractor {
    MultiExtractor::new()
        .with(authorization_header_extractor())
        .with(ArgumentExtractor::new(["access_token"]))
}
