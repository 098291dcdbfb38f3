use http::header::AUTHORIZATION;

use crate::extraction::Extraction;
use crate::request::TokenRequest;

use super::Extractor;

const SCHEME_PREFIX: &str = "bearer ";

/// Extracts the credential from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively (`Bearer`, `bearer` and `BEARER`
/// are all accepted). Everything after the 7-byte `"Bearer "` prefix is
/// returned verbatim, without trimming. A header without the prefix, or with
/// nothing after it, is `Absent`. Never fails.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{BearerExtractor, Extractor, Token};
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.add_header("Authorization", "Bearer abc.def.ghi").unwrap();
///
/// let outcome = BearerExtractor.extract(&adapter);
/// assert_eq!(outcome.token().map(Token::expose_secret), Some("abc.def.ghi"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BearerExtractor;

impl Extractor for BearerExtractor {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        let Some(value) = request.header(AUTHORIZATION.as_str()) else {
            return Extraction::Absent;
        };

        // `get` is None for values shorter than the prefix, or when byte 7
        // splits a multi-byte character; neither can carry the scheme.
        match value.get(..SCHEME_PREFIX.len()) {
            Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME_PREFIX) => {
                tracing::trace!("bearer token found in authorization header");
                Extraction::from_value(&value[SCHEME_PREFIX.len()..])
            }
            _ => Extraction::Absent,
        }
    }
}
