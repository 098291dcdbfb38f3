use crate::extraction::Extraction;
use crate::request::TokenRequest;

use super::Extractor;

/// Finds a token in one of several headers.
///
/// Header names are tried in order; the first one carrying a non-empty value
/// wins. The value is returned as-is, so a scheme prefix such as `Bearer `
/// is kept (see [`BearerExtractor`](crate::BearerExtractor) or
/// [`authorization_header_extractor`](crate::authorization_header_extractor)
/// to strip it). Never fails.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{Extractor, HeaderExtractor, Token};
///
/// let extractor = HeaderExtractor::new(["X-Token", "Authorization"]);
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.add_header("X-Token", "abc").unwrap();
///
/// let outcome = extractor.extract(&adapter);
/// assert_eq!(outcome.token().map(Token::expose_secret), Some("abc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderExtractor {
    names: Vec<String>,
}

impl HeaderExtractor {
    /// Creates an extractor trying `names` in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the header names in lookup order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Extractor for HeaderExtractor {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        for name in &self.names {
            if let Some(value) = request.header(name).filter(|v| !v.is_empty()) {
                tracing::trace!(header = %name, "token found in header");
                return Extraction::from_value(value);
            }
        }
        Extraction::Absent
    }
}
