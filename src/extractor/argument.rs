use crate::extraction::Extraction;
use crate::request::TokenRequest;
use crate::web::DEFAULT_MAX_FORM_BYTES;

use super::Extractor;

/// Finds a token in request arguments: a POSTed urlencoded form or the URL
/// query string.
///
/// The request's form is decoded first. Decode errors (an oversized or
/// unsupported body) are logged and otherwise ignored: lookup proceeds with
/// whatever arguments were decoded, so this extractor never fails. A
/// successful extraction therefore says nothing about whether the rest of
/// the form was well formed.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{ArgumentExtractor, Extractor, Token};
///
/// let extractor = ArgumentExtractor::new(["access_token", "token"]);
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.set_query("token=abc");
///
/// let outcome = extractor.extract(&adapter);
/// assert_eq!(outcome.token().map(Token::expose_secret), Some("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentExtractor {
    names: Vec<String>,
    max_body_bytes: usize,
}

impl ArgumentExtractor {
    /// Creates an extractor trying `names` in order, with the default body
    /// limit of [`DEFAULT_MAX_FORM_BYTES`].
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            max_body_bytes: DEFAULT_MAX_FORM_BYTES,
        }
    }

    /// Sets the largest body, in bytes, the form decoder will parse.
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Returns the argument names in lookup order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the body limit handed to the form decoder.
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Extractor for ArgumentExtractor {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        if let Err(err) = request.decode_form(self.max_body_bytes) {
            tracing::debug!(error = %err, "ignoring form decode error");
        }

        for name in &self.names {
            if let Some(value) = request.form_value(name).filter(|v| !v.is_empty()) {
                tracing::trace!(argument = %name, "token found in request arguments");
                return Extraction::from_value(value);
            }
        }
        Extraction::Absent
    }
}
