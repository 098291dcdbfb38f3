//! Request adapter for exposing HTTP requests to extractors.

use std::sync::OnceLock;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};

use crate::error::FormError;
use crate::request::TokenRequest;

use super::form::{self, DecodedForm};

/// Owned, framework-agnostic snapshot of an HTTP request.
///
/// `RequestAdapter` is the reference implementation of [`TokenRequest`]. It
/// holds the parts extractors read (method, headers, query string, body) and
/// decodes form arguments lazily, once, on the first
/// [`decode_form`](TokenRequest::decode_form) call.
///
/// # Design Notes
///
/// The decoded form lives in a `OnceLock`, so the first decode is race-free
/// when one adapter is shared across threads, and every later call observes
/// the same arguments and the same error. The limit passed to the first call
/// is the one that applies. Any mutation through `&mut self` discards the
/// cached form.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{ArgumentExtractor, BearerExtractor, Extractor, Token};
///
/// let request = http::Request::builder()
///     .method("POST")
///     .uri("/api/items?access_token=from-query")
///     .header("Authorization", "Bearer abc.def.ghi")
///     .body(Vec::new())
///     .unwrap();
///
/// let adapter = RequestAdapter::from_http(&request);
///
/// let bearer = BearerExtractor.extract(&adapter);
/// assert_eq!(bearer.token().map(Token::expose_secret), Some("abc.def.ghi"));
///
/// let argument = ArgumentExtractor::new(["access_token"]).extract(&adapter);
/// assert_eq!(argument.token().map(Token::expose_secret), Some("from-query"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    method: Method,
    headers: HeaderMap,
    /// Raw query string, without the leading `?`
    query: Option<String>,
    body: Vec<u8>,
    form: OnceLock<DecodedForm>,
}

impl RequestAdapter {
    /// Creates an adapter with no headers, query or body.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_token::web::RequestAdapter;
    ///
    /// let adapter = RequestAdapter::new(http::Method::GET);
    /// assert_eq!(adapter.method(), http::Method::GET);
    /// ```
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            query: None,
            body: Vec::new(),
            form: OnceLock::new(),
        }
    }

    /// Snapshots an `http::Request`, copying its headers, query and body.
    pub fn from_http<B: AsRef<[u8]>>(request: &http::Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            headers: request.headers().clone(),
            query: request.uri().query().map(str::to_owned),
            body: request.body().as_ref().to_vec(),
            form: OnceLock::new(),
        }
    }

    /// Appends a header value, keeping any earlier values for the same name.
    ///
    /// Fails if the name or value is not valid in an HTTP header.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), http::Error> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        self.reset_form();
        Ok(())
    }

    /// Sets the raw query string (without the leading `?`).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = Some(query.into());
        self.reset_form();
    }

    /// Sets the body and its `Content-Type`.
    pub fn set_body(
        &mut self,
        content_type: &str,
        body: impl Into<Vec<u8>>,
    ) -> Result<(), http::Error> {
        let value = HeaderValue::from_str(content_type)?;
        self.headers.insert(http::header::CONTENT_TYPE, value);
        self.body = body.into();
        self.reset_form();
        Ok(())
    }

    /// Returns the request method.
    pub fn method(&self) -> Method {
        self.method.clone()
    }

    /// Returns the request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the raw query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns `true` once form arguments have been decoded.
    pub fn is_form_decoded(&self) -> bool {
        self.form.get().is_some()
    }

    fn reset_form(&mut self) {
        self.form = OnceLock::new();
    }

    fn decoded(&self, max_body_bytes: usize) -> &DecodedForm {
        self.form.get_or_init(|| {
            form::decode(
                &self.method,
                &self.headers,
                self.query.as_deref(),
                &self.body,
                max_body_bytes,
            )
        })
    }
}

impl<B: AsRef<[u8]>> From<http::Request<B>> for RequestAdapter {
    fn from(request: http::Request<B>) -> Self {
        Self::from_http(&request)
    }
}

impl TokenRequest for RequestAdapter {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.header(name)
    }

    fn decode_form(&self, max_body_bytes: usize) -> Result<(), FormError> {
        match &self.decoded(max_body_bytes).error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn form_value(&self, name: &str) -> Option<&str> {
        self.form.get().and_then(|form| form.values.first(name))
    }
}
