use crate::error::FormError;

/// Read-only view of an incoming request, as seen by extractors.
///
/// This trait is the boundary between HTTP frameworks and the extraction
/// strategies. Framework integrations implement it (or build a
/// [`RequestAdapter`](crate::web::RequestAdapter), which implements it) and
/// hand `&dyn TokenRequest` to [`Extractor::extract`](crate::Extractor::extract).
///
/// # Design Notes
///
/// Form decoding takes `&self`: implementations that decode lazily must cache
/// through interior mutability, and that cache must be idempotent and safe if
/// two threads decode the same request at once.
///
/// # Examples
///
/// ```
/// use request_token::{FormError, TokenRequest};
/// use std::collections::HashMap;
///
/// struct HeadersOnly(HashMap<String, String>);
///
/// impl TokenRequest for HeadersOnly {
///     fn header(&self, name: &str) -> Option<&str> {
///         self.0
///             .iter()
///             .find(|(k, _)| k.eq_ignore_ascii_case(name))
///             .map(|(_, v)| v.as_str())
///     }
///
///     fn decode_form(&self, _max_body_bytes: usize) -> Result<(), FormError> {
///         Ok(())
///     }
///
///     fn form_value(&self, _name: &str) -> Option<&str> {
///         None
///     }
/// }
/// ```
pub trait TokenRequest {
    /// Returns the first value of the named header.
    ///
    /// Header names are compared case-insensitively. Returns `None` when the
    /// header is missing or its value is not representable as a string.
    fn header(&self, name: &str) -> Option<&str>;

    /// Decodes body and query arguments into the form table.
    ///
    /// Bodies larger than `max_body_bytes` are not parsed. Whatever could be
    /// decoded stays available through [`form_value`](Self::form_value) even
    /// when an error is returned.
    fn decode_form(&self, max_body_bytes: usize) -> Result<(), FormError>;

    /// Returns the first decoded value for the named argument.
    fn form_value(&self, name: &str) -> Option<&str>;
}

/// A bare header map is a header-only request: it has no form arguments.
impl TokenRequest for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }

    fn decode_form(&self, _max_body_bytes: usize) -> Result<(), FormError> {
        Ok(())
    }

    fn form_value(&self, _name: &str) -> Option<&str> {
        None
    }
}
