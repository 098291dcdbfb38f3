//! Decoding of urlencoded body and query arguments.

use std::collections::HashMap;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method};

use crate::error::FormError;

/// Default body limit handed to the form decoder, in bytes.
pub const DEFAULT_MAX_FORM_BYTES: usize = 10_000_000;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// Decoded arguments, name to values in decode order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FormValues {
    values: HashMap<String, Vec<String>>,
}

impl FormValues {
    /// Appends every `name=value` pair of a urlencoded input.
    pub(crate) fn extend_urlencoded(&mut self, input: &[u8]) {
        for (name, value) in url::form_urlencoded::parse(input) {
            self.values
                .entry(name.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }

    /// Returns the first value recorded for `name`.
    pub(crate) fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Result of one decode pass: the arguments plus the error that cut it short.
#[derive(Debug, Clone)]
pub(crate) struct DecodedForm {
    pub(crate) values: FormValues,
    pub(crate) error: Option<FormError>,
}

/// Decodes body arguments (for body-carrying methods) followed by query
/// arguments, so body values take precedence for a repeated name.
pub(crate) fn decode(
    method: &Method,
    headers: &HeaderMap,
    query: Option<&str>,
    body: &[u8],
    max_body_bytes: usize,
) -> DecodedForm {
    let mut values = FormValues::default();
    let mut error = None;

    if carries_form_body(method) {
        match media_type(headers) {
            Some(media) if media.eq_ignore_ascii_case(URLENCODED) => {
                if body.len() > max_body_bytes {
                    error = Some(FormError::BodyTooLarge {
                        limit: max_body_bytes,
                        actual: body.len(),
                    });
                } else {
                    values.extend_urlencoded(body);
                }
            }
            Some(media) if media.eq_ignore_ascii_case(MULTIPART) => {
                error = Some(FormError::UnsupportedContentType {
                    content_type: media.to_ascii_lowercase(),
                });
            }
            _ => {}
        }
    }

    if let Some(query) = query {
        values.extend_urlencoded(query.as_bytes());
    }

    DecodedForm { values, error }
}

fn carries_form_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// The media type of the `Content-Type` header, without parameters.
fn media_type(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let media = value.split(';').next().unwrap_or(value).trim();
    if media.is_empty() {
        None
    } else {
        Some(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn form_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn decodes_query_only_for_get() {
        let headers = form_headers(URLENCODED);
        let decoded = decode(
            &Method::GET,
            &headers,
            Some("access_token=q"),
            b"access_token=b",
            DEFAULT_MAX_FORM_BYTES,
        );

        assert!(decoded.error.is_none());
        assert_eq!(decoded.values.first("access_token"), Some("q"));
    }

    #[test]
    fn body_values_precede_query_values() {
        let headers = form_headers(URLENCODED);
        let decoded = decode(
            &Method::POST,
            &headers,
            Some("token=from-query"),
            b"token=from-body",
            DEFAULT_MAX_FORM_BYTES,
        );

        assert_eq!(decoded.values.first("token"), Some("from-body"));
        assert_eq!(decoded.values.values["token"].len(), 2);
    }

    #[test]
    fn percent_and_plus_are_decoded() {
        let headers = form_headers("application/x-www-form-urlencoded; charset=utf-8");
        let decoded = decode(
            &Method::POST,
            &headers,
            None,
            b"token=a%2Bb+c",
            DEFAULT_MAX_FORM_BYTES,
        );

        assert_eq!(decoded.values.first("token"), Some("a+b c"));
    }

    #[test]
    fn oversized_body_is_skipped_but_query_kept() {
        let headers = form_headers(URLENCODED);
        let decoded = decode(
            &Method::POST,
            &headers,
            Some("token=q"),
            b"token=body-value",
            4,
        );

        assert_eq!(
            decoded.error,
            Some(FormError::BodyTooLarge {
                limit: 4,
                actual: 16,
            })
        );
        assert_eq!(decoded.values.first("token"), Some("q"));
    }

    #[test]
    fn multipart_is_reported_unsupported() {
        let headers = form_headers("Multipart/Form-Data; boundary=xyz");
        let decoded = decode(&Method::POST, &headers, None, b"--xyz--", 1024);

        assert_eq!(
            decoded.error,
            Some(FormError::UnsupportedContentType {
                content_type: MULTIPART.to_string(),
            })
        );
    }

    #[test]
    fn other_content_types_are_ignored_silently() {
        let headers = form_headers("application/json");
        let decoded = decode(
            &Method::POST,
            &headers,
            None,
            br#"{"token":"x"}"#,
            DEFAULT_MAX_FORM_BYTES,
        );

        assert!(decoded.error.is_none());
        assert_eq!(decoded.values, FormValues::default());
    }

    #[test]
    fn missing_content_type_leaves_body_unparsed() {
        let decoded = decode(
            &Method::PUT,
            &HeaderMap::new(),
            None,
            b"token=x",
            DEFAULT_MAX_FORM_BYTES,
        );

        assert!(decoded.error.is_none());
        assert_eq!(decoded.values.first("token"), None);
    }
}
