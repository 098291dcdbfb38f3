//! Token extraction strategies.
//!
//! Every strategy implements the one-operation [`Extractor`] contract.
//! Leaf strategies read a single kind of source; [`MultiExtractor`] and
//! [`PostExtractionFilter`] compose other strategies.

mod argument;
mod bearer;
mod filter;
mod header;
mod multi;
mod oauth2;

use std::fmt;
use std::sync::Arc;

use crate::extraction::Extraction;
use crate::request::TokenRequest;

pub use argument::ArgumentExtractor;
pub use bearer::BearerExtractor;
pub use filter::PostExtractionFilter;
pub use header::HeaderExtractor;
pub use multi::MultiExtractor;
pub use oauth2::{
    authorization_header_extractor, oauth2_extractor, strip_bearer_prefix,
    AuthorizationHeaderExtractor,
};

/// A strategy for pulling a credential out of a request.
///
/// Implementations must report "nothing here" as [`Extraction::Absent`],
/// never as an empty token or a failure. [`Extraction::Failure`] is for
/// conditions beyond ordinary absence, such as a transform rejecting the
/// value.
///
/// Strategies are immutable configuration values: build one at startup and
/// share it (e.g. behind an `Arc`) across every request and thread.
///
/// # Examples
///
/// ```
/// use request_token::{Extraction, Extractor, TokenRequest};
///
/// /// Reads the token from a `Session` header.
/// struct SessionHeader;
///
/// impl Extractor for SessionHeader {
///     fn extract(&self, request: &dyn TokenRequest) -> Extraction {
///         match request.header("Session") {
///             Some(value) => Extraction::from_value(value),
///             None => Extraction::Absent,
///         }
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// Attempts to extract a token from `request`.
    fn extract(&self, request: &dyn TokenRequest) -> Extraction;
}

impl<E: Extractor + ?Sized> Extractor for &E {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        (**self).extract(request)
    }
}

impl<E: Extractor + ?Sized> Extractor for Box<E> {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        (**self).extract(request)
    }
}

impl<E: Extractor + ?Sized> Extractor for Arc<E> {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        (**self).extract(request)
    }
}

/// An extractor backed by a closure. See [`extractor_fn`].
#[derive(Clone, Copy)]
pub struct FnExtractor<F> {
    f: F,
}

impl<F> Extractor for FnExtractor<F>
where
    F: Fn(&dyn TokenRequest) -> Extraction + Send + Sync,
{
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        (self.f)(request)
    }
}

impl<F> fmt::Debug for FnExtractor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnExtractor").finish_non_exhaustive()
    }
}

/// Turns a closure into an [`Extractor`], for one-off custom strategies.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{extractor_fn, Extraction, ExtractionError, Extractor};
///
/// // Reject API keys sent in a deprecated header instead of ignoring them
/// let legacy = extractor_fn(|request| match request.header("X-Legacy-Key") {
///     Some(_) => Extraction::Failure(ExtractionError::rejected("legacy key header")),
///     None => Extraction::Absent,
/// });
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.add_header("X-Legacy-Key", "k").unwrap();
/// assert!(legacy.extract(&adapter).is_failure());
/// ```
pub fn extractor_fn<F>(f: F) -> FnExtractor<F>
where
    F: Fn(&dyn TokenRequest) -> Extraction + Send + Sync,
{
    FnExtractor { f }
}
