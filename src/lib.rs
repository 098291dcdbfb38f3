//! Pluggable strategies for extracting credential tokens from HTTP requests.
//!
//! This crate pulls a raw credential (typically a bearer token) out of an
//! incoming request for a downstream validator. It does not validate tokens.
//! Callers assemble one or more strategies and apply them to each request:
//! - **Leaf strategies** read one kind of source: headers, form/query
//!   arguments, or the `Authorization: Bearer` scheme
//! - **Composition** tries strategies in order ([`MultiExtractor`]) or
//!   post-processes a found token ([`PostExtractionFilter`])
//! - **Three-way outcome**: every attempt yields [`Extraction::Token`],
//!   [`Extraction::Absent`] or [`Extraction::Failure`], so "no credential"
//!   and "broken credential" are never confused
//!
//! # Core Types
//!
//! - [`Extractor`]: The one-operation strategy contract
//! - [`Extraction`]: The Token/Absent/Failure outcome
//! - [`Token`]: Non-empty credential that redacts itself in logs/output
//! - [`TokenRequest`]: Read-only request surface extractors consume
//! - [`web::RequestAdapter`]: Owned request snapshot built from `http::Request`
//!
//! # Examples
//!
//! ```
//! use request_token::web::RequestAdapter;
//! use request_token::{
//!     ArgumentExtractor, BearerExtractor, Extraction, Extractor, HeaderExtractor,
//!     MultiExtractor,
//! };
//!
//! // Built once, shared by every request
//! let extractor = MultiExtractor::new()
//!     .with(HeaderExtractor::new(["X-Api-Token"]))
//!     .with(ArgumentExtractor::new(["access_token"]))
//!     .with(BearerExtractor);
//!
//! let request = http::Request::builder()
//!     .uri("/reports")
//!     .header("Authorization", "Bearer abc.def.ghi")
//!     .body(Vec::new())
//!     .unwrap();
//! let adapter = RequestAdapter::from_http(&request);
//!
//! match extractor.extract(&adapter) {
//!     Extraction::Token(token) => assert_eq!(token.expose_secret(), "abc.def.ghi"),
//!     Extraction::Absent => unreachable!("header is present"),
//!     Extraction::Failure(err) => panic!("malformed credential: {err}"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extraction;
mod extractor;
mod request;
mod token;
pub mod web;

pub use error::{ExtractionError, FormError};
pub use extraction::Extraction;
pub use extractor::{
    authorization_header_extractor, extractor_fn, oauth2_extractor, strip_bearer_prefix,
    ArgumentExtractor, AuthorizationHeaderExtractor, BearerExtractor, Extractor, FnExtractor,
    HeaderExtractor, MultiExtractor, PostExtractionFilter,
};
pub use request::TokenRequest;
pub use token::Token;
