//! Web framework integration surface.
//!
//! This module provides the boundary between HTTP requests and the
//! extraction strategies. It handles:
//! - Snapshotting an `http::Request` into a [`RequestAdapter`]
//! - Case-insensitive header lookup
//! - Lazy, cached decoding of urlencoded body and query arguments
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: Only the `http` types shared by the
//!    major Rust frameworks are used. Framework-specific code converts its
//!    request into `http::Request` or builds a `RequestAdapter` directly.
//!
//! 2. **Permissive Decoding**: Form decode errors never stop extraction.
//!    Whatever arguments were decoded remain available.
//!
//! 3. **No Validation**: The web boundary does not verify tokens. It only
//!    exposes the raw request parts to extractors.
//!
//! # Example Flow
//!
//! ```
//! use request_token::web::RequestAdapter;
//! use request_token::{oauth2_extractor, Extractor};
//!
//! // Built once at startup, shared by every request
//! let extractor = oauth2_extractor();
//!
//! let request = http::Request::builder()
//!     .uri("/feed?access_token=abc")
//!     .body(Vec::new())
//!     .unwrap();
//! let adapter = RequestAdapter::from_http(&request);
//!
//! match extractor.extract(&adapter).into_result() {
//!     Ok(Some(token)) => { /* hand the token to the validator */ }
//!     Ok(None) => { /* treat as unauthenticated */ }
//!     Err(err) => { /* reject the request as malformed */ }
//! }
//! ```

mod adapter;
mod form;

pub use adapter::RequestAdapter;
pub use form::DEFAULT_MAX_FORM_BYTES;
