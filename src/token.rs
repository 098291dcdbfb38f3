use std::fmt;

/// A credential extracted from a request.
///
/// `Token` owns the raw, unvalidated credential string. It is never empty:
/// [`Token::new`] refuses the empty string, so "nothing was found" is always
/// reported as [`Extraction::Absent`](crate::Extraction::Absent) rather than
/// as an empty token.
///
/// Debug and Display output is always `[REDACTED]` so tokens can flow
/// through structured logs and error messages without leaking.
///
/// # Examples
///
/// ```
/// use request_token::Token;
///
/// let token = Token::new("abc.def.ghi").expect("non-empty");
/// assert_eq!(format!("{:?}", token), "[REDACTED]");
/// assert_eq!(token.expose_secret(), "abc.def.ghi");
///
/// assert!(Token::new("").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    // Private so the non-empty invariant cannot be bypassed.
    inner: String,
}

impl Token {
    /// Wraps a credential string, or returns `None` if it is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let inner = value.into();
        if inner.is_empty() {
            None
        } else {
            Some(Self { inner })
        }
    }

    /// Explicitly exposes the raw credential.
    ///
    /// Ensure the returned value is not logged or displayed.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Consumes the token and returns the raw credential.
    pub fn into_inner(self) -> String {
        self.inner
    }
}

// No Deref, AsRef or Borrow: reading the credential is always explicit.

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
