use crate::error::ExtractionError;
use crate::token::Token;

/// The outcome of one extraction attempt.
///
/// Exactly one of three things happens when a strategy runs:
///
/// - [`Token`](Extraction::Token): a non-empty credential was found
/// - [`Absent`](Extraction::Absent): nothing was found here; composition
///   may try another source
/// - [`Failure`](Extraction::Failure): something is actually wrong; the
///   caller should reject rather than treat the request as anonymous
///
/// Consumers match on the variant, never on error messages.
///
/// # Examples
///
/// ```
/// use request_token::{Extraction, Token};
///
/// let found = Extraction::from_value("abc");
/// assert_eq!(found.token().map(Token::expose_secret), Some("abc"));
///
/// // The empty string is never a token
/// assert!(Extraction::from_value("").is_absent());
/// ```
#[derive(Debug)]
#[must_use]
pub enum Extraction {
    /// A credential was found
    Token(Token),
    /// No credential was found by this strategy
    Absent,
    /// The strategy hit a condition beyond ordinary absence
    Failure(ExtractionError),
}

impl Extraction {
    /// Builds `Token` from a raw value, or `Absent` if it is empty.
    pub fn from_value(value: impl Into<String>) -> Self {
        match Token::new(value) {
            Some(token) => Extraction::Token(token),
            None => Extraction::Absent,
        }
    }

    /// Returns `true` if a token was found.
    pub fn is_token(&self) -> bool {
        matches!(self, Extraction::Token(_))
    }

    /// Returns `true` if nothing was found.
    pub fn is_absent(&self) -> bool {
        matches!(self, Extraction::Absent)
    }

    /// Returns `true` if the extraction failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Extraction::Failure(_))
    }

    /// Returns the token, if one was found.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Extraction::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the failure cause, if the extraction failed.
    pub fn failure(&self) -> Option<&ExtractionError> {
        match self {
            Extraction::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the token, if one was found.
    pub fn into_token(self) -> Option<Token> {
        match self {
            Extraction::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Converts into a `Result` so callers can use `?` on failures.
    ///
    /// ```
    /// use request_token::{Extraction, ExtractionError, Token};
    ///
    /// fn bearer(outcome: Extraction) -> Result<Option<String>, ExtractionError> {
    ///     Ok(outcome.into_result()?.map(Token::into_inner))
    /// }
    ///
    /// assert_eq!(bearer(Extraction::Absent).unwrap(), None);
    /// assert!(bearer(Extraction::Failure(ExtractionError::rejected("bad"))).is_err());
    /// ```
    pub fn into_result(self) -> Result<Option<Token>, ExtractionError> {
        match self {
            Extraction::Token(token) => Ok(Some(token)),
            Extraction::Absent => Ok(None),
            Extraction::Failure(err) => Err(err),
        }
    }
}

impl From<Result<Option<Token>, ExtractionError>> for Extraction {
    fn from(result: Result<Option<Token>, ExtractionError>) -> Self {
        match result {
            Ok(Some(token)) => Extraction::Token(token),
            Ok(None) => Extraction::Absent,
            Err(err) => Extraction::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_builds_token() {
        let outcome = Extraction::from_value("abc");
        assert!(outcome.is_token());
        assert_eq!(outcome.token().unwrap().expose_secret(), "abc");
    }

    #[test]
    fn from_value_empty_is_absent() {
        assert!(Extraction::from_value(String::new()).is_absent());
    }

    #[test]
    fn predicates_are_exclusive() {
        let failure = Extraction::Failure(ExtractionError::rejected("bad"));
        assert!(failure.is_failure());
        assert!(!failure.is_token());
        assert!(!failure.is_absent());
        assert!(failure.token().is_none());
        assert!(failure.failure().is_some());
    }

    #[test]
    fn into_result_maps_each_variant() {
        let token = Extraction::from_value("t").into_result().unwrap();
        assert_eq!(token.unwrap().expose_secret(), "t");

        assert!(Extraction::Absent.into_result().unwrap().is_none());

        let err = Extraction::Failure(ExtractionError::rejected("bad"))
            .into_result()
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Rejected { .. }));
    }

    #[test]
    fn from_result_round_trips_absent() {
        let absent: Result<Option<Token>, ExtractionError> = Ok(None);
        assert!(Extraction::from(absent).is_absent());

        let failed: Result<Option<Token>, ExtractionError> =
            Err(ExtractionError::rejected("x"));
        assert!(Extraction::from(failed).is_failure());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let outcome = Extraction::from_value("super-secret-jwt");
        let debug_output = format!("{:?}", outcome);
        assert!(!debug_output.contains("super-secret-jwt"));
        assert!(debug_output.contains("Token"));
    }
}
