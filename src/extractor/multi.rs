use std::fmt;

use crate::extraction::Extraction;
use crate::request::TokenRequest;

use super::Extractor;

/// Tries several strategies in order until one is decisive.
///
/// For each strategy, in order:
///
/// - `Token`: returned immediately; later strategies never run
/// - `Failure`: returned immediately; later strategies never run
/// - `Absent`: move on to the next strategy
///
/// If every strategy is `Absent` (or there are none), the result is
/// `Absent`. A failure is never downgraded to absence, so a broken source
/// is reported even when a later source would have produced a token.
///
/// # Examples
///
/// ```
/// use request_token::web::RequestAdapter;
/// use request_token::{
///     ArgumentExtractor, BearerExtractor, Extractor, HeaderExtractor, MultiExtractor, Token,
/// };
///
/// let extractor = MultiExtractor::new()
///     .with(HeaderExtractor::new(["X-Api-Token"]))
///     .with(ArgumentExtractor::new(["access_token"]))
///     .with(BearerExtractor);
///
/// let mut adapter = RequestAdapter::new(http::Method::GET);
/// adapter.add_header("Authorization", "Bearer abc").unwrap();
///
/// let outcome = extractor.extract(&adapter);
/// assert_eq!(outcome.token().map(Token::expose_secret), Some("abc"));
/// ```
#[derive(Default)]
pub struct MultiExtractor {
    extractors: Vec<Box<dyn Extractor>>,
}

impl MultiExtractor {
    /// Creates an empty chain, which always yields `Absent`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a strategy to the end of the chain.
    pub fn with(mut self, extractor: impl Extractor + 'static) -> Self {
        self.push(extractor);
        self
    }

    /// Appends a strategy to the end of the chain.
    pub fn push(&mut self, extractor: impl Extractor + 'static) {
        self.extractors.push(Box::new(extractor));
    }

    /// Returns the number of strategies in the chain.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Returns `true` if the chain has no strategies.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl FromIterator<Box<dyn Extractor>> for MultiExtractor {
    fn from_iter<I: IntoIterator<Item = Box<dyn Extractor>>>(iter: I) -> Self {
        Self {
            extractors: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Box<dyn Extractor>>> for MultiExtractor {
    fn from(extractors: Vec<Box<dyn Extractor>>) -> Self {
        Self { extractors }
    }
}

impl Extractor for MultiExtractor {
    fn extract(&self, request: &dyn TokenRequest) -> Extraction {
        for (index, extractor) in self.extractors.iter().enumerate() {
            match extractor.extract(request) {
                Extraction::Absent => continue,
                Extraction::Failure(err) => {
                    tracing::debug!(strategy = index, error = %err, "extraction chain aborted");
                    return Extraction::Failure(err);
                }
                found @ Extraction::Token(_) => return found,
            }
        }
        Extraction::Absent
    }
}

impl fmt::Debug for MultiExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiExtractor")
            .field("strategies", &self.extractors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::extractor::extractor_fn;
    use crate::web::RequestAdapter;
    use http::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// A fixed-outcome strategy that counts its invocations.
    fn counted(
        calls: &Arc<AtomicUsize>,
        outcome: fn() -> Extraction,
    ) -> impl Extractor + 'static {
        let calls = Arc::clone(calls);
        extractor_fn(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            outcome()
        })
    }

    fn absent() -> Extraction {
        Extraction::Absent
    }

    fn token_x() -> Extraction {
        Extraction::from_value("x")
    }

    fn token_y() -> Extraction {
        Extraction::from_value("y")
    }

    fn failure() -> Extraction {
        Extraction::Failure(ExtractionError::rejected("E"))
    }

    #[test]
    fn first_token_wins_and_stops_chain() {
        let calls = [
            Arc::new(AtomicUsize::new(0)),
            Arc::new(AtomicUsize::new(0)),
            Arc::new(AtomicUsize::new(0)),
        ];
        let chain = MultiExtractor::new()
            .with(counted(&calls[0], absent))
            .with(counted(&calls[1], token_x))
            .with(counted(&calls[2], token_y));

        let outcome = chain.extract(&RequestAdapter::new(Method::GET));

        assert_eq!(outcome.token().unwrap().expose_secret(), "x");
        assert_eq!(calls[0].load(Ordering::SeqCst), 1);
        assert_eq!(calls[1].load(Ordering::SeqCst), 1);
        assert_eq!(calls[2].load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failure_propagates_and_stops_chain() {
        let later = Arc::new(AtomicUsize::new(0));
        let earlier = Arc::new(AtomicUsize::new(0));
        let chain = MultiExtractor::new()
            .with(counted(&earlier, absent))
            .with(extractor_fn(|_| failure()))
            .with(counted(&later, token_x));

        let outcome = chain.extract(&RequestAdapter::new(Method::GET));

        match outcome {
            Extraction::Failure(ExtractionError::Rejected { reason }) => assert_eq!(reason, "E"),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(earlier.load(Ordering::SeqCst), 1);
        assert_eq!(later.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failure_after_absent_is_not_absent() {
        let chain = MultiExtractor::new()
            .with(extractor_fn(|_| absent()))
            .with(extractor_fn(|_| failure()));

        assert!(chain.extract(&RequestAdapter::new(Method::GET)).is_failure());
    }

    #[test]
    fn all_absent_is_absent() {
        let chain = MultiExtractor::new()
            .with(extractor_fn(|_| absent()))
            .with(extractor_fn(|_| absent()));

        assert!(chain.extract(&RequestAdapter::new(Method::GET)).is_absent());
    }

    #[test]
    fn empty_chain_is_absent() {
        let chain = MultiExtractor::new();
        assert!(chain.is_empty());
        assert!(chain.extract(&RequestAdapter::new(Method::GET)).is_absent());
    }

    #[test]
    fn builds_from_boxed_iterator() {
        let strategies: Vec<Box<dyn Extractor>> = vec![
            Box::new(extractor_fn(|_| absent())),
            Box::new(extractor_fn(|_| token_y())),
        ];
        let chain: MultiExtractor = strategies.into_iter().collect();

        assert_eq!(chain.len(), 2);
        let outcome = chain.extract(&RequestAdapter::new(Method::GET));
        assert_eq!(outcome.token().unwrap().expose_secret(), "y");
    }

    #[test]
    fn chains_nest() {
        let inner = MultiExtractor::new().with(extractor_fn(|_| absent()));
        let outer = MultiExtractor::new()
            .with(inner)
            .with(extractor_fn(|_| token_x()));

        let outcome = outer.extract(&RequestAdapter::new(Method::GET));
        assert_eq!(outcome.token().unwrap().expose_secret(), "x");
    }

    #[test]
    fn debug_shows_strategy_count() {
        let chain = MultiExtractor::new().with(extractor_fn(|_| absent()));
        assert_eq!(format!("{:?}", chain), "MultiExtractor { strategies: 1 }");
    }
}
