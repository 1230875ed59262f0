//! Generic bounded rejection sampling.
//!
//! [`sample_until`] repeatedly draws a candidate from an injected RNG and
//! keeps the first one that passes a predicate. The number of draws is capped
//! by `max_attempts`; when the budget runs out the outcome carries no value.
//! Exhaustion is a normal result, not an error.

use rand::Rng;

/// Result of a bounded sampling run.
///
/// `value` is `None` when no candidate was accepted within the budget; in
/// that case `attempts == max_attempts`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome<T> {
    /// Accepted candidate, if any.
    pub value: Option<T>,
    /// Number of draws actually performed (including the accepted one).
    pub attempts: usize,
}

impl<T> SampleOutcome<T> {
    pub fn is_exhausted(&self) -> bool {
        self.value.is_none()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// Draw candidates until one is accepted or `max_attempts` draws were spent.
///
/// `draw` may itself reject by returning `None` (for instance when an
/// intermediate quantity is already out of bounds); such draws count as
/// attempts. Candidates returned by `draw` are then checked with `accept`.
///
/// With `max_attempts == 0` nothing is drawn and the outcome is empty.
pub fn sample_until<R, T, D, A>(
    rng: &mut R,
    max_attempts: usize,
    mut draw: D,
    mut accept: A,
) -> SampleOutcome<T>
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> Option<T>,
    A: FnMut(&T) -> bool,
{
    for attempt in 1..=max_attempts {
        let Some(candidate) = draw(rng) else {
            continue;
        };
        if accept(&candidate) {
            return SampleOutcome {
                value: Some(candidate),
                attempts: attempt,
            };
        }
    }

    SampleOutcome {
        value: None,
        attempts: max_attempts,
    }
}
