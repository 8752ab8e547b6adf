//! Debounced, race-safe location autocomplete.
//!
//! Keystrokes arrive faster than the geocoding service should be called.
//! Every [`SearchOrchestrator::search`] call draws a token from a monotonic
//! sequence gate; the call then waits out a quiescence window and proceeds
//! only while its token is still the latest issued. The gate is checked
//! twice: after the debounce sleep (a superseded call never reaches the
//! network) and again after the provider responds (a stale in-flight
//! response may still complete, but its result is dropped). Callers
//! therefore only ever observe the result of the most recently issued call.
//!
//! There is no task cancellation involved, only "last issued wins" at the
//! read/apply boundary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::warn;

use crate::models::Coordinates;

pub mod provider;
pub mod suggest;


pub use provider::{PlaceFeature, PlaceProperties, PlaceSearchProvider, SearchQuery};
pub use suggest::Suggestion;

/// Quiescence window a query must survive before reaching the provider.
pub const DEBOUNCE: Duration = Duration::from_millis(400);

/// Queries shorter than this resolve to empty without a provider call.
const MIN_QUERY_CHARS: usize = 2;

/// Features requested from the provider; oversized relative to the result
/// cap to absorb filtering loss.
const PROVIDER_FETCH_LIMIT: usize = 15;

/// Options for one autocomplete call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Restrict suggestions to administrative/place-like categories
    pub only_cities: bool,
}

/// Resolution of one autocomplete call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A newer call was issued before this one resolved; show nothing
    Superseded,
    /// Suggestions for the most recently issued call
    Results(Vec<Suggestion>),
}

/// Monotonic issue counter implementing "last issued wins".
struct SequenceGate {
    latest: AtomicU64,
}

impl SequenceGate {
    fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Draws the next token, superseding every earlier one.
    fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the token is still the latest issued.
    fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

/// Debounced wrapper around an external place-search call.
pub struct SearchOrchestrator<P> {
    provider: P,
    gate: SequenceGate,
    debounce: Duration,
}

impl<P: PlaceSearchProvider> SearchOrchestrator<P> {
    /// Creates an orchestrator with the standard quiescence window.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            gate: SequenceGate::new(),
            debounce: DEBOUNCE,
        }
    }

    /// Resolves suggestions for a query.
    ///
    /// Sub-2-character queries resolve immediately to empty results while
    /// still superseding any pending longer query, matching an input field
    /// being cleared. Provider failures degrade to an empty result list and
    /// are logged, never surfaced.
    pub async fn search(
        &self,
        query: &str,
        bias: Option<Coordinates>,
        options: SearchOptions,
    ) -> SearchOutcome {
        if query.chars().count() < MIN_QUERY_CHARS {
            self.gate.issue();
            return SearchOutcome::Results(Vec::new());
        }

        let token = self.gate.issue();
        tokio::time::sleep(self.debounce).await;
        if !self.gate.is_current(token) {
            return SearchOutcome::Superseded;
        }

        let request = SearchQuery {
            query: query.to_string(),
            bias,
            limit: PROVIDER_FETCH_LIMIT,
        };
        let features = match self.provider.search(&request).await {
            Ok(features) => features,
            Err(error) => {
                warn!("place search for {query:?} failed: {error:#}");
                Vec::new()
            }
        };
        if !self.gate.is_current(token) {
            return SearchOutcome::Superseded;
        }

        SearchOutcome::Results(suggest::build_suggestions(features, &options))
    }
}
