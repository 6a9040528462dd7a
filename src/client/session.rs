use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::client::state::SearchState;
use crate::client::transport::{SearchTransport, TransportError};
use crate::domain::advocate::{SortDirection, SortField};
use crate::dto::api::{AdvocatesQuery, FilterOptionsResponse};

/// Quiet period applied to free-text input before an attempt is created.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Key identifying one set of query parameters, used to drop attempts that
/// duplicate the one already in flight.
fn request_key(query: &AdvocatesQuery) -> String {
    let sort_field = query
        .sort_field
        .map(|field| field.to_string())
        .unwrap_or_default();
    format!(
        "{}-{}-{}-{}-{}-{}",
        query.page,
        query.search,
        query.degrees.join(","),
        query.specialties.join(","),
        sort_field,
        query.sort_direction,
    )
}

struct Inflight {
    id: u64,
    key: String,
    cancel: CancellationToken,
}

#[derive(Default)]
struct SessionInner {
    inflight: Option<Inflight>,
    debounce: Option<JoinHandle<()>>,
}

/// Drives the query endpoint on behalf of a UI.
///
/// At most one attempt is pending at any time: submitting new parameters
/// cancels the pending attempt, an identical pending attempt absorbs the
/// new one, and a superseded attempt can never mutate the state it no
/// longer owns. Free-text edits are debounced; every other trigger submits
/// immediately.
pub struct SearchSession<T> {
    transport: Arc<T>,
    state: Arc<Mutex<SearchState>>,
    inner: Arc<Mutex<SessionInner>>,
    next_attempt: Arc<AtomicU64>,
}

impl<T> Clone for SearchSession<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            state: Arc::clone(&self.state),
            inner: Arc::clone(&self.inner),
            next_attempt: Arc::clone(&self.next_attempt),
        }
    }
}

impl<T: SearchTransport> SearchSession<T> {
    pub fn new(transport: T) -> Self {
        Self::with_state(transport, Arc::new(Mutex::new(SearchState::default())))
    }

    /// Builds a session around an injected state container, letting the
    /// caller share the container with its rendering layer.
    pub fn with_state(transport: T, state: Arc<Mutex<SearchState>>) -> Self {
        Self {
            transport: Arc::new(transport),
            state,
            inner: Arc::new(Mutex::new(SessionInner::default())),
            next_attempt: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A copy of the current state, for rendering.
    pub fn snapshot(&self) -> SearchState {
        self.state_mut().clone()
    }

    fn state_mut(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().expect("search state lock poisoned")
    }

    fn inner_mut(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().expect("session lock poisoned")
    }

    /// Records a keystroke and restarts the debounce timer; only the value
    /// standing after the quiet period produces an attempt, on page 1.
    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state_mut().set_search_term(term);

        let mut inner = self.inner_mut();
        if let Some(pending) = inner.debounce.take() {
            pending.abort();
        }
        let session = self.clone();
        inner.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            session.state_mut().set_current_page(1);
            session.submit();
        }));
    }

    pub fn set_selected_degrees(&self, degrees: Vec<String>) {
        {
            let mut state = self.state_mut();
            state.set_selected_degrees(degrees);
            state.set_current_page(1);
        }
        self.submit();
    }

    pub fn set_selected_specialties(&self, specialties: Vec<String>) {
        {
            let mut state = self.state_mut();
            state.set_selected_specialties(specialties);
            state.set_current_page(1);
        }
        self.submit();
    }

    pub fn set_sorting(&self, field: Option<SortField>, direction: SortDirection) {
        self.state_mut().set_sorting(field, direction);
        self.submit();
    }

    pub fn set_page(&self, page: usize) {
        self.state_mut().set_current_page(page);
        self.submit();
    }

    /// Drops the free-text term, all selections and the page, then fetches.
    pub fn clear_filters(&self) {
        self.state_mut().clear_filters();
        self.submit();
    }

    /// Initial fetch, and re-fetch of the current parameters on demand.
    pub fn refresh(&self) {
        self.submit();
    }

    /// Creates an attempt for the current parameters.
    ///
    /// Duplicate of the pending attempt: dropped outright. Otherwise the
    /// pending attempt (if any) is cancelled and a new fetch task starts.
    /// The task applies its outcome only if it is still the attempt of
    /// record when the transport resolves.
    pub fn submit(&self) {
        let query = self.state_mut().to_query();
        let key = request_key(&query);

        let (id, cancel) = {
            let mut inner = self.inner_mut();
            if inner
                .inflight
                .as_ref()
                .is_some_and(|inflight| inflight.key == key)
            {
                return;
            }
            if let Some(previous) = inner.inflight.take() {
                previous.cancel.cancel();
            }
            let id = self.next_attempt.fetch_add(1, Ordering::Relaxed);
            let cancel = CancellationToken::new();
            inner.inflight = Some(Inflight {
                id,
                key,
                cancel: cancel.clone(),
            });
            (id, cancel)
        };

        self.state_mut().begin_attempt();

        let session = self.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                // Superseded: terminal, the transport future is dropped and
                // no state is touched.
                _ = cancel.cancelled() => return,
                outcome = session.transport.fetch_advocates(query) => outcome,
            };

            {
                let mut inner = session.inner_mut();
                let still_current = inner
                    .inflight
                    .as_ref()
                    .is_some_and(|inflight| inflight.id == id);
                if !still_current {
                    return;
                }
                inner.inflight = None;
            }

            let mut state = session.state_mut();
            match outcome {
                Ok(response) => state.apply_success(response),
                Err(error) => state.apply_failure(error.to_string()),
            }
        });
    }

    /// One-shot fetch of the filter universes; no debounce, no dedup, and
    /// no effect on the search state.
    pub async fn load_filter_options(&self) -> Result<FilterOptionsResponse, TransportError> {
        self.transport.fetch_filter_options().await
    }
}
