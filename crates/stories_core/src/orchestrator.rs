use stories_logging::{stories_debug, stories_info};

use crate::Effect;

pub type RequestId = u64;

/// Bookkeeping behind the "fetch once per distinct active query" subscription.
///
/// Only the most recently issued request may update the fetch state; anything
/// older that still completes is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Orchestrator {
    last_id: RequestId,
    issued_query: Option<String>,
    in_flight: Option<RequestId>,
}

impl Orchestrator {
    /// Issues a request when `active_query` differs from the last issued one.
    ///
    /// Returns `None` when nothing changed. Otherwise returns the effects to
    /// run; the caller must apply `FETCH_INIT` alongside them.
    pub(crate) fn sync(&mut self, active_query: &str) -> Option<Vec<Effect>> {
        if self.issued_query.as_deref() == Some(active_query) {
            return None;
        }

        let mut effects = Vec::with_capacity(2);
        if let Some(stale) = self.in_flight.take() {
            stories_debug!("Superseding in-flight request {}", stale);
            effects.push(Effect::CancelFetch { request_id: stale });
        }

        self.last_id += 1;
        let request_id = self.last_id;
        self.issued_query = Some(active_query.to_string());
        self.in_flight = Some(request_id);
        stories_info!("Issuing request {} for {}", request_id, active_query);
        effects.push(Effect::Fetch {
            request_id,
            url: active_query.to_string(),
        });
        Some(effects)
    }

    /// Returns whether a completion for `request_id` may be applied.
    pub(crate) fn accept(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            stories_debug!(
                "Discarding response for request {} (latest is {})",
                request_id,
                self.last_id
            );
            return false;
        }
        self.in_flight = None;
        true
    }

    pub(crate) fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }
}
