use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("profundo.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("profundo.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("profundo.client.request_duration_seconds");

pub(crate) static SESSION_SUBMITS: Counter = Counter::new("profundo.session.submits");
pub(crate) static SESSION_ERROR_TURNS: Counter = Counter::new("profundo.session.error_turns");
pub(crate) static SESSION_RESETS: Counter = Counter::new("profundo.session.resets");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_SUBMITS);
    collector.register_counter(&SESSION_ERROR_TURNS);
    collector.register_counter(&SESSION_RESETS);
}
