//! Logging holds wrapper functions for logging events.
//! Each function corresponds to one step of a request (start, hop, delivery, ..).
//! Installing a subscriber is left to the binary.

use crate::ReportError;
use tracing::{event, Level};

/// Request event handler.
/// Used when the network starts handling a request. Captures the following data:
/// request, origin, destination
pub fn request_event(request: &'static str, origin: &str, destination: &str) {
    event!(Level::INFO, request, origin, destination, "request started");
}

/// Hop event handler.
/// Used whenever a node hands a packet to its successor.
pub fn hop_event(node: &str) {
    event!(Level::DEBUG, node, "packet passed on");
}

/// Accounting event handler.
/// Captures the author and title of every delivered document.
pub fn accounting_event(author: &str, title: &str) {
    event!(Level::INFO, author, title, "accounting");
}

/// Outcome event handler.
/// Used once a request finished. `outcome` is the debug form of the result.
pub fn outcome_event(request: &'static str, outcome: &str, hops: usize) {
    event!(Level::INFO, request, outcome, hops, "request finished");
}

/// Report failures are not fatal to a request, but they should not vanish
/// without a trace either.
pub fn report_dropped_event(error: &ReportError) {
    event!(Level::WARN, error = %error, "report write discarded");
}
