//! Progress notification port
//!
//! The outbound call blocks for its full duration; the interface signals
//! "processing" during the wait but offers no cancellation.

/// Notified around the single gateway call
pub trait SolveProgressNotifier: Send + Sync {
    /// The request is about to be sent to the named model
    fn on_request_start(&self, model: &str);

    /// The request finished (successfully or not)
    fn on_request_end(&self, success: bool);
}

/// No-op notifier for quiet mode and tests
pub struct NoProgress;

impl SolveProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &str) {}
    fn on_request_end(&self, _success: bool) {}
}
