//! Submission sink for completed registration drafts.
//!
//! The registration page never knows what happens to a submitted draft. It
//! pulls a `DraftSink` from context and hands the draft over. The default sink
//! logs the JSON payload: `log` + `console_log` in the browser,
//! `leptos::logging` on the server build.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use std::fmt;
use std::sync::Arc;

use crate::state::draft::PatientDraft;

type Handler = Arc<dyn Fn(&PatientDraft) + Send + Sync>;

/// Cloneable handle to the collaborator that receives submitted drafts.
#[derive(Clone)]
pub struct DraftSink {
    handler: Handler,
}

impl DraftSink {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&PatientDraft) + Send + Sync + 'static,
    {
        Self { handler: Arc::new(handler) }
    }

    /// Sink that logs each submitted draft at info level.
    pub fn log() -> Self {
        Self::new(log_submission)
    }

    /// Hand a draft to the underlying handler.
    pub fn submit(&self, draft: &PatientDraft) {
        (self.handler)(draft);
    }
}

impl Default for DraftSink {
    fn default() -> Self {
        Self::log()
    }
}

impl fmt::Debug for DraftSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftSink").finish_non_exhaustive()
    }
}

/// Log line emitted by the default sink.
pub fn submission_message(draft: &PatientDraft) -> String {
    match serde_json::to_string(draft) {
        Ok(json) => format!("patient draft submitted: {json}"),
        Err(e) => format!("patient draft submitted (payload encode failed: {e})"),
    }
}

fn log_submission(draft: &PatientDraft) {
    let message = submission_message(draft);
    #[cfg(feature = "hydrate")]
    log::info!("{message}");
    #[cfg(not(feature = "hydrate"))]
    leptos::logging::log!("{message}");
}
