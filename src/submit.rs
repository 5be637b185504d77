use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use thiserror::Error;
use web_sys::AbortController;

use crate::model::ExpenseSubmission;

pub const MSG_REJECTED: &str = "Error submitting data. Please try again.";
pub const MSG_UNREACHABLE: &str = "Could not connect to server. Check your internet connection.";

/// Upper bound on how long a single submission may stay in flight before the
/// request is aborted and reported as a connection failure.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Where and how submissions are delivered. Built once at startup and handed
/// to the form, so nothing below reads a global endpoint.
#[derive(Clone, PartialEq)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_ms: u32,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: SUBMIT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("webhook rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("request did not complete: {0}")]
    Transport(#[from] gloo_net::Error),
}

/// Whether a submission is currently in flight. The submit button is disabled
/// while `Submitting`, which is what keeps at most one request outstanding.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// How a finished submission attempt is reported to the user.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
    Unreachable,
}

impl SubmitOutcome {
    pub fn of(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Accepted,
            Err(SubmitError::Rejected { .. }) => SubmitOutcome::Rejected,
            Err(SubmitError::Transport(_)) => SubmitOutcome::Unreachable,
        }
    }

    /// Body text for the error modal; `None` for the success case.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Accepted => None,
            SubmitOutcome::Rejected => Some(MSG_REJECTED),
            SubmitOutcome::Unreachable => Some(MSG_UNREACHABLE),
        }
    }

    /// Only an accepted submission resets the form; on failure the values
    /// stay put so the user can correct and resubmit.
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// POSTs one submission as JSON to the configured webhook. Any 2xx status is
/// success; the response body is never read. A timer aborts the request after
/// `timeout_ms` so a hung connection cannot keep the form disabled forever.
pub async fn deliver(
    config: &WebhookConfig,
    submission: &ExpenseSubmission,
) -> Result<(), SubmitError> {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    // Dropping the handle on return cancels the pending abort.
    let _abort_timer = controller.map(|c| Timeout::new(config.timeout_ms, move || c.abort()));

    let response = Request::post(&config.url)
        .abort_signal(signal.as_ref())
        .json(submission)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status(),
        })
    }
}
