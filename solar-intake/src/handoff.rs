//! Submission handoff to the external link opener.
//!
//! The flow's Confirm runs through here: build the deep link, hold the
//! artificial pre-handoff delay, then pass the link to the host's opener.
//! Whether the opened context actually reaches the recipient is not
//! observable from this side; once the delay elapses the handoff is
//! treated as done.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;
use url::Url;

use solar_core::Inquiry;

use crate::flow::{FlowError, IntakeFlow};
use crate::message::{self, InquiryChannel};
use crate::validation;

/// Artificial pause before the deep link is handed to the opener, giving
/// the submitting indicator time to render.
pub const SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

/// External collaborator that opens the produced deep link in a new
/// browsing context.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    async fn open(
        &self,
        url: &Url,
    ) -> Result<()>;
}

/// Drives a Confirm from the review step through to completion.
///
/// The delay timer lives inside this future, so dropping the future
/// cancels the timer along with the submission (the flow's
/// `cancel_submission` then clears the guard). An opener failure is
/// logged and not surfaced; the flow still completes.
pub async fn submit(
    flow: &mut IntakeFlow,
    opener: &dyn LinkOpener,
) -> Result<(), FlowError> {
    let url = flow.begin_submission()?;
    tokio::time::sleep(SUBMISSION_DELAY).await;
    if let Err(error) = opener.open(&url).await {
        warn!(?error, "link opener failed; completing the flow anyway");
    }
    flow.finish_submission()?;
    Ok(())
}

/// One-shot submission for the single-page callback form: validates the
/// record, builds the website-form payload and hands it off after the
/// same delay. Returns the URI that was opened.
pub async fn submit_form(
    inquiry: &Inquiry,
    opener: &dyn LinkOpener,
) -> Result<Url, FlowError> {
    validation::validate_form(inquiry)?;
    let url = message::handoff_uri(inquiry, InquiryChannel::WebsiteForm);
    tokio::time::sleep(SUBMISSION_DELAY).await;
    if let Err(error) = opener.open(&url).await {
        warn!(?error, "link opener failed");
    }
    Ok(url)
}
