//! Intake flow state machine.
//!
//! Collects a prospective customer's contact and site details across four
//! ordered steps, ending in a handoff to the chat deep link. One flow
//! instance owns one [`Inquiry`]; abandoning the flow (dropping it)
//! discards the record.
//!
//! # Transitions
//!
//! | From     | Event        | Guard                                | To       |
//! |----------|--------------|--------------------------------------|----------|
//! | Personal | Next         | name non-empty, mobile ≥ 10 chars    | Site     |
//! | Site     | Next         | city non-empty                       | Review   |
//! | Site     | Back         | —                                    | Personal |
//! | Review   | EditPersonal | —                                    | Personal |
//! | Review   | EditSite     | —                                    | Site     |
//! | Review   | Back         | —                                    | Site     |
//! | Review   | (submission) | not already submitting               | Complete |
//!
//! Any other (step, event) pair is rejected and the flow stays exactly
//! where it was. The Complete step is terminal and only reachable through
//! [`IntakeFlow::begin_submission`] / [`IntakeFlow::finish_submission`].

use thiserror::Error;
use tracing::debug;
use url::Url;

use solar_core::Inquiry;

use crate::message::{self, InquiryChannel};
use crate::validation::{self, MIN_MOBILE_DIGITS};

/// Position in the intake flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntakeStep {
    #[default]
    Personal,
    Site,
    Review,
    Complete,
}

impl IntakeStep {
    /// 1-based position, always within 1..=4.
    pub fn index(&self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Site => 2,
            Self::Review => 3,
            Self::Complete => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Site => "Site",
            Self::Review => "Review",
            Self::Complete => "Complete",
        }
    }
}

/// Navigation events the host can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Next,
    Back,
    EditPersonal,
    EditSite,
}

/// Why a transition or submission was rejected. The flow is left in place
/// in every case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("name is required")]
    MissingName,

    #[error("mobile number must be at least {MIN_MOBILE_DIGITS} digits")]
    MobileTooShort,

    #[error("mobile number must be exactly {MIN_MOBILE_DIGITS} digits")]
    InvalidMobile,

    #[error("email is required")]
    MissingEmail,

    #[error("city is required")]
    MissingCity,

    #[error("no {event:?} transition from the {step:?} step")]
    InvalidTransition { step: IntakeStep, event: FlowEvent },

    #[error("confirmation is only available from the review step")]
    NotAtReview,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("no submission in flight to complete")]
    NoSubmissionInFlight,
}

/// One lead-capture session: the record being accumulated, the current
/// step, and the single-submission guard.
#[derive(Debug, Default)]
pub struct IntakeFlow {
    inquiry: Inquiry,
    step: IntakeStep,
    is_submitting: bool,
}

impl IntakeFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn inquiry(&self) -> &Inquiry {
        &self.inquiry
    }

    /// Mutable access for the host's field bindings.
    pub fn inquiry_mut(&mut self) -> &mut Inquiry {
        &mut self.inquiry
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Applies a navigation event. On a guard failure the flow stays put
    /// and the error says which field blocked it.
    pub fn handle(
        &mut self,
        event: FlowEvent,
    ) -> Result<(), FlowError> {
        let next = self.transition(event)?;
        debug!(from = self.step.index(), to = next.index(), ?event, "intake step change");
        self.step = next;
        Ok(())
    }

    fn transition(
        &self,
        event: FlowEvent,
    ) -> Result<IntakeStep, FlowError> {
        use FlowEvent::*;
        use IntakeStep::*;

        match (self.step, event) {
            (Personal, Next) => {
                self.guard_personal()?;
                Ok(Site)
            }
            (Site, Next) => {
                self.guard_site()?;
                Ok(Review)
            }
            (Site, Back) => Ok(Personal),
            (Review, Back) | (Review, EditSite) => Ok(Site),
            (Review, EditPersonal) => Ok(Personal),
            (step, event) => Err(FlowError::InvalidTransition { step, event }),
        }
    }

    fn guard_personal(&self) -> Result<(), FlowError> {
        if !validation::is_non_empty(&self.inquiry.name) {
            return Err(FlowError::MissingName);
        }
        if self.inquiry.mobile.chars().count() < MIN_MOBILE_DIGITS {
            return Err(FlowError::MobileTooShort);
        }
        Ok(())
    }

    fn guard_site(&self) -> Result<(), FlowError> {
        if !validation::is_non_empty(&self.inquiry.city) {
            return Err(FlowError::MissingCity);
        }
        Ok(())
    }

    /// Starts the confirm handoff: marks the flow as submitting and returns
    /// the deep-link URI to open. A second call while one submission is in
    /// flight is rejected without building another payload.
    pub fn begin_submission(&mut self) -> Result<Url, FlowError> {
        if self.step != IntakeStep::Review {
            return Err(FlowError::NotAtReview);
        }
        if self.is_submitting {
            return Err(FlowError::SubmissionInFlight);
        }
        self.is_submitting = true;
        debug!("intake submission started");
        Ok(message::handoff_uri(&self.inquiry, InquiryChannel::BookingFlow))
    }

    /// Completes a submission started with [`Self::begin_submission`]:
    /// the flow reaches its terminal step. Rejected when no submission is
    /// in flight, so Complete cannot be entered from anywhere but a
    /// confirmed review.
    pub fn finish_submission(&mut self) -> Result<(), FlowError> {
        if !self.is_submitting {
            return Err(FlowError::NoSubmissionInFlight);
        }
        self.is_submitting = false;
        self.step = IntakeStep::Complete;
        debug!("intake flow complete");
        Ok(())
    }

    /// Clears a pending submission without completing it. For hosts that
    /// drop the in-flight handoff future but keep the flow alive.
    pub fn cancel_submission(&mut self) {
        self.is_submitting = false;
    }
}
