pub mod flow;
pub mod handoff;
pub mod logging;
pub mod message;
pub mod validation;

pub use flow::{FlowError, FlowEvent, IntakeFlow, IntakeStep};
pub use handoff::{LinkOpener, SUBMISSION_DELAY, submit, submit_form};
pub use message::{InquiryChannel, format_message, handoff_uri, sanitize};
