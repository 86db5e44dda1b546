//! Handoff payload construction.
//!
//! Renders a collected [`Inquiry`] into the fixed labeled-line message
//! template, percent-encodes it and appends it to the chat deep link.
//! Producing that URI is where this crate's responsibility ends; opening
//! it in a browsing context belongs to the host environment.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use solar_core::Inquiry;

/// Fixed recipient for the chat handoff.
pub const WHATSAPP_RECIPIENT: &str = "919897147441";

/// Longest a single field may be after sanitization.
pub const MAX_FIELD_LEN: usize = 500;

/// Characters stripped from free-text fields before templating.
const DENYLIST: [char; 5] = ['<', '>', '"', '\'', '&'];

/// Query encoding matching `encodeURIComponent`: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where an inquiry originated; selects the message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryChannel {
    /// The four-step booking popup.
    BookingFlow,
    /// The single-page callback form.
    WebsiteForm,
}

impl InquiryChannel {
    fn header(&self) -> &'static str {
        match self {
            Self::BookingFlow => "*New Solar Booking Request (Popup)*",
            Self::WebsiteForm => "*New Solar Inquiry (Website Form)*",
        }
    }
}

/// Strips the `< > " ' &` denylist, trims surrounding whitespace and
/// truncates to [`MAX_FIELD_LEN`] characters.
///
/// This is a payload-injection guard for the labeled message lines, not
/// general input sanitization.
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !DENYLIST.contains(c)).collect();
    stripped.trim().chars().take(MAX_FIELD_LEN).collect()
}

/// Renders the labeled multi-line message for one inquiry.
///
/// The booking flow includes the email line only when an address was
/// given; the website form always carries it and appends any comments.
pub fn format_message(
    inquiry: &Inquiry,
    channel: InquiryChannel,
) -> String {
    let mut text = format!("{}\n\n", channel.header());
    text.push_str(&format!("*Name:* {}\n", sanitize(&inquiry.name)));
    text.push_str(&format!("*Mobile:* {}\n", sanitize(&inquiry.mobile)));

    match channel {
        InquiryChannel::BookingFlow => {
            if !inquiry.email.is_empty() {
                text.push_str(&format!("*Email:* {}\n", sanitize(&inquiry.email)));
            }
            text.push_str(&format!("*City:* {}\n", sanitize(&inquiry.city)));
            text.push_str(&format!(
                "*Monthly Bill:* ₹{}\n",
                sanitize(&inquiry.monthly_bill)
            ));
            text.push_str(&format!("*Roof Type:* {}", inquiry.roof_type.as_str()));
        }
        InquiryChannel::WebsiteForm => {
            text.push_str(&format!("*Email:* {}\n", sanitize(&inquiry.email)));
            text.push_str(&format!("*City:* {}\n", sanitize(&inquiry.city)));
            text.push_str(&format!(
                "*Monthly Bill:* ₹{}\n",
                sanitize(&inquiry.monthly_bill)
            ));
            text.push_str(&format!("*Roof Type:* {}\n", inquiry.roof_type.as_str()));
            if !inquiry.comments.is_empty() {
                text.push_str(&format!("*Comments:* {}", sanitize(&inquiry.comments)));
            }
        }
    }

    text
}

/// Builds the chat deep link carrying the formatted inquiry.
pub fn handoff_uri(
    inquiry: &Inquiry,
    channel: InquiryChannel,
) -> Url {
    let text = format_message(inquiry, channel);
    let encoded = utf8_percent_encode(&text, COMPONENT);
    let raw = format!("https://wa.me/{WHATSAPP_RECIPIENT}?text={encoded}");
    // Component-encoded text cannot break URL syntax.
    Url::parse(&raw).expect("deep link is well formed")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use solar_core::RoofType;

    use super::*;

    fn booking_inquiry() -> Inquiry {
        Inquiry {
            name: "Rahul Sharma".to_string(),
            mobile: "9876543210".to_string(),
            city: "Lucknow".to_string(),
            monthly_bill: "3000".to_string(),
            roof_type: RoofType::Concrete,
            ..Default::default()
        }
    }

    // =========================================================================
    // sanitize tests
    // =========================================================================

    #[test]
    fn sanitize_strips_markup_characters() {
        let result = sanitize("<script>\"test\"</script>");

        assert_eq!(result, "scripttest/script");
    }

    #[test]
    fn sanitize_trims_after_stripping() {
        let result = sanitize("  <b> Rahul </b>  ");

        assert_eq!(result, "b Rahul /b");
    }

    #[test]
    fn sanitize_truncates_to_max_field_len() {
        let long = "a".repeat(MAX_FIELD_LEN + 100);

        let result = sanitize(&long);

        assert_eq!(result.chars().count(), MAX_FIELD_LEN);
    }

    #[test]
    fn sanitize_keeps_plain_text_unchanged() {
        assert_eq!(sanitize("Lucknow"), "Lucknow");
    }

    // =========================================================================
    // format_message tests
    // =========================================================================

    #[test]
    fn booking_message_omits_missing_email() {
        let text = format_message(&booking_inquiry(), InquiryChannel::BookingFlow);

        assert_eq!(
            text,
            "*New Solar Booking Request (Popup)*\n\n\
             *Name:* Rahul Sharma\n\
             *Mobile:* 9876543210\n\
             *City:* Lucknow\n\
             *Monthly Bill:* ₹3000\n\
             *Roof Type:* Concrete"
        );
    }

    #[test]
    fn booking_message_includes_given_email() {
        let mut inquiry = booking_inquiry();
        inquiry.email = "rahul@example.com".to_string();

        let text = format_message(&inquiry, InquiryChannel::BookingFlow);

        assert!(text.contains("*Email:* rahul@example.com\n"));
    }

    #[test]
    fn website_form_message_always_carries_email_line() {
        let text = format_message(&booking_inquiry(), InquiryChannel::WebsiteForm);

        assert!(text.starts_with("*New Solar Inquiry (Website Form)*\n\n"));
        assert!(text.contains("*Email:* \n"));
    }

    #[test]
    fn website_form_message_appends_comments_when_present() {
        let mut inquiry = booking_inquiry();
        inquiry.comments = "Call after 6pm".to_string();

        let text = format_message(&inquiry, InquiryChannel::WebsiteForm);

        assert!(text.ends_with("*Roof Type:* Concrete\n*Comments:* Call after 6pm"));
    }

    #[test]
    fn message_fields_are_sanitized() {
        let mut inquiry = booking_inquiry();
        inquiry.name = "<script>\"test\"</script>".to_string();

        let text = format_message(&inquiry, InquiryChannel::BookingFlow);

        assert!(text.contains("*Name:* scripttest/script\n"));
        assert!(!text.contains('<'));
    }

    // =========================================================================
    // handoff_uri tests
    // =========================================================================

    #[test]
    fn handoff_uri_encodes_the_full_template() {
        let url = handoff_uri(&booking_inquiry(), InquiryChannel::BookingFlow);

        assert_eq!(
            url.as_str(),
            "https://wa.me/919897147441?text=\
             *New%20Solar%20Booking%20Request%20(Popup)*%0A%0A\
             *Name%3A*%20Rahul%20Sharma%0A\
             *Mobile%3A*%209876543210%0A\
             *City%3A*%20Lucknow%0A\
             *Monthly%20Bill%3A*%20%E2%82%B93000%0A\
             *Roof%20Type%3A*%20Concrete"
        );
    }

    #[test]
    fn handoff_uri_targets_the_fixed_recipient() {
        let url = handoff_uri(&booking_inquiry(), InquiryChannel::BookingFlow);

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/919897147441");
    }
}
