//! Field validation for intake submissions.

use std::sync::OnceLock;

use regex::Regex;

use solar_core::Inquiry;

use crate::flow::FlowError;

/// Minimum digits for a mobile number to pass the step guard.
pub const MIN_MOBILE_DIGITS: usize = 10;

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"))
}

/// True when the field has content beyond whitespace.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True for an exactly ten-digit mobile number, the single-page form's
/// submit gate. The step guard in [`crate::flow`] only checks length.
pub fn is_valid_mobile(value: &str) -> bool {
    mobile_regex().is_match(value)
}

/// Gate for the single-page callback form, which collects everything on
/// one screen: all contact fields are required and the mobile number must
/// match the strict pattern.
pub fn validate_form(inquiry: &Inquiry) -> Result<(), FlowError> {
    if !is_non_empty(&inquiry.name) {
        return Err(FlowError::MissingName);
    }
    if !is_valid_mobile(&inquiry.mobile) {
        return Err(FlowError::InvalidMobile);
    }
    if !is_non_empty(&inquiry.email) {
        return Err(FlowError::MissingEmail);
    }
    if !is_non_empty(&inquiry.city) {
        return Err(FlowError::MissingCity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_inquiry() -> Inquiry {
        Inquiry {
            name: "Rahul Sharma".to_string(),
            mobile: "9876543210".to_string(),
            email: "rahul@example.com".to_string(),
            city: "Lucknow".to_string(),
            monthly_bill: "3000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_mobile_is_exactly_ten_digits() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432101"));
        assert!(!is_valid_mobile("98765o4321"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn non_empty_ignores_whitespace() {
        assert!(is_non_empty("Lucknow"));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   "));
    }

    #[test]
    fn validate_form_accepts_a_complete_inquiry() {
        assert_eq!(validate_form(&complete_inquiry()), Ok(()));
    }

    #[test]
    fn validate_form_requires_email() {
        let mut inquiry = complete_inquiry();
        inquiry.email.clear();

        assert_eq!(validate_form(&inquiry), Err(FlowError::MissingEmail));
    }

    #[test]
    fn validate_form_rejects_malformed_mobile() {
        let mut inquiry = complete_inquiry();
        inquiry.mobile = "98-7654321".to_string();

        assert_eq!(validate_form(&inquiry), Err(FlowError::InvalidMobile));
    }
}
