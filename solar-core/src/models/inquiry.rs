use serde::{Deserialize, Serialize};

use super::RoofType;

/// A prospective customer's contact and site details, accumulated across
/// the intake steps. Discarded when the flow completes or is abandoned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub mobile: String,
    /// Empty string means not provided.
    pub email: String,
    pub city: String,
    /// Bill amount as typed; formatting is left to the payload template.
    pub monthly_bill: String,
    pub roof_type: RoofType,
    pub comments: String,
}

impl Inquiry {
    /// First word of the name, used to address the lead on completion.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}
