mod bill_range;
mod inquiry;
mod roof_type;
mod solar_estimate;

pub use bill_range::BillRange;
pub use inquiry::Inquiry;
pub use roof_type::RoofType;
pub use solar_estimate::SolarEstimate;
