use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofType {
    #[default]
    Concrete,
    TinShed,
    Tiled,
    Other,
}

impl RoofType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concrete => "Concrete",
            Self::TinShed => "Tin Shed",
            Self::Tiled => "Tiled",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Concrete" => Some(Self::Concrete),
            "Tin Shed" => Some(Self::TinShed),
            "Tiled" => Some(Self::Tiled),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}
