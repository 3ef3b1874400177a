use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a pot. Informational only, reports ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotStatus {
    #[default]
    Active,
    Dormant,
    Closed,
}

impl PotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Dormant => "dormant",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for PotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "dormant" => Ok(Self::Dormant),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("Unknown pot status: {}", s)),
        }
    }
}

pub const DEFAULT_CURRENCY: &str = "GBP";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pot {
    pub id: i64,
    pub provider_id: Option<i64>,
    pub name: String,
    pub currency: String,
    pub status: PotStatus,
    pub notes: Option<String>,
    pub plan_number: Option<String>,
    pub scheme_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPot {
    pub provider_id: Option<i64>,
    pub name: String,
    pub currency: String,
    pub status: PotStatus,
    pub notes: Option<String>,
    pub plan_number: Option<String>,
    pub scheme_number: Option<String>,
}
