use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An observed total balance of a pot on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: i64,
    pub pot_id: i64,
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub source: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSnapshot {
    pub pot_id: i64,
    pub date: NaiveDate,
    pub balance: Decimal,
    pub source: Option<String>,
    pub note: Option<String>,
}
