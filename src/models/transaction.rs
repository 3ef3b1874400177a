use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of cash movement recorded against a pot.
///
/// The stored amount already carries the direction (money in is positive,
/// fees, withdrawals and transfers out are negative); the type only decides
/// which report totals an amount counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Contribution,
    EmployerMatch,
    TransferIn,
    Rebate,
    TransferOut,
    Withdrawal,
    Fee,
    Adjustment,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contribution => "contribution",
            Self::EmployerMatch => "employer_match",
            Self::TransferIn => "transfer_in",
            Self::Rebate => "rebate",
            Self::TransferOut => "transfer_out",
            Self::Withdrawal => "withdrawal",
            Self::Fee => "fee",
            Self::Adjustment => "adjustment",
        }
    }

    pub fn all() -> &'static [TransactionType] {
        &[
            Self::Contribution,
            Self::EmployerMatch,
            Self::TransferIn,
            Self::Rebate,
            Self::TransferOut,
            Self::Withdrawal,
            Self::Fee,
            Self::Adjustment,
        ]
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contribution" => Ok(Self::Contribution),
            "employer_match" => Ok(Self::EmployerMatch),
            "transfer_in" => Ok(Self::TransferIn),
            "rebate" => Ok(Self::Rebate),
            "transfer_out" => Ok(Self::TransferOut),
            "withdrawal" => Ok(Self::Withdrawal),
            "fee" => Ok(Self::Fee),
            "adjustment" => Ok(Self::Adjustment),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub pot_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub pot_id: i64,
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub note: Option<String>,
}
