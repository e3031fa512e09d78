use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Payment record as captured by the platform billing pipeline. The admin
/// panel only reads these; mutations happen elsewhere.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Payment {
    pub id: i32,
    pub retailer_id: i32,
    pub reference: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Wallet,
    BankTransfer,
    Cash,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Wallet => write!(f, "wallet"),
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
            PaymentMethod::Cash => write!(f, "cash"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "cash" => Ok(PaymentMethod::Cash),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPayment {
    pub retailer_id: i32,
    pub reference: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_round_trips_through_strings() {
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert_eq!(PaymentMethod::Wallet.to_string(), "wallet");
        assert!("crypto".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(
            "refunded".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Refunded
        );
        assert_eq!(PaymentStatus::Failed.to_string(), "failed");
    }
}
