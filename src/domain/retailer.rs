use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{RetailerEmail, RetailerName, RetailerPhone, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Retailer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: RetailerStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RetailerStatus {
    #[default]
    Active,
    Suspended,
}

impl Display for RetailerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetailerStatus::Active => write!(f, "active"),
            RetailerStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for RetailerStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RetailerStatus::Active),
            "suspended" => Ok(RetailerStatus::Suspended),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewRetailer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: RetailerStatus,
}

impl NewRetailer {
    /// Normalizes and validates retailer contact details.
    pub fn try_new(
        name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        status: RetailerStatus,
    ) -> Result<Self, TypeConstraintError> {
        let name = RetailerName::new(name)?;
        let email = RetailerEmail::new(email)?;
        let phone = phone
            .filter(|p| !p.trim().is_empty())
            .map(RetailerPhone::new)
            .transpose()?;
        Ok(Self {
            name: name.into_inner(),
            email: email.into_inner(),
            phone: phone.map(RetailerPhone::into_inner),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateRetailer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: RetailerStatus,
}

impl UpdateRetailer {
    pub fn try_new(
        name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        status: RetailerStatus,
    ) -> Result<Self, TypeConstraintError> {
        let new = NewRetailer::try_new(name, email, phone, address, status)?;
        Ok(Self {
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            status: new.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("active".parse::<RetailerStatus>().unwrap(), RetailerStatus::Active);
        assert_eq!(RetailerStatus::Suspended.to_string(), "suspended");
        assert!("deleted".parse::<RetailerStatus>().is_err());
    }

    #[test]
    fn new_retailer_normalizes_contacts() {
        let retailer = NewRetailer::try_new(
            "Магазин".to_string(),
            " Shop@Example.com ".to_string(),
            Some("+7 921 123-45-67".to_string()),
            Some("  ".to_string()),
            RetailerStatus::Active,
        )
        .unwrap();
        assert_eq!(retailer.email, "shop@example.com");
        assert_eq!(retailer.phone.as_deref(), Some("+79211234567"));
        assert_eq!(retailer.address, None);
    }

    #[test]
    fn new_retailer_rejects_bad_phone() {
        let result = NewRetailer::try_new(
            "Магазин".to_string(),
            "shop@example.com".to_string(),
            Some("not a phone".to_string()),
            None,
            RetailerStatus::Active,
        );
        assert!(result.is_err());
    }
}
