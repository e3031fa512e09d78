use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::retailer::{NewRetailer, RetailerStatus};
use crate::domain::types::TypeConstraintError;

/// Onboarding request submitted by a retailer awaiting moderation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct OnboardingApplication {
    pub id: i32,
    pub retailer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: NaiveDateTime,
    pub decided_at: Option<NaiveDateTime>,
}

impl OnboardingApplication {
    /// Retailer record created when the application is approved.
    pub fn to_new_retailer(&self) -> Result<NewRetailer, TypeConstraintError> {
        NewRetailer::try_new(
            self.retailer_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            None,
            RetailerStatus::Active,
        )
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewApplication {
    pub retailer_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_application_maps_to_active_retailer() {
        let application = OnboardingApplication {
            retailer_name: "Лавка".to_string(),
            email: "Lavka@Example.com".to_string(),
            phone: None,
            ..OnboardingApplication::default()
        };
        let retailer = application.to_new_retailer().unwrap();
        assert_eq!(retailer.email, "lavka@example.com");
        assert_eq!(retailer.status, RetailerStatus::Active);
    }

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!(
            "pending".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Pending
        );
        assert!("archived".parse::<ApplicationStatus>().is_err());
    }
}
