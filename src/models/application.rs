use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::application::{
    NewApplication as DomainNewApplication, OnboardingApplication as DomainApplication,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::onboarding_applications)]
/// Diesel model for [`crate::domain::application::OnboardingApplication`].
pub struct OnboardingApplication {
    pub id: i32,
    pub retailer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub submitted_at: NaiveDateTime,
    pub decided_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::onboarding_applications)]
/// Insertable form of [`OnboardingApplication`].
pub struct NewApplication<'a> {
    pub retailer_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub status: String,
}

impl TryFrom<OnboardingApplication> for DomainApplication {
    type Error = TypeConstraintError;

    fn try_from(application: OnboardingApplication) -> Result<Self, Self::Error> {
        Ok(Self {
            id: application.id,
            retailer_name: application.retailer_name,
            email: application.email,
            phone: application.phone,
            status: application.status.parse()?,
            submitted_at: application.submitted_at,
            decided_at: application.decided_at,
        })
    }
}

impl<'a> From<&'a DomainNewApplication> for NewApplication<'a> {
    fn from(application: &'a DomainNewApplication) -> Self {
        Self {
            retailer_name: application.retailer_name.as_str(),
            email: application.email.as_str(),
            phone: application.phone.as_deref(),
            status: crate::domain::application::ApplicationStatus::Pending.to_string(),
        }
    }
}
