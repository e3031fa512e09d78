use chrono::Utc;
use diesel::prelude::*;

use crate::domain::application::{ApplicationStatus, OnboardingApplication};
use crate::domain::retailer::Retailer;
use crate::domain::types::ApplicationId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ApplicationListQuery, ApplicationReader, ApplicationWriter, DieselRepository,
};

impl ApplicationReader for DieselRepository {
    fn get_application_by_id(
        &self,
        id: ApplicationId,
    ) -> RepositoryResult<Option<OnboardingApplication>> {
        use crate::models::application::OnboardingApplication as DbApplication;
        use crate::schema::onboarding_applications;

        let mut conn = self.conn()?;
        let application = onboarding_applications::table
            .find(id.get())
            .first::<DbApplication>(&mut conn)
            .optional()?;

        application
            .map(|a| a.try_into().map_err(RepositoryError::from))
            .transpose()
    }

    fn list_applications(
        &self,
        query: ApplicationListQuery,
    ) -> RepositoryResult<(usize, Vec<OnboardingApplication>)> {
        use crate::models::application::OnboardingApplication as DbApplication;
        use crate::schema::onboarding_applications;

        let mut conn = self.conn()?;

        let build = |query: &ApplicationListQuery| {
            let mut stmt = onboarding_applications::table.into_boxed();
            if let Some(status) = query.status {
                stmt = stmt.filter(onboarding_applications::status.eq(status.to_string()));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(onboarding_applications::submitted_at.desc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = stmt
            .load::<DbApplication>(&mut conn)?
            .into_iter()
            .map(|a| a.try_into().map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<OnboardingApplication>>>()?;

        Ok((total as usize, items))
    }
}

impl ApplicationWriter for DieselRepository {
    fn approve_application(&self, application_id: ApplicationId) -> RepositoryResult<Retailer> {
        use crate::models::application::OnboardingApplication as DbApplication;
        use crate::models::retailer::{NewRetailer as DbNewRetailer, Retailer as DbRetailer};
        use crate::schema::{onboarding_applications, retailers};

        let mut conn = self.conn()?;

        conn.transaction::<Retailer, RepositoryError, _>(|conn| {
            let application: OnboardingApplication = onboarding_applications::table
                .find(application_id.get())
                .first::<DbApplication>(conn)?
                .try_into()?;

            if application.status != ApplicationStatus::Pending {
                return Err(RepositoryError::ConstraintViolation(
                    "application already decided".to_string(),
                ));
            }

            let new_retailer = application
                .to_new_retailer()
                .map_err(RepositoryError::from)?;
            let insertable: DbNewRetailer = (&new_retailer).into();
            let retailer: Retailer = diesel::insert_into(retailers::table)
                .values(&insertable)
                .get_result::<DbRetailer>(conn)?
                .try_into()?;

            diesel::update(onboarding_applications::table.find(application_id.get()))
                .set((
                    onboarding_applications::status
                        .eq(ApplicationStatus::Approved.to_string()),
                    onboarding_applications::decided_at.eq(Some(Utc::now().naive_utc())),
                ))
                .execute(conn)?;

            Ok(retailer)
        })
    }

    fn reject_application(
        &self,
        application_id: ApplicationId,
    ) -> RepositoryResult<OnboardingApplication> {
        use crate::models::application::OnboardingApplication as DbApplication;
        use crate::schema::onboarding_applications;

        let mut conn = self.conn()?;

        let updated = diesel::update(
            onboarding_applications::table
                .find(application_id.get())
                .filter(
                    onboarding_applications::status.eq(ApplicationStatus::Pending.to_string()),
                ),
        )
        .set((
            onboarding_applications::status.eq(ApplicationStatus::Rejected.to_string()),
            onboarding_applications::decided_at.eq(Some(Utc::now().naive_utc())),
        ))
        .get_result::<DbApplication>(&mut conn)?;

        Ok(updated.try_into()?)
    }
}
