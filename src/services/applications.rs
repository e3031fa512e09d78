use std::str::FromStr;

use crate::domain::application::ApplicationStatus;
use crate::domain::retailer::Retailer;
use crate::domain::types::ApplicationId;
use crate::dto::applications::{ApplicationsPageData, ApplicationsQuery};
use crate::dto::confirm::ConfirmPrompt;
use crate::filters::FilterSet;
use crate::forms::applications::DecideApplicationForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ApplicationListQuery, ApplicationReader, ApplicationWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn build_list_query(filters: &FilterSet, page: usize) -> ApplicationListQuery {
    let mut list_query = ApplicationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = filters
        .value("status")
        .and_then(|s| ApplicationStatus::from_str(s).ok())
    {
        list_query = list_query.status(status);
    }
    list_query
}

/// Loads one page of onboarding applications.
pub fn load_applications_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ApplicationsQuery,
) -> ServiceResult<ApplicationsPageData>
where
    R: ApplicationReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filters = query.filters();
    let page = query.page.unwrap_or(1);

    let (total, applications) = repo.list_applications(build_list_query(&filters, page))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let applications = Paginated::new(applications, page, total_pages);

    Ok(ApplicationsPageData {
        applications,
        filters,
    })
}

/// Builds the confirmation dialog shown before an application is approved.
pub fn approve_application_prompt<R>(
    repo: &R,
    user: &AuthenticatedUser,
    application_id: i32,
) -> ServiceResult<ConfirmPrompt>
where
    R: ApplicationReader + ?Sized,
{
    let application = pending_application(repo, user, application_id)?;

    Ok(ConfirmPrompt::warning(
        "Одобрение заявки",
        format!(
            "Одобрить заявку «{}»? Будет создан активный профиль ритейлера.",
            application.retailer_name
        ),
        "Одобрить",
        "/applications/approve",
        application.id,
    ))
}

/// Builds the confirmation dialog shown before an application is rejected.
pub fn reject_application_prompt<R>(
    repo: &R,
    user: &AuthenticatedUser,
    application_id: i32,
) -> ServiceResult<ConfirmPrompt>
where
    R: ApplicationReader + ?Sized,
{
    let application = pending_application(repo, user, application_id)?;

    Ok(ConfirmPrompt::warning(
        "Отклонение заявки",
        format!("Отклонить заявку «{}»?", application.retailer_name),
        "Отклонить",
        "/applications/reject",
        application.id,
    ))
}

fn pending_application<R>(
    repo: &R,
    user: &AuthenticatedUser,
    application_id: i32,
) -> ServiceResult<crate::domain::application::OnboardingApplication>
where
    R: ApplicationReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let application_id = ApplicationId::new(application_id)?;
    let application = repo
        .get_application_by_id(application_id)?
        .ok_or(ServiceError::NotFound)?;

    // Decided applications have no pending actions left.
    if application.status != ApplicationStatus::Pending {
        return Err(ServiceError::NotFound);
    }

    Ok(application)
}

/// Approves the application, creating the retailer profile.
pub fn approve_application<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &DecideApplicationForm,
) -> ServiceResult<Retailer>
where
    R: ApplicationWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let application_id = ApplicationId::new(form.id)?;
    let retailer = repo.approve_application(application_id)?;
    Ok(retailer)
}

/// Rejects the application without creating a retailer.
pub fn reject_application<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &DecideApplicationForm,
) -> ServiceResult<()>
where
    R: ApplicationWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let application_id = ApplicationId::new(form.id)?;
    repo.reject_application(application_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::application::OnboardingApplication;
    use crate::repository::mock::MockRepository;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec![SERVICE_ACCESS_ROLE.to_string(), SERVICE_ADMIN_ROLE.to_string()],
            exp: 0,
        }
    }

    fn pending(id: i32) -> OnboardingApplication {
        OnboardingApplication {
            id,
            retailer_name: "Лавка".to_string(),
            email: "lavka@example.com".to_string(),
            status: ApplicationStatus::Pending,
            ..OnboardingApplication::default()
        }
    }

    #[test]
    fn approve_prompt_targets_pending_application() {
        let mut repo = MockRepository::new();
        repo.expect_get_application_by_id()
            .times(1)
            .returning(|id| Ok(Some(pending(id.get()))));

        let prompt = approve_application_prompt(&repo, &admin(), 4).unwrap();
        assert_eq!(prompt.action, "/applications/approve");
        assert!(prompt.message.contains("Лавка"));
    }

    #[test]
    fn prompts_reject_already_decided_applications() {
        let mut repo = MockRepository::new();
        repo.expect_get_application_by_id().times(1).returning(|id| {
            Ok(Some(OnboardingApplication {
                status: ApplicationStatus::Approved,
                ..pending(id.get())
            }))
        });

        let result = reject_application_prompt(&repo, &admin(), 4);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn approve_returns_the_created_retailer() {
        let mut repo = MockRepository::new();
        repo.expect_approve_application()
            .times(1)
            .withf(|id| id.get() == 4)
            .returning(|_| {
                Ok(Retailer {
                    id: 11,
                    name: "Лавка".to_string(),
                    ..Retailer::default()
                })
            });

        let retailer =
            approve_application(&repo, &admin(), &DecideApplicationForm { id: 4 }).unwrap();
        assert_eq!(retailer.name, "Лавка");
    }

    #[test]
    fn reject_never_creates_a_retailer() {
        let mut repo = MockRepository::new();
        repo.expect_approve_application().times(0);
        repo.expect_reject_application()
            .times(1)
            .returning(|id| Ok(OnboardingApplication {
                status: ApplicationStatus::Rejected,
                ..pending(id.get())
            }));

        reject_application(&repo, &admin(), &DecideApplicationForm { id: 4 }).unwrap();
    }
}
