use validator::Validate;

use crate::domain::interest::{NewInterest, UpdateInterest};
use crate::domain::types::InterestId;
use crate::dto::confirm::ConfirmPrompt;
use crate::dto::interests::{InterestsPageData, InterestsQuery};
use crate::filters::FilterSet;
use crate::forms::interests::{AddInterestForm, DeleteInterestForm, SaveInterestForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{InterestListQuery, InterestReader, InterestWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn build_list_query(filters: &FilterSet, page: usize) -> InterestListQuery {
    let mut list_query = InterestListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = filters.value("search") {
        list_query = list_query.search(term);
    }
    match filters.value("status") {
        Some("active") => list_query = list_query.active(true),
        Some("inactive") => list_query = list_query.active(false),
        _ => {}
    }
    list_query
}

/// Loads one page of interests for the list view.
pub fn load_interests_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: InterestsQuery,
) -> ServiceResult<InterestsPageData>
where
    R: InterestReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filters = query.filters();
    let page = query.page.unwrap_or(1);

    let (total, interests) = repo.list_interests(build_list_query(&filters, page))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let interests = Paginated::new(interests, page, total_pages);

    Ok(InterestsPageData { interests, filters })
}

pub fn add_interest<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddInterestForm,
) -> ServiceResult<()>
where
    R: InterestWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let new_interest = NewInterest::try_from(form)?;
    repo.create_interest(&new_interest)?;
    Ok(())
}

pub fn save_interest<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveInterestForm,
) -> ServiceResult<()>
where
    R: InterestWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let interest_id = InterestId::new(form.id)?;
    let updates = UpdateInterest::try_from(form)?;
    repo.update_interest(interest_id, &updates)?;
    Ok(())
}

/// Builds the confirmation dialog shown before an interest is deleted.
pub fn delete_interest_prompt<R>(
    repo: &R,
    user: &AuthenticatedUser,
    interest_id: i32,
) -> ServiceResult<ConfirmPrompt>
where
    R: InterestReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let interest_id = InterestId::new(interest_id)?;
    let interest = repo
        .get_interest_by_id(interest_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(ConfirmPrompt::delete(
        "Удаление интереса",
        format!(
            "Удалить интерес «{}»? Это действие нельзя отменить.",
            interest.name
        ),
        "/interests/delete",
        interest.id,
    ))
}

pub fn delete_interest<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &DeleteInterestForm,
) -> ServiceResult<()>
where
    R: InterestWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let interest_id = InterestId::new(form.id)?;
    repo.delete_interest(interest_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::interest::Interest;
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

    #[test]
    fn load_page_ignores_unknown_status_values() {
        let mut repo = MockRepository::new();
        repo.expect_list_interests()
            .times(1)
            .withf(|query| query.is_active.is_none())
            .returning(|_| Ok((0, vec![])));

        let query = InterestsQuery {
            search: None,
            status: Some("archived".to_string()),
            page: None,
        };
        load_interests_page(&repo, &admin(), query).unwrap();
    }

    #[test]
    fn delete_prompt_then_confirmed_delete() {
        let mut repo = MockRepository::new();
        repo.expect_get_interest_by_id().times(1).returning(|id| {
            Ok(Some(Interest {
                id: id.get(),
                name: "Спорт".to_string(),
                ..Interest::default()
            }))
        });
        repo.expect_delete_interest()
            .times(1)
            .withf(|id| id.get() == 5)
            .returning(|_| Ok(()));

        let prompt = delete_interest_prompt(&repo, &admin(), 5).unwrap();
        assert_eq!(prompt.action, "/interests/delete");

        delete_interest(&repo, &admin(), &DeleteInterestForm { id: prompt.id }).unwrap();
    }
}
