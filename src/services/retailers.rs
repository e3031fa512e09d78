use std::str::FromStr;

use validator::Validate;

use crate::domain::retailer::{NewRetailer, RetailerStatus, UpdateRetailer};
use crate::domain::types::RetailerId;
use crate::dto::confirm::ConfirmPrompt;
use crate::dto::retailers::{RetailersPageData, RetailersQuery};
use crate::filters::FilterSet;
use crate::forms::retailers::{AddRetailerForm, DeleteRetailerForm, SaveRetailerForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{RetailerListQuery, RetailerReader, RetailerWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn build_list_query(filters: &FilterSet, page: usize) -> RetailerListQuery {
    let mut list_query = RetailerListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = filters.value("search") {
        list_query = list_query.search(term);
    }
    if let Some(status) = filters.value("status").and_then(|s| RetailerStatus::from_str(s).ok()) {
        list_query = list_query.status(status);
    }
    list_query
}

/// Loads one page of retailers for the list view.
pub fn load_retailers_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: RetailersQuery,
) -> ServiceResult<RetailersPageData>
where
    R: RetailerReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filters = query.filters();
    let page = query.page.unwrap_or(1);

    let (total, retailers) = repo.list_retailers(build_list_query(&filters, page))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let retailers = Paginated::new(retailers, page, total_pages);

    Ok(RetailersPageData { retailers, filters })
}

pub fn add_retailer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddRetailerForm,
) -> ServiceResult<()>
where
    R: RetailerWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let new_retailer = NewRetailer::try_from(form)?;
    repo.create_retailer(&new_retailer)?;
    Ok(())
}

pub fn save_retailer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveRetailerForm,
) -> ServiceResult<()>
where
    R: RetailerWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let retailer_id = RetailerId::new(form.id)?;
    let updates = UpdateRetailer::try_from(form)?;
    repo.update_retailer(retailer_id, &updates)?;
    Ok(())
}

/// Builds the confirmation dialog shown before a retailer is deleted.
pub fn delete_retailer_prompt<R>(
    repo: &R,
    user: &AuthenticatedUser,
    retailer_id: i32,
) -> ServiceResult<ConfirmPrompt>
where
    R: RetailerReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let retailer_id = RetailerId::new(retailer_id)?;
    let retailer = repo
        .get_retailer_by_id(retailer_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(ConfirmPrompt::delete(
        "Удаление ритейлера",
        format!(
            "Удалить ритейлера «{}»? Его платежи останутся в истории, но профиль будет недоступен.",
            retailer.name
        ),
        "/retailers/delete",
        retailer.id,
    ))
}

/// Deletes the retailer; refuses when payment history references it.
pub fn delete_retailer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &DeleteRetailerForm,
) -> ServiceResult<()>
where
    R: RetailerWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let retailer_id = RetailerId::new(form.id)?;
    repo.delete_retailer(retailer_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::retailer::Retailer;
    use crate::repository::mock::MockRepository;
    use crate::repository::errors::RepositoryError;

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
    fn load_page_parses_status_filter() {
        let mut repo = MockRepository::new();
        repo.expect_list_retailers()
            .times(1)
            .withf(|query| query.status == Some(RetailerStatus::Suspended))
            .returning(|_| Ok((0, vec![])));

        let query = RetailersQuery {
            search: None,
            status: Some("suspended".to_string()),
            page: None,
        };
        load_retailers_page(&repo, &admin(), query).unwrap();
    }

    #[test]
    fn delete_surfaces_constraint_violations() {
        let mut repo = MockRepository::new();
        repo.expect_delete_retailer().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "payments reference retailer".to_string(),
            ))
        });

        let result = delete_retailer(&repo, &admin(), &DeleteRetailerForm { id: 1 });
        assert!(matches!(
            result,
            Err(ServiceError::Repository(
                RepositoryError::ConstraintViolation(_)
            ))
        ));
    }

    #[test]
    fn delete_prompt_mentions_the_retailer() {
        let mut repo = MockRepository::new();
        repo.expect_get_retailer_by_id().times(1).returning(|id| {
            Ok(Some(Retailer {
                id: id.get(),
                name: "Лавка".to_string(),
                ..Retailer::default()
            }))
        });

        let prompt = delete_retailer_prompt(&repo, &admin(), 2).unwrap();
        assert!(prompt.message.contains("Лавка"));
        assert_eq!(prompt.action, "/retailers/delete");
    }
}
