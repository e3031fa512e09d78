use validator::Validate;

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoriesPageData, CategoriesQuery};
use crate::dto::confirm::ConfirmPrompt;
use crate::filters::FilterSet;
use crate::forms::categories::{AddCategoryForm, DeleteCategoryForm, SaveCategoryForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryListQuery, CategoryReader, CategoryWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Translates the page filter state into a repository query.
fn build_list_query(filters: &FilterSet, page: usize) -> CategoryListQuery {
    let mut list_query = CategoryListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
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

/// Loads one page of categories for the list view.
pub fn load_categories_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: CategoriesQuery,
) -> ServiceResult<CategoriesPageData>
where
    R: CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filters = query.filters();
    let page = query.page.unwrap_or(1);

    let (total, categories) = repo.list_categories(build_list_query(&filters, page))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let categories = Paginated::new(categories, page, total_pages);

    Ok(CategoriesPageData {
        categories,
        filters,
    })
}

/// Validates the add-category form and persists a new category.
pub fn add_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddCategoryForm,
) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let new_category = NewCategory::try_from(form)?;
    repo.create_category(&new_category)?;
    Ok(())
}

/// Validates the save-category form and applies the updates.
pub fn save_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveCategoryForm,
) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let category_id = CategoryId::new(form.id)?;
    let updates = UpdateCategory::try_from(form)?;
    repo.update_category(category_id, &updates)?;
    Ok(())
}

/// Builds the confirmation dialog shown before a category is deleted.
pub fn delete_category_prompt<R>(
    repo: &R,
    user: &AuthenticatedUser,
    category_id: i32,
) -> ServiceResult<ConfirmPrompt>
where
    R: CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let category_id = CategoryId::new(category_id)?;
    let category = repo
        .get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(ConfirmPrompt::delete(
        "Удаление категории",
        format!(
            "Удалить категорию «{}»? Это действие нельзя отменить.",
            category.name
        ),
        "/categories/delete",
        category.id,
    ))
}

/// Deletes the category after the dialog was confirmed.
pub fn delete_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &DeleteCategoryForm,
) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let category_id = CategoryId::new(form.id)?;
    repo.delete_category(category_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::category::Category;
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

    fn viewer() -> AuthenticatedUser {
        AuthenticatedUser {
            roles: vec![SERVICE_ACCESS_ROLE.to_string()],
            ..admin()
        }
    }

    #[test]
    fn load_page_applies_search_and_status_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_categories()
            .times(1)
            .withf(|query| {
                query.search.as_deref() == Some("обувь") && query.is_active == Some(true)
            })
            .returning(|_| Ok((1, vec![Category::default()])));

        let query = CategoriesQuery {
            search: Some("обувь".to_string()),
            status: Some("active".to_string()),
            page: None,
        };
        let data = load_categories_page(&repo, &viewer(), query).unwrap();
        assert_eq!(data.categories.items.len(), 1);
        assert_eq!(data.filters.value("search"), Some("обувь"));
    }

    #[test]
    fn load_page_requires_access_role() {
        let repo = MockRepository::new();
        let user = AuthenticatedUser {
            roles: vec![],
            ..admin()
        };
        let result = load_categories_page(&repo, &user, CategoriesQuery::default());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn add_category_requires_admin_role() {
        let mut repo = MockRepository::new();
        repo.expect_create_category().times(0);

        let form = AddCategoryForm {
            name: "Обувь".to_string(),
            slug: None,
        };
        let result = add_category(&repo, &viewer(), form);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn delete_prompt_targets_the_requested_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id().times(1).returning(|id| {
            Ok(Some(Category {
                id: id.get(),
                name: "Обувь".to_string(),
                ..Category::default()
            }))
        });

        let prompt = delete_category_prompt(&repo, &admin(), 7).unwrap();
        assert_eq!(prompt.id, 7);
        assert_eq!(prompt.action, "/categories/delete");
        assert!(prompt.message.contains("Обувь"));
    }

    #[test]
    fn delete_prompt_fails_for_missing_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = delete_category_prompt(&repo, &admin(), 7);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn delete_is_not_called_without_confirmation() {
        // Cancelling the dialog issues no request, so the writer must stay
        // untouched when only the prompt is built.
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|id| Ok(Some(Category { id: id.get(), ..Category::default() })));
        repo.expect_delete_category().times(0);

        delete_category_prompt(&repo, &admin(), 3).unwrap();
    }

    #[test]
    fn delete_removes_the_category() {
        let mut repo = MockRepository::new();
        repo.expect_delete_category()
            .times(1)
            .withf(|id| id.get() == 3)
            .returning(|_| Ok(()));

        delete_category(&repo, &admin(), &DeleteCategoryForm { id: 3 }).unwrap();
    }
}
