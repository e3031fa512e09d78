use std::str::FromStr;

use validator::Validate;

use crate::domain::template::{NewTemplate, TemplateTag, UpdateTemplate};
use crate::domain::types::TemplateId;
use crate::dto::confirm::ConfirmPrompt;
use crate::dto::templates::{TemplateEditorData, TemplatesPageData, TemplatesQuery};
use crate::filters::FilterSet;
use crate::forms::templates::{AddTemplateForm, DeleteTemplateForm, SaveTemplateForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{TemplateListQuery, TemplateReader, TemplateWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn build_list_query(filters: &FilterSet, page: usize) -> TemplateListQuery {
    let mut list_query = TemplateListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(tag) = filters.value("tag").and_then(|t| TemplateTag::from_str(t).ok()) {
        list_query = list_query.tag(tag);
    }
    match filters.value("status") {
        Some("active") => list_query = list_query.active(true),
        Some("inactive") => list_query = list_query.active(false),
        _ => {}
    }
    list_query
}

/// Loads one page of notification templates.
pub fn load_templates_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: TemplatesQuery,
) -> ServiceResult<TemplatesPageData>
where
    R: TemplateReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filters = query.filters();
    let page = query.page.unwrap_or(1);

    let (total, templates) = repo.list_templates(build_list_query(&filters, page))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let templates = Paginated::new(templates, page, total_pages);

    Ok(TemplatesPageData { templates, filters })
}

/// Loads an existing template into the editor modal, placeholder chips
/// included.
pub fn get_template_editor<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
) -> ServiceResult<TemplateEditorData>
where
    R: TemplateReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let template_id = TemplateId::new(template_id)?;
    let template = repo
        .get_template_by_id(template_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(TemplateEditorData::new(template))
}

/// Validates the add-template form and persists a new template. Template
/// bodies are stored verbatim; placeholders are not validated here.
pub fn add_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddTemplateForm,
) -> ServiceResult<()>
where
    R: TemplateWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let new_template = NewTemplate::try_from(form)?;
    repo.create_template(&new_template)?;
    Ok(())
}

/// Validates the save-template form and applies the updates to an existing
/// template.
pub fn save_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveTemplateForm,
) -> ServiceResult<()>
where
    R: TemplateWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let template_id = TemplateId::new(form.id)?;
    let updates = UpdateTemplate::try_from(form)?;
    repo.update_template(template_id, &updates)?;
    Ok(())
}

/// Builds the confirmation dialog shown before a template is deleted.
pub fn delete_template_prompt<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
) -> ServiceResult<ConfirmPrompt>
where
    R: TemplateReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let template_id = TemplateId::new(template_id)?;
    let template = repo
        .get_template_by_id(template_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(ConfirmPrompt::delete(
        "Удаление шаблона",
        format!(
            "Удалить шаблон «{}»? Уведомления по нему отправляться не будут.",
            template.name
        ),
        "/notification-templates/delete",
        template.id,
    ))
}

pub fn delete_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &DeleteTemplateForm,
) -> ServiceResult<()>
where
    R: TemplateWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let template_id = TemplateId::new(form.id)?;
    repo.delete_template(template_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::template::NotificationTemplate;
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
    fn load_page_applies_tag_filter() {
        let mut repo = MockRepository::new();
        repo.expect_list_templates()
            .times(1)
            .withf(|query| query.tag == Some(TemplateTag::NewOffer))
            .returning(|_| Ok((0, vec![])));

        let query = TemplatesQuery {
            tag: Some("new_offer".to_string()),
            status: None,
            page: None,
        };
        load_templates_page(&repo, &admin(), query).unwrap();
    }

    #[test]
    fn add_creates_update_does_not() {
        let mut repo = MockRepository::new();
        repo.expect_create_template().times(1).returning(|new| {
            Ok(NotificationTemplate {
                id: 1,
                name: new.name.clone(),
                tag: new.tag,
                title_template: new.title_template.clone(),
                body_template: new.body_template.clone(),
                deep_link_template: new.deep_link_template.clone(),
                is_active: new.is_active,
                ..NotificationTemplate::default()
            })
        });
        repo.expect_update_template().times(0);

        let form = AddTemplateForm {
            name: "Новая акция".to_string(),
            tag: "new_offer".to_string(),
            title_template: "New offer from {{brand_name}}!".to_string(),
            body_template: "{{offer_title}}".to_string(),
            deep_link_template: None,
            is_active: Some("on".to_string()),
        };
        add_template(&repo, &admin(), form).unwrap();
    }

    #[test]
    fn save_updates_the_existing_template() {
        let mut repo = MockRepository::new();
        repo.expect_create_template().times(0);
        repo.expect_update_template()
            .times(1)
            .withf(|id, updates| id.get() == 2 && updates.tag == TemplateTag::Promotional)
            .returning(|id, updates| {
                Ok(NotificationTemplate {
                    id: id.get(),
                    name: updates.name.clone(),
                    tag: updates.tag,
                    ..NotificationTemplate::default()
                })
            });

        let form = SaveTemplateForm {
            id: 2,
            name: "Распродажа".to_string(),
            tag: "promotional".to_string(),
            title_template: "Скидки у {{brand_name}}".to_string(),
            body_template: "Только до {{ends_at}}".to_string(),
            deep_link_template: None,
            is_active: Some("on".to_string()),
        };
        save_template(&repo, &admin(), &form).unwrap();
    }

    #[test]
    fn editor_loads_placeholder_chips() {
        let mut repo = MockRepository::new();
        repo.expect_get_template_by_id().times(1).returning(|id| {
            Ok(Some(NotificationTemplate {
                id: id.get(),
                title_template: "New offer from {{brand_name}}!".to_string(),
                body_template: "{{offer_title}} until {{ends_at}}".to_string(),
                ..NotificationTemplate::default()
            }))
        });

        let editor = get_template_editor(&repo, &admin(), 2).unwrap();
        assert_eq!(editor.title_placeholders, vec!["brand_name"]);
        assert_eq!(editor.body_placeholders, vec!["offer_title", "ends_at"]);
    }

    #[test]
    fn delete_prompt_does_not_touch_the_writer() {
        let mut repo = MockRepository::new();
        repo.expect_get_template_by_id().times(1).returning(|id| {
            Ok(Some(NotificationTemplate {
                id: id.get(),
                name: "Системное".to_string(),
                ..NotificationTemplate::default()
            }))
        });
        repo.expect_delete_template().times(0);

        let prompt = delete_template_prompt(&repo, &admin(), 6).unwrap();
        assert_eq!(prompt.action, "/notification-templates/delete");
    }
}
