//! JSON counterpart of the notification-template operations, used by the
//! in-page editor.

use std::str::FromStr;

use crate::domain::template::{NewTemplate, NotificationTemplate, TemplateTag, UpdateTemplate};
use crate::domain::types::TemplateId;
use crate::dto::api::{ApiPage, ApiTemplateBody, ApiTemplatesQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{TemplateListQuery, TemplateReader, TemplateWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Lists templates, echoing back the caller's `seq` token so out-of-order
/// responses can be discarded client-side.
pub fn list_templates<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ApiTemplatesQuery,
) -> ServiceResult<ApiPage<NotificationTemplate>>
where
    R: TemplateReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = params.page.unwrap_or(1);
    let mut query = TemplateListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(tag) = params.tag.as_deref().and_then(|t| TemplateTag::from_str(t).ok()) {
        query = query.tag(tag);
    }
    match params.status.as_deref() {
        Some("active") => query = query.active(true),
        Some("inactive") => query = query.active(false),
        _ => {}
    }

    let (total, templates) = repo.list_templates(query)?;

    Ok(ApiPage {
        total,
        page,
        total_pages: total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
        seq: params.seq,
        data: templates,
    })
}

pub fn get_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
) -> ServiceResult<NotificationTemplate>
where
    R: TemplateReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let template_id = TemplateId::new(template_id)?;
    repo.get_template_by_id(template_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    body: ApiTemplateBody,
) -> ServiceResult<NotificationTemplate>
where
    R: TemplateWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_template = new_template_from_body(body)?;
    Ok(repo.create_template(&new_template)?)
}

pub fn update_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
    body: ApiTemplateBody,
) -> ServiceResult<NotificationTemplate>
where
    R: TemplateWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let template_id = TemplateId::new(template_id)?;
    let new = new_template_from_body(body)?;
    let updates = UpdateTemplate {
        name: new.name,
        tag: new.tag,
        title_template: new.title_template,
        body_template: new.body_template,
        deep_link_template: new.deep_link_template,
        is_active: new.is_active,
    };
    Ok(repo.update_template(template_id, &updates)?)
}

pub fn delete_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
) -> ServiceResult<()>
where
    R: TemplateWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let template_id = TemplateId::new(template_id)?;
    Ok(repo.delete_template(template_id)?)
}

fn new_template_from_body(body: ApiTemplateBody) -> ServiceResult<NewTemplate> {
    let tag = TemplateTag::from_str(&body.tag)
        .map_err(|_| ServiceError::Form(format!("Неизвестный тег шаблона: {}", body.tag)))?;
    Ok(NewTemplate::try_new(
        body.name,
        tag,
        body.title_template,
        body.body_template,
        body.deep_link_template,
        body.is_active,
    )?)
}
