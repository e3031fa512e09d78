use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::{ApiError, ApiTemplateBody, ApiTemplatesQuery};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, api as api_service};

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ApiError::new("Недостаточно прав"))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ApiError::new("Шаблон не найден")),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::UnprocessableEntity().json(ApiError::new(message))
        }
        err => {
            log::error!("Template API error: {err}");
            HttpResponse::InternalServerError().json(ApiError::new("Внутренняя ошибка"))
        }
    }
}

#[get("/v1/admin/notification-templates")]
pub async fn api_list_templates(
    params: web::Query<ApiTemplatesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_templates(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[get("/v1/admin/notification-templates/{template_id}")]
pub async fn api_get_template(
    template_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::get_template(repo.get_ref(), &user, template_id.into_inner()) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(err) => error_response(err),
    }
}

#[post("/v1/admin/notification-templates")]
pub async fn api_create_template(
    body: web::Json<ApiTemplateBody>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::create_template(repo.get_ref(), &user, body.into_inner()) {
        Ok(template) => HttpResponse::Created().json(template),
        Err(err) => error_response(err),
    }
}

#[put("/v1/admin/notification-templates/{template_id}")]
pub async fn api_update_template(
    template_id: web::Path<i32>,
    body: web::Json<ApiTemplateBody>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::update_template(
        repo.get_ref(),
        &user,
        template_id.into_inner(),
        body.into_inner(),
    ) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/admin/notification-templates/{template_id}")]
pub async fn api_delete_template(
    template_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::delete_template(repo.get_ref(), &user, template_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
