use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::dto::applications::ApplicationsQuery;
use crate::forms::applications::DecideApplicationForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, applications as applications_service};

#[get("/applications")]
pub async fn show_applications(
    query: web::Query<ApplicationsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match applications_service::load_applications_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "applications",
                &server_config.auth_service_url,
            );
            context.insert("applications", &data.applications);
            context.insert("filters", &data.filters);
            context.insert("filters_query", &data.filters.query_string());

            render_template(&tera, "applications/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list applications: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/applications/approve/{application_id}")]
pub async fn approve_application_modal(
    application_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match applications_service::approve_application_prompt(
        repo.get_ref(),
        &user,
        application_id.into_inner(),
    ) {
        Ok(prompt) => {
            let mut context = Context::new();
            context.insert("prompt", &prompt);
            render_template(&tera, "shared/confirm_modal.html", &context)
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::NotFound) | Err(ServiceError::TypeConstraint(_)) => {
            HttpResponse::NotFound().finish()
        }
        Err(err) => {
            log::error!("Failed to load approve prompt: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/applications/reject/{application_id}")]
pub async fn reject_application_modal(
    application_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match applications_service::reject_application_prompt(
        repo.get_ref(),
        &user,
        application_id.into_inner(),
    ) {
        Ok(prompt) => {
            let mut context = Context::new();
            context.insert("prompt", &prompt);
            render_template(&tera, "shared/confirm_modal.html", &context)
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::NotFound) | Err(ServiceError::TypeConstraint(_)) => {
            HttpResponse::NotFound().finish()
        }
        Err(err) => {
            log::error!("Failed to load reject prompt: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/applications/approve")]
pub async fn approve_application(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DecideApplicationForm>,
) -> impl Responder {
    match applications_service::approve_application(repo.get_ref(), &user, &form) {
        Ok(retailer) => {
            FlashMessage::success(format!(
                "Заявка одобрена. Создан ритейлер «{}».",
                retailer.name
            ))
            .send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Заявка не найдена или уже рассмотрена.").send();
        }
        Err(err) => {
            log::error!("Failed to approve the application: {err}");
            FlashMessage::error("Ошибка при одобрении заявки").send();
        }
    }
    redirect("/applications")
}

#[post("/applications/reject")]
pub async fn reject_application(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DecideApplicationForm>,
) -> impl Responder {
    match applications_service::reject_application(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Заявка отклонена.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Заявка не найдена или уже рассмотрена.").send();
        }
        Err(err) => {
            log::error!("Failed to reject the application: {err}");
            FlashMessage::error("Ошибка при отклонении заявки").send();
        }
    }
    redirect("/applications")
}
