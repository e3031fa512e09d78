use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::dto::interests::InterestsQuery;
use crate::forms::interests::{AddInterestForm, DeleteInterestForm, SaveInterestForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, interests as interests_service};

#[get("/interests")]
pub async fn show_interests(
    query: web::Query<InterestsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match interests_service::load_interests_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "interests",
                &server_config.auth_service_url,
            );
            context.insert("interests", &data.interests);
            context.insert("filters", &data.filters);
            context.insert("filters_query", &data.filters.query_string());

            render_template(&tera, "interests/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list interests: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/interests/add")]
pub async fn add_interest(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddInterestForm>,
) -> impl Responder {
    match interests_service::add_interest(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Интерес добавлен.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add an interest: {err}");
            FlashMessage::error("Ошибка при добавлении интереса").send();
        }
    }
    redirect("/interests")
}

#[post("/interests/save")]
pub async fn save_interest(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveInterestForm>,
) -> impl Responder {
    match interests_service::save_interest(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Интерес сохранён.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Интерес не найден.").send();
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save the interest: {err}");
            FlashMessage::error("Ошибка при сохранении интереса").send();
        }
    }
    redirect("/interests")
}

#[get("/interests/delete/{interest_id}")]
pub async fn delete_interest_modal(
    interest_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match interests_service::delete_interest_prompt(repo.get_ref(), &user, interest_id.into_inner())
    {
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
            log::error!("Failed to load interest delete prompt: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/interests/delete")]
pub async fn delete_interest(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteInterestForm>,
) -> impl Responder {
    match interests_service::delete_interest(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Интерес удалён.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Интерес не найден.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the interest: {err}");
            FlashMessage::error("Ошибка при удалении интереса").send();
        }
    }
    redirect("/interests")
}
