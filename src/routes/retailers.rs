use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::dto::retailers::RetailersQuery;
use crate::forms::retailers::{AddRetailerForm, DeleteRetailerForm, SaveRetailerForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::repository::errors::RepositoryError;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, retailers as retailers_service};

#[get("/retailers")]
pub async fn show_retailers(
    query: web::Query<RetailersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match retailers_service::load_retailers_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "retailers",
                &server_config.auth_service_url,
            );
            context.insert("retailers", &data.retailers);
            context.insert("filters", &data.filters);
            context.insert("filters_query", &data.filters.query_string());

            render_template(&tera, "retailers/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list retailers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/retailers/add")]
pub async fn add_retailer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddRetailerForm>,
) -> impl Responder {
    match retailers_service::add_retailer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Ритейлер добавлен.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a retailer: {err}");
            FlashMessage::error("Ошибка при добавлении ритейлера").send();
        }
    }
    redirect("/retailers")
}

#[post("/retailers/save")]
pub async fn save_retailer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveRetailerForm>,
) -> impl Responder {
    match retailers_service::save_retailer(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Ритейлер сохранён.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Ритейлер не найден.").send();
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save the retailer: {err}");
            FlashMessage::error("Ошибка при сохранении ритейлера").send();
        }
    }
    redirect("/retailers")
}

#[get("/retailers/delete/{retailer_id}")]
pub async fn delete_retailer_modal(
    retailer_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match retailers_service::delete_retailer_prompt(repo.get_ref(), &user, retailer_id.into_inner())
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
            log::error!("Failed to load retailer delete prompt: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/retailers/delete")]
pub async fn delete_retailer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteRetailerForm>,
) -> impl Responder {
    match retailers_service::delete_retailer(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Ритейлер удалён.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Ритейлер не найден.").send();
        }
        Err(ServiceError::Repository(RepositoryError::ConstraintViolation(_))) => {
            FlashMessage::error("Нельзя удалить ритейлера с историей платежей.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the retailer: {err}");
            FlashMessage::error("Ошибка при удалении ритейлера").send();
        }
    }
    redirect("/retailers")
}
