use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::dto::categories::CategoriesQuery;
use crate::forms::categories::{AddCategoryForm, DeleteCategoryForm, SaveCategoryForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, categories as categories_service};

#[get("/categories")]
pub async fn show_categories(
    query: web::Query<CategoriesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match categories_service::load_categories_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "categories",
                &server_config.auth_service_url,
            );
            context.insert("categories", &data.categories);
            context.insert("filters", &data.filters);
            context.insert("filters_query", &data.filters.query_string());

            render_template(&tera, "categories/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/categories/add")]
pub async fn add_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    match categories_service::add_category(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Категория добавлена.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a category: {err}");
            FlashMessage::error("Ошибка при добавлении категории").send();
        }
    }
    redirect("/categories")
}

#[post("/categories/save")]
pub async fn save_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCategoryForm>,
) -> impl Responder {
    match categories_service::save_category(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Категория сохранена.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Категория не найдена.").send();
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save the category: {err}");
            FlashMessage::error("Ошибка при сохранении категории").send();
        }
    }
    redirect("/categories")
}

#[get("/categories/delete/{category_id}")]
pub async fn delete_category_modal(
    category_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match categories_service::delete_category_prompt(repo.get_ref(), &user, category_id.into_inner())
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
            log::error!("Failed to load category delete prompt: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/categories/delete")]
pub async fn delete_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteCategoryForm>,
) -> impl Responder {
    match categories_service::delete_category(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Категория удалена.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Категория не найдена.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the category: {err}");
            FlashMessage::error("Ошибка при удалении категории").send();
        }
    }
    redirect("/categories")
}
