use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::domain::template::TemplateTag;
use crate::dto::templates::TemplatesQuery;
use crate::forms::templates::{AddTemplateForm, DeleteTemplateForm, SaveTemplateForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, templates as templates_service};

fn tag_options() -> Vec<String> {
    TemplateTag::ALL.iter().map(|tag| tag.to_string()).collect()
}

#[get("/notification-templates")]
pub async fn show_templates(
    query: web::Query<TemplatesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match templates_service::load_templates_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "notification-templates",
                &server_config.auth_service_url,
            );
            context.insert("templates", &data.templates);
            context.insert("filters", &data.filters);
            context.insert("filters_query", &data.filters.query_string());
            context.insert("tags", &tag_options());

            render_template(&tera, "templates/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list templates: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/notification-templates/edit/{template_id}")]
pub async fn edit_template_modal(
    template_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match templates_service::get_template_editor(repo.get_ref(), &user, template_id.into_inner()) {
        Ok(editor) => {
            let mut context = Context::new();
            context.insert("editor", &editor);
            context.insert("tags", &tag_options());
            render_template(&tera, "templates/editor_modal.html", &context)
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::NotFound) | Err(ServiceError::TypeConstraint(_)) => {
            HttpResponse::NotFound().finish()
        }
        Err(err) => {
            log::error!("Failed to load template editor: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/notification-templates/add")]
pub async fn add_template(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddTemplateForm>,
) -> impl Responder {
    match templates_service::add_template(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Шаблон добавлен.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a template: {err}");
            FlashMessage::error("Ошибка при добавлении шаблона").send();
        }
    }
    redirect("/notification-templates")
}

#[post("/notification-templates/save")]
pub async fn save_template(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveTemplateForm>,
) -> impl Responder {
    match templates_service::save_template(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Шаблон сохранён.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Шаблон не найден.").send();
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save the template: {err}");
            FlashMessage::error("Ошибка при сохранении шаблона").send();
        }
    }
    redirect("/notification-templates")
}

#[get("/notification-templates/delete/{template_id}")]
pub async fn delete_template_modal(
    template_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match templates_service::delete_template_prompt(repo.get_ref(), &user, template_id.into_inner())
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
            log::error!("Failed to load template delete prompt: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/notification-templates/delete")]
pub async fn delete_template(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteTemplateForm>,
) -> impl Responder {
    match templates_service::delete_template(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Шаблон удалён.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Шаблон не найден.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the template: {err}");
            FlashMessage::error("Ошибка при удалении шаблона").send();
        }
    }
    redirect("/notification-templates")
}
