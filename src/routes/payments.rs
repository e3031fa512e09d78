use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::payments::PaymentsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, payments as payments_service};

#[get("/payments")]
pub async fn show_payments(
    query: web::Query<PaymentsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match payments_service::load_payments_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "payments",
                &server_config.auth_service_url,
            );
            context.insert("payments", &data.payments);
            context.insert("filters", &data.filters);
            context.insert("filters_query", &data.filters.query_string());

            render_template(&tera, "payments/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list payments: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/payments/{payment_id}")]
pub async fn show_payment(
    payment_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match payments_service::get_payment_detail(repo.get_ref(), &user, payment_id.into_inner()) {
        Ok(detail) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "payments",
                &server_config.auth_service_url,
            );
            context.insert("payment", &detail.payment);
            context.insert("retailer", &detail.retailer);

            render_template(&tera, "payments/detail.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Недостаточно прав.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) | Err(ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Платёж не найден.").send();
            redirect("/payments")
        }
        Err(err) => {
            log::error!("Failed to load payment: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
