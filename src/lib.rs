#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod filters;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

pub const SERVICE_ACCESS_ROLE: &str = "offers";
pub const SERVICE_ADMIN_ROLE: &str = "offers_admin";

/// Formats an `amount_cents` integer as a decimal money string in templates.
#[cfg(feature = "server")]
fn money_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let cents = value
        .as_i64()
        .ok_or_else(|| tera::Error::msg("money filter expects an integer amount"))?;
    let amount = crate::domain::types::AmountCents::new(cents)
        .map_err(|e| tera::Error::msg(e.to_string()))?;
    Ok(tera::Value::String(amount.to_string()))
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: crate::models::config::ServerConfig) -> std::io::Result<()> {
    use crate::middleware::RedirectUnauthorized;
    use crate::repository::DieselRepository;
    use crate::routes::api::{
        api_create_template, api_delete_template, api_get_template, api_list_templates,
        api_update_template,
    };
    use crate::routes::applications::{
        approve_application, approve_application_modal, reject_application,
        reject_application_modal, show_applications,
    };
    use crate::routes::categories::{
        add_category, delete_category, delete_category_modal, save_category, show_categories,
    };
    use crate::routes::interests::{
        add_interest, delete_interest, delete_interest_modal, save_interest, show_interests,
    };
    use crate::routes::main::{index, logout, not_assigned};
    use crate::routes::payments::{show_payment, show_payments};
    use crate::routes::retailers::{
        add_retailer, delete_retailer, delete_retailer_modal, save_retailer, show_retailers,
    };
    use crate::routes::templates::{
        add_template, delete_template, delete_template_modal, edit_template_modal, save_template,
        show_templates,
    };

    let pool = crate::db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let mut tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    tera.register_filter("money", money_filter);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_list_templates)
                    .service(api_get_template)
                    .service(api_create_template)
                    .service(api_update_template)
                    .service(api_delete_template),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(index)
                    .service(not_assigned)
                    .service(logout)
                    .service(show_categories)
                    .service(add_category)
                    .service(save_category)
                    .service(delete_category_modal)
                    .service(delete_category)
                    .service(show_interests)
                    .service(add_interest)
                    .service(save_interest)
                    .service(delete_interest_modal)
                    .service(delete_interest)
                    .service(show_retailers)
                    .service(add_retailer)
                    .service(save_retailer)
                    .service(delete_retailer_modal)
                    .service(delete_retailer)
                    .service(show_payments)
                    .service(show_payment)
                    .service(show_applications)
                    .service(approve_application_modal)
                    .service(reject_application_modal)
                    .service(approve_application)
                    .service(reject_application)
                    .service(show_templates)
                    .service(edit_template_modal)
                    .service(add_template)
                    .service(save_template)
                    .service(delete_template_modal)
                    .service(delete_template),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
