use actix_web::{App, HttpResponse, Responder, cookie::Key, test as actix_test, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, IncomingFlashMessages, Level};

use offers_admin::models::auth::AuthenticatedUser;
use offers_admin::pagination::Paginated;
use offers_admin::routes::{alert_level_to_str, base_context};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

async fn context_as_json(flash_messages: IncomingFlashMessages) -> impl Responder {
    let user = AuthenticatedUser {
        sub: "1".to_string(),
        email: "admin@example.com".to_string(),
        name: "Администратор".to_string(),
        roles: vec!["offers_admin".to_string()],
        exp: 0,
    };
    let context = base_context(
        &flash_messages,
        &user,
        "categories",
        "https://auth.localhost",
    );
    HttpResponse::Ok().json(context.into_json())
}

#[actix_web::test]
async fn test_base_context_shared_fields() {
    let store = CookieMessageStore::builder(Key::from(&[7u8; 64])).build();
    let app = actix_test::init_service(
        App::new()
            .wrap(FlashMessagesFramework::builder(store).build())
            .route("/context", web::get().to(context_as_json)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/context").to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["current_page"], "categories");
    assert_eq!(body["home_url"], "https://auth.localhost");
    assert_eq!(body["current_user"]["email"], "admin@example.com");
    assert!(body["alerts"].as_array().unwrap().is_empty());
}

fn pagination_strip(paginated: &Paginated<i32>) -> String {
    let mut tera = tera::Tera::new("templates/**/*.html").unwrap();
    tera.add_raw_template(
        "strip.html",
        r#"{% import "shared/pagination.html" as pagination %}{{ pagination::controls(paginated=paginated, base_url="/categories", filters_query="") }}"#,
    )
    .unwrap();

    let mut context = tera::Context::new();
    context.insert("paginated", paginated);
    tera.render("strip.html", &context).unwrap()
}

#[test]
fn test_pagination_partial_prev_next_controls() {
    let first: Paginated<i32> = Paginated::new(vec![], 1, 3);
    let html = pagination_strip(&first);
    assert!(html.contains(r#"<span class="page-link">&laquo;</span>"#));
    assert!(html.contains(r#"href="/categories?page=2">&raquo;</a>"#));

    let last: Paginated<i32> = Paginated::new(vec![], 3, 3);
    let html = pagination_strip(&last);
    assert!(html.contains(r#"href="/categories?page=2">&laquo;</a>"#));
    assert!(html.contains(r#"<span class="page-link">&raquo;</span>"#));

    let single: Paginated<i32> = Paginated::new(vec![], 1, 1);
    let html = pagination_strip(&single);
    assert!(html.trim().is_empty());
}
