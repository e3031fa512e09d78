use actix_web::{
    App, HttpResponse,
    http::{StatusCode, header},
    test, web,
};

use offers_admin::middleware::RedirectUnauthorized;
use offers_admin::models::config::ServerConfig;

fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "offers.db".to_string(),
        templates_dir: "templates/**/*.html".to_string(),
        secret: "0123456789abcdef".to_string(),
        auth_service_url: "https://auth.localhost".to_string(),
    }
}

#[actix_web::test]
async fn redirects_unauthorized_to_configured_auth_service() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(server_config()))
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "https://auth.localhost"
    );
}

#[actix_web::test]
async fn redirects_unauthorized_to_fallback_without_config() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/auth/signin"
    );
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(server_config()))
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
