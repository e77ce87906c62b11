//! Standalone greeting entry point. Deployed independently from the user
//! directory API; answers every GET / with a fixed payload and nothing else.

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use std::env;

async fn greeting() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Hello from the User Directory Service!</h1>")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("GREETING_PORT").unwrap_or_else(|_| "3001".to_string());

    log::info!("👋 Greeting endpoint starting on {}:{}", host, port);

    HttpServer::new(|| App::new().route("/", web::get().to(greeting)))
        .bind(format!("{}:{}", host, port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_greeting_body() {
        let app = test::init_service(
            App::new().route("/", web::get().to(greeting)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, "<h1>Hello from the User Directory Service!</h1>");
    }
}
