pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::order_service::OrderService;
use crate::errors::AppError;
use crate::infrastructure::order_repo::DieselOrderRepository;
use crate::openapi::ApiDoc;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create the order tables if they do not exist yet.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Malformed request bodies answer with the same `{"error": ...}` JSON as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Register the order, order item and customer routes.
///
/// Expects a `web::Data<OrderService>` in app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/orders")
            .route("", web::get().to(handlers::orders::list_orders))
            .route("", web::post().to(handlers::orders::create_order))
            .route("", web::delete().to(handlers::orders::delete_order_without_id))
            // Literal segments go before `/{id}`, which would otherwise match them.
            .route("/view", web::get().to(handlers::orders::list_order_views))
            .route(
                "/return-id",
                web::post().to(handlers::orders::create_order_returning_id),
            )
            .route("/{id}", web::get().to(handlers::orders::get_order))
            .route("/{id}", web::put().to(handlers::orders::update_order))
            .route("/{id}", web::delete().to(handlers::orders::delete_order)),
    )
    .route(
        "/order-items",
        web::get().to(handlers::order_items::list_order_items),
    )
    .route(
        "/customers",
        web::get().to(handlers::customers::list_customers),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(OrderService::new(DieselOrderRepository::new(pool)));
    let api_doc = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api_doc.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
