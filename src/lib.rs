pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::cart_service::CartService;
use config::ServiceConfig;
use infrastructure::memory_store::InMemoryCartStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::cart::get_cart,
        handlers::cart::add_cart,
        handlers::cart::add_item,
        handlers::cart::delete_item,
        handlers::cart::update_item,
    ),
    components(schemas(
        handlers::cart::CustomerDto,
        handlers::cart::CartItemRequest,
        handlers::cart::AddCartRequest,
        handlers::cart::AddItemRequest,
        handlers::cart::CartItemResponse,
        handlers::cart::CartResponse,
    )),
    tags((name = "cart", description = "Cart Service"))
)]
pub struct ApiDoc;

/// Register the cart routes, Swagger UI, and shared state on an actix app.
///
/// Used by both [`build_server`] and the HTTP tests; the shared state is
/// created by the caller so that every server worker sees the same store.
pub fn configure_app(
    app: &mut web::ServiceConfig,
    service: web::Data<CartService<InMemoryCartStore>>,
    config: web::Data<ServiceConfig>,
) {
    let api_prefix = config.api_prefix.clone();
    app.app_data(service)
        .app_data(config)
        .service(
            web::scope(&api_prefix)
                .route("/add", web::post().to(handlers::cart::add_cart))
                .route("/additem", web::post().to(handlers::cart::add_item))
                .route(
                    "/delete/{itemId}",
                    web::delete().to(handlers::cart::delete_item),
                )
                .route("/update/", web::put().to(handlers::cart::update_item))
                // Registered last so the literal routes above win.
                .route("/{cartId}", web::get().to(handlers::cart::get_cart)),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}

/// Build and return an actix-web `Server` bound to the configured address.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(config: ServiceConfig) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(CartService::new(InMemoryCartStore::new()));
    let bind_addr = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|app| configure_app(app, service.clone(), config.clone()))
    })
    .bind(bind_addr)?
    .run())
}
