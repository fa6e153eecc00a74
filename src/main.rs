use cart_service::build_server;
use cart_service::config::ServiceConfig;
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServiceConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Starting {}Service at http://{}:{}{}",
        config.service_name,
        config.host,
        config.port,
        config.api_prefix
    );

    build_server(config)?.await
}
