use actix_web::middleware::Logger;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use eyre::WrapErr;
use log::info;

use fcbox_relay::{
    api::routes, config::ServerConfig, logging::setup_logging, models::AppState,
    services::vendor::VendorClient,
};

#[actix_web::main]
async fn main() -> eyre::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();
    color_eyre::install()?;
    setup_logging();

    let config = ServerConfig::from_env();
    let vendor = VendorClient::new().wrap_err("failed to build vendor HTTP client")?;
    let app_state = web::Data::new(AppState::new(vendor));

    info!("Starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .shutdown_timeout(5);

    info!("Server running at http://{}:{}", config.host, config.port);

    server.run().await?;
    Ok(())
}
