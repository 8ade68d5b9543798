mod cors;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;

/// Mounts the client, admin and health scopes under `/api`.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::mount_health())
            .service(
                web::scope("/client")
                    .service(api_buildings::mount_catalog())
                    .service(api_users::mount_client_users())
                    .service(api_bookings::mount_client_bookings()),
            )
            .service(
                web::scope("/admin")
                    .service(api_bookings::mount_admin_bookings())
                    .service(api_buildings::mount_admin_buildings())
                    .service(api_users::mount_admin_users()),
            ),
    );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // init logger
    if config.console_logging_enabled {
        let level = if config.is_production() {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Debug
        };
        logger::setup(&config.log_file, level).map_err(std::io::Error::other)?;
    }

    // init store
    let store = db::setup(config.seed_demo_data);

    let origin = config.cors_allowed_origin.clone();
    let rate_limit = config.rate_limit_per_second;

    log::info!(
        "Starting venue booking server on {}:{} ({})",
        config.server_host,
        config.server_port,
        config.environment
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(limiter::global_middleware(rate_limit)) // 3rd
            .wrap(logger::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .configure(routes)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
