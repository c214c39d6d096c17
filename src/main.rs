use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use diesel_records_be::config::Config;
use diesel_records_be::routes::{self, AppState};
use diesel_records_be::service::RecordService;
use diesel_records_be::store::PgRecordStore;

fn cors(origin: Option<&str>) -> Cors {
    let cors = match origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allow_any_header().allow_any_method()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let store = match PgRecordStore::connect(&config.database_url, config.max_connections).await {
        Ok(store) => {
            log::info!("Connection to the database is successful");
            store
        }
        Err(err) => {
            log::error!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = store.init_schema().await {
        log::error!("Failed to create the diesel_records table: {:?}", err);
        std::process::exit(1);
    }

    let records = RecordService::new(Arc::new(store));
    let state = web::Data::new(AppState { records });

    log::info!("Server listening on http://{}:{}", config.host, config.port);

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(cors_origin.as_deref()))
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
