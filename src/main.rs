use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use recordatorios_backend::config::Config;
use recordatorios_backend::controllers;
use recordatorios_backend::store::NoteStore;
use recordatorios_backend::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing note store at {}", config.data_dir.display());
    let store = NoteStore::new(config.data_dir.clone())
        .await
        .expect("Failed to initialize note store");
    let store = Arc::new(store);

    log::info!("Starting recordatorios server on port {}", port);
    log::info!("Web UI available at: http://localhost:{}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
            // Serve the static browser UI
            .service(Files::new("/", config.static_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
