use actix_cors::Cors;
use actix_web::{App, HttpServer, dev::Server, http, web, web::Data};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::configuration::{CorsSettings, Settings};
use crate::routes::{get_stats, health_check, log_visit};
use crate::store::VisitStore;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    #[allow(clippy::missing_errors_doc)]
    /// # Panics
    /// probably not a bad idea to handle port binding issues gracefully
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let store = VisitStore::new();

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port,
        );

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, store, configuration.cors)?;

        Ok(Self { port, server })
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[allow(clippy::missing_errors_doc)]
    // only return when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

// run the actual server
#[allow(clippy::missing_errors_doc)]
fn run(listener: TcpListener, store: VisitStore, cors: CorsSettings) -> Result<Server, anyhow::Error> {
    let store = Data::new(store);
    let server = HttpServer::new(move || {
        // the beacon is a cross-origin caller by construction, so CORS is
        // part of the collector's contract, not an afterthought
        let cors_layer = cors
            .allowed_origins
            .iter()
            .fold(Cors::default(), |layer, origin| layer.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(cors.max_age);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors_layer)
            .route("/health_check", web::get().to(health_check))
            // both spellings stay live so old and new page scripts work
            // against one collector
            .route("/log", web::post().to(log_visit))
            .route("/post", web::post().to(log_visit))
            .route("/get", web::get().to(get_stats))
            .route("/stats", web::get().to(get_stats))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
