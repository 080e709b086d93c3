use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::api_json::handlers::{assign_topics_handler, help_handler};

/// Rutas del servicio; separado de `run_server` para poder montarlo en tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/topics/assign", web::post().to(assign_topics_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    info!("starting server on http://{}", bind_addr);
    HttpServer::new(|| App::new().configure(configure))
        .bind(bind_addr)?
        .run()
        .await
}
