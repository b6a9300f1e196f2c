use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use crate::analysis::AnalysisPipeline;
use crate::api::handlers::{configure, AppState};

pub async fn run(bind_addr: &str, pipeline: AnalysisPipeline) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState { pipeline });

    tracing::info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive().expose_headers(["content-disposition"]);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
