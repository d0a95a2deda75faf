pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod preprocess;
pub mod upload;

use actix_web::web;

/// Registers every route the service exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(handlers::index)))
        .service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(web::resource("/predict").route(web::post().to(handlers::predict)));
}
