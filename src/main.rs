use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use skin_classifier::classifier::OnnxClassifier;
use skin_classifier::handlers::AppState;
use skin_classifier::upload::UploadDir;
use skin_classifier::{config, configure};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = config::load().context("failed to load configuration")?;

    // RUST_LOG takes full directives and wins over the configured level
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid RUST_LOG directives '{}'", directives))?,
        Err(_) => {
            let level = config::validate_log_level(&config.logs.level)?;
            EnvFilter::default().add_directive(level.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let classifier = OnnxClassifier::load(&config.model.path)?;
    let uploads = UploadDir::create(&config.uploads.dir).with_context(|| {
        format!(
            "failed to create uploads directory {}",
            config.uploads.dir.display()
        )
    })?;
    let state = web::Data::new(AppState::new(classifier, uploads));

    let addr = (config.server.host.clone(), config.server.port);
    info!("Server running at http://{}:{}", addr.0, addr.1);

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers.get());
    }

    server.bind(addr)?.run().await?;
    Ok(())
}
