use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use portfolio_site::{
    background_task::start_purge_task,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    middlewares::{auth::AuthMiddleware, cors::cors_from_config},
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to create database pool: {}", e)))?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| std::io::Error::other(format!("Migrations failed: {}", e)))?;
    }

    let app_state = web::Data::new(
        AppState::new(&config, pool)
            .map_err(|e| std::io::Error::other(e.to_string()))?
    );

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    tokio::spawn(start_purge_task(app_state.repos.user_repo.clone()));

    let server_state = app_state.clone();
    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_state.clone())
            .wrap(AuthMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(cors_from_config(&server_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        }
    }
}
