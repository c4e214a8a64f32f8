mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, scheduler::weekly_reset,
    service::setup_code::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("labhub=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let setup_code_service = SetupCodeService::new();

    // Generate a setup code if no admin exists
    startup::check_for_admin(&db, &setup_code_service).await?;

    weekly_reset::start_scheduler(db.clone(), &config.weekly_reset_schedule).await?;

    let router = server::router::router()
        .with_state(AppState::new(db, setup_code_service))
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.app_addr).await?;
    tracing::info!("Listening on {}", config.app_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
