mod app;
mod config;
mod error;
mod health;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "user_service=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let run_migrations = config.run_migrations;
    let (app_state, db) = AppState::init(config).await?;

    if run_migrations {
        sqlx::migrate!("./migrations").run(&db).await?;
        tracing::info!("migrations applied");
    }

    let addr = app_state.config.bind_addr()?;
    app::serve(app::build_app(app_state), addr).await?;

    db.close().await;
    Ok(())
}
