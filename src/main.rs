use anyhow::{Context, Result};
use rolling_logger::LoggerConfig;
use todo_app::{build_router, config::AppConfig, state::AppState};
use todo_core::{domain::OwnerId, seed::seed_demo_data, CoreState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("failed to load application configuration")?;

    let mut logger = LoggerConfig::new(&config.log_dir, "todo-app");
    logger.max_bytes = config.log_max_bytes;
    logger.max_files = config.log_max_files;
    logger.default_filter = "todo_app=debug,todo_core=info,tower_http=info".to_string();
    rolling_logger::init_with(logger).context("failed to init rolling logger")?;
    if let Ok(path) = rolling_logger::log_file_path() {
        let _ = rolling_logger::info(&format!("writing logs to {}", path.display()));
    }

    let core = CoreState::open(&config.database_path).with_context(|| {
        format!("failed to open database at {}", config.database_path.display())
    })?;
    let _ = rolling_logger::info(&format!(
        "database ready at {}",
        config.database_path.display()
    ));

    if config.seed_demo {
        let owner = OwnerId::new(config.demo_owner_id.as_str()).context("DEMO_OWNER_ID is blank")?;
        match seed_demo_data(&core, &owner).await {
            Ok(true) => info!(owner = %owner, "demo data seeded"),
            Ok(false) => {}
            Err(err) => {
                let _ = rolling_logger::error(&format!("demo seed failed: {}", err));
            }
        }
    }

    let app = build_router(AppState::new(core));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "todo service started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("todo service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            let _ = rolling_logger::warn(&format!("unable to install Ctrl+C handler: {}", err));
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                let _ = rolling_logger::warn(&format!("unable to install SIGTERM handler: {}", err));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
