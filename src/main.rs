use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unionhub::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), unionhub::server::error::Error> {
    let proxy = startup::build_proxy_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    let app = router::routes().with_state(AppState {
        db,
        proxy,
        public_base_url: config.public_base_url,
    });

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
