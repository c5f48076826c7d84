use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error, proxy::ProxyClient};

/// Build the alimtalk proxy client with the configured timeout
pub fn build_proxy_client(config: &Config) -> Result<ProxyClient, Error> {
    let proxy = ProxyClient::new(&config.proxy_url, config.proxy_timeout)?;

    Ok(proxy)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the HTTP listener
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(&config.bind_address).await?;

    Ok(listener)
}

/// Resolves when the process receives ctrl-c
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
