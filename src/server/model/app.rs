use sea_orm::DatabaseConnection;

use crate::server::proxy::ProxyClient;

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Client for the alimtalk proxy, used for bulk upload hand-off and message delivery
    pub proxy: ProxyClient,
    /// Base URL invite links are built from
    pub public_base_url: String,
}
