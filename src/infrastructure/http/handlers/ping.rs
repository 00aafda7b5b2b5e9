//! Ping Handler
//!
//! Health check endpoint, no domain interaction

/// Ping endpoint - 健康检查
pub async fn ping() -> &'static str {
    "pong"
}
