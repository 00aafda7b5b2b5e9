//! Petstore - 宠物记录 CRUD 服务
//!
//! 启动流程: 配置 -> 日志 -> 内存存储 -> HTTP 服务器

use std::sync::Arc;

use petstore::config::{load_config, print_config, LogConfig};
use petstore::infrastructure::http::{AppState, HttpServer};
use petstore::infrastructure::memory::InMemoryPetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Petstore - pet records service");
    print_config(&config);

    // 创建内存存储，显式持有并传入应用状态
    let pet_store = if config.store.seed {
        InMemoryPetStore::seeded()
    } else {
        InMemoryPetStore::new()
    };
    tracing::info!(seeded = config.store.seed, "Pet store ready");

    let state = AppState::new(Arc::new(pet_store));
    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},petstore={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
