//! Judgebook - 图书封面 "速配" 后端

use std::sync::Arc;

use judgebook::config::{load_config, print_config, LogConfig};
use judgebook::infrastructure::adapters::{OpenLibraryClient, OpenLibraryClientConfig};
use judgebook::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Judgebook API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建 Open Library 搜索客户端
    let client_config = OpenLibraryClientConfig::new(config.open_library.base_url.clone())
        .with_timeout(config.open_library.timeout_secs)
        .with_user_agent(config.open_library.user_agent.clone());
    let book_search = Arc::new(OpenLibraryClient::new(client_config)?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(book_search));

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

/// 初始化日志（RUST_LOG 优先于配置中的级别）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},judgebook={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
