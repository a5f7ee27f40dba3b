//! # Rusty Score Server - 主程序入口
//!
//! 极简排行榜持久化服务器，为本地网页前端提供一个
//! 无数据库的提交端点。
//!
//! ## 功能概述
//! - 接收 PUT 提交的排行榜 JSON 并整体写入本地文件
//! - 回答任意路径的 CORS 预检请求
//! - 以工作目录为根提供静态文件服务
//!
//! ## 服务设计
//! - **端口 8000**: 统一服务
//!   - `PUT /leaderboard.json` → 排行榜提交
//!   - `OPTIONS *` → CORS 预检
//!   - `GET/HEAD *` → 静态文件

mod config;
mod error;
mod handlers;
mod state;

use axum::{routing::put, Router};
use config::Config;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

/// 构建统一路由
///
/// 排行榜路由只注册 PUT 方法；该路径上的其他方法和
/// 所有未命中的请求统一交给兜底处理器分派。
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/leaderboard.json",
            put(handlers::submit_leaderboard).fallback(handlers::fallback_handler),
        )
        .fallback(handlers::fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 程序入口点
///
/// ### 启动流程
/// 1. 初始化日志系统
/// 2. 加载配置
/// 3. 初始化应用状态
/// 4. 构建统一路由
/// 5. 启动 HTTP 服务
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========================================
    // 1. 初始化日志系统
    // ========================================
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    info!("正在启动 score-server-rs...");

    // ========================================
    // 2. 加载配置
    // ========================================
    let config = Config::from_env();

    // ========================================
    // 3. 初始化应用状态
    // ========================================
    let state = Arc::new(AppState::new(config.clone()));

    // ========================================
    // 4. 构建统一路由（端口 8000）
    // ========================================
    let router = app(state);

    // ========================================
    // 5. 启动 HTTP 服务
    // ========================================
    let addr: SocketAddr = config.addr().parse()?;

    info!("服务器运行在端口 {}", config.port);
    info!("访问地址: {}", config.local_url());
    info!("  PUT /leaderboard.json → 排行榜提交");
    info!("  OPTIONS *             → CORS 预检");
    info!("  GET/HEAD *            → 静态文件");

    let tcp_listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("score-server-rs 已停止");
    Ok(())
}

/// 优雅关闭信号处理
///
/// 监听以下信号并触发关闭流程：
/// - Ctrl+C (SIGINT)
/// - SIGTERM (仅 Unix 系统)
async fn shutdown_signal() {
    // 监听 Ctrl+C
    let ctrl_c = async {
        signal::ctrl_c().await.expect("无法安装 Ctrl+C 处理器");
    };

    // 监听 SIGTERM（仅 Unix 系统）
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("无法安装信号处理器")
            .recv()
            .await;
    };

    // 非 Unix 系统使用永不完成的 Future
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("收到 Ctrl+C");
        },
        _ = terminate => {
            info!("收到 terminate 信号");
        },
    }
}
