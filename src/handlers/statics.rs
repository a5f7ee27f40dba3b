use crate::error::{preflight_response, ApiError};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// 兜底处理器
///
/// 接住所有未被排行榜路由命中的请求：
/// - OPTIONS（任意路径）→ CORS 预检响应
/// - PUT（其他路径）→ 404，无响应体
/// - 其余方法 → 以配置的根目录提供静态文件服务
pub async fn fallback_handler(
    State(state): State<Arc<AppState>>,
    req: Request,
) -> Response {
    if req.method() == Method::OPTIONS {
        return preflight_response();
    }

    if req.method() == Method::PUT {
        tracing::debug!("PUT 路径不存在: {}", req.uri().path());
        return ApiError::NotFound.into_response();
    }

    // GET/HEAD 及其余方法交给 ServeDir（标准 MIME 推断）
    match ServeDir::new(&state.config.serve_root).oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(infallible) => match infallible {},
    }
}
