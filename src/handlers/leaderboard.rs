use crate::error::{success_response, ApiError};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::Response,
};
use serde_json::Value;
use std::sync::Arc;

/// 解析 Content-Length 请求头，作为请求体的精确字节数
fn declared_length(headers: &HeaderMap) -> Result<usize, ApiError> {
    headers
        .get(header::CONTENT_LENGTH)
        .ok_or_else(|| ApiError::Internal("missing Content-Length header".to_string()))?
        .to_str()
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .parse::<usize>()
        .map_err(|e| ApiError::Internal(format!("invalid Content-Length: {}", e)))
}

/// PUT /leaderboard.json 处理器
///
/// 读取恰好 Content-Length 字节的请求体，按 UTF-8 解析为
/// 任意结构的 JSON 值，成功后整体覆盖写入排行榜文件。
/// 任何一步失败都以 500 响应返回失败描述。
pub async fn submit_leaderboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let declared = declared_length(&headers)?;

    // 恰好 Content-Length 字节：请求体不足即报错，
    // 超出声明长度的字节忽略
    let payload = body
        .get(..declared)
        .ok_or_else(|| {
            ApiError::Internal(format!(
                "request body shorter than Content-Length ({} < {})",
                body.len(),
                declared
            ))
        })?;

    let text = std::str::from_utf8(payload).map_err(|e| ApiError::Internal(e.to_string()))?;
    let value: Value = serde_json::from_str(text).map_err(|e| ApiError::Internal(e.to_string()))?;

    state
        .store
        .save(&value)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::debug!("排行榜已保存: {} 字节 -> {}", declared, state.store.path().display());

    Ok(success_response())
}
