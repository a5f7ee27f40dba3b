//! # 错误处理模块
//!
//! 定义了应用程序中使用的错误类型和 HTTP 响应辅助函数。
//! 包括排行榜提交的成功响应和 CORS 预检响应。

use axum::{
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::fmt;

/// 提交结果响应体
///
/// `{"success": true}` 或 `{"success": false, "error": "<描述>"}`
#[derive(Debug, Serialize)]
struct SubmitReply {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SubmitReply {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
        }
    }
}

/// API 错误枚举
///
/// 定义了应用程序中可能出现的各种错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 404 未找到 - PUT 请求的路径不存在，不携带响应体
    NotFound,
    /// 500 内部错误 - 请求体解析或文件写入失败，携带失败描述
    Internal(String),
}

/// 实现 Display trait，支持错误信息格式化输出
impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not Found"),
            ApiError::Internal(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

/// 实现 Error trait，使 ApiError 可以作为标准错误类型使用
impl std::error::Error for ApiError {}

/// 实现 IntoResponse trait，将 ApiError 转换为 HTTP 响应
///
/// 错误到响应的映射只发生在这一个边界点：
/// - `NotFound` → 404，空响应体
/// - `Internal` → 500，`{"success": false, "error": "<描述>"}`
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                Json(SubmitReply::failed(msg)),
            )
                .into_response(),
        }
    }
}

// ============================================================================
// CORS 响应辅助函数
// ============================================================================

/// 三个固定的 CORS 响应头
///
/// 与前端约定的精确值，方法列表以逗号加空格分隔。
fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, OPTIONS"),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ]
}

/// 排行榜提交成功响应
///
/// ### 响应内容
/// - HTTP 状态码: 200 OK
/// - Content-Type: application/json
/// - 三个 CORS 响应头
/// - 响应体: `{"success": true}`
pub fn success_response() -> Response {
    (StatusCode::OK, cors_headers(), Json(SubmitReply::ok())).into_response()
}

/// CORS 预检响应
///
/// 任意路径的 OPTIONS 请求均返回此响应。
///
/// ### 响应内容
/// - HTTP 状态码: 200 OK
/// - 三个 CORS 响应头
/// - 无响应体
pub fn preflight_response() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}
