//! # HTTP 处理器模块
//!
//! 定义了所有 HTTP 请求处理器的模块入口。
//! 包含两个主要的处理器：
//! - `leaderboard` - 排行榜提交处理器（PUT /leaderboard.json）
//! - `statics` - 兜底处理器（CORS 预检、静态文件服务）

// 子模块声明
pub mod leaderboard; // 排行榜提交处理器模块
pub mod statics;     // 预检与静态文件处理器模块


// 导出公共处理器函数，供 main.rs 中使用
pub use leaderboard::submit_leaderboard; // 排行榜提交处理器
pub use statics::fallback_handler;       // 兜底处理器
