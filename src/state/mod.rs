//! # 应用状态模块
//!
//! 定义了应用程序的全局状态和数据结构。
//! 包括：
//! - `leaderboard` - 排行榜文件的持久化存储

// 子模块声明
pub mod leaderboard; // 排行榜存储

// 导出公共类型，供其他模块使用
pub use leaderboard::LeaderboardStore;

use crate::config::Config;

/// 全局应用状态
///
/// 此结构体在所有处理器之间共享。
///
/// ### 字段说明
/// - `store`: 排行榜存储 - 串行化对持久化文件的写入
/// - `config`: 应用配置信息
#[derive(Clone)]
pub struct AppState {
    /// 排行榜存储 - 持有文件路径和写锁
    pub store: std::sync::Arc<LeaderboardStore>,
    /// 应用配置 - 包含端口、路径等配置信息
    pub config: Config,
}

impl AppState {
    /// 创建新的应用状态实例
    pub fn new(config: Config) -> Self {
        let store = std::sync::Arc::new(LeaderboardStore::new(config.leaderboard_path.clone()));
        Self { store, config }
    }
}
