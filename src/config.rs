use std::path::PathBuf;

/// 应用配置
///
/// 端口、排行榜文件路径和静态文件根目录均为固定值，
/// 不读取命令行参数或环境变量。
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听端口（绑定所有网卡）
    pub port: u16,
    /// 排行榜持久化文件路径（相对于工作目录）
    pub leaderboard_path: PathBuf,
    /// 静态文件服务根目录
    pub serve_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: 8000,
            leaderboard_path: PathBuf::from("leaderboard.json"),
            serve_root: PathBuf::from("."),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
