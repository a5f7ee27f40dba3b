//! # 排行榜存储模块
//!
//! 把一份任意结构的 JSON 文档整体写入固定的本地文件。
//! 服务端从不读取该文件，也从不做部分更新：每次成功的
//! 提交都会截断并完整覆盖文件内容。

use parking_lot::Mutex;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 排行榜文件存储
///
/// 监听器是并发的（每个连接一个任务），因此对文件的
/// 写入必须互斥，否则两个并发的 PUT 可能交错写坏文件。
/// 锁只在同步的序列化和写入期间持有，不跨越 `.await`。
pub struct LeaderboardStore {
    /// 持久化文件路径
    path: PathBuf,
    /// 写锁 - 串行化并发提交
    write_lock: Mutex<()>,
}

impl LeaderboardStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存排行榜文档
    ///
    /// 以 2 空格缩进的 UTF-8 文本覆盖写入，非 ASCII 字符
    /// 原样输出不转义。无临时文件重命名：解析成功后写入
    /// 失败时，文件内容相对本次提交处于未定义状态。
    pub fn save(&self, value: &Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        let _guard = self.write_lock.lock();
        fs::write(&self.path, text)
    }
}
