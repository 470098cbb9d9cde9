//! # 文档数据模型
//!
//! 文档 = 路径 + 解码后的完整文本。生命周期只有 读取 → 变换 → (可能)写回。
//!
//! ## 依赖关系
//! - 被 `engine/replacer.rs` 使用

use std::path::{Path, PathBuf};

/// 已读入内存的文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 文档路径
    pub path: PathBuf,
    /// 文档原始文本
    pub content: String,
}

impl Document {
    pub fn new(path: &Path, content: String) -> Self {
        Self {
            path: path.to_path_buf(),
            content,
        }
    }
}
