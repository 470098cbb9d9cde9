//! # 文档收集器
//!
//! 列出目录下的直接文件（不递归），按文件名过滤。
//!
//! ## 功能
//! - 后缀过滤（如 `.html`）或 glob 模式过滤（如 `*.htm*`）
//! - 惰性、单次遍历的路径序列，按文件名排序
//! - 跟随指向文件的符号链接
//!
//! ## 依赖关系
//! - 被 `commands/replace.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{RebrandError, Result};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件名过滤器
#[derive(Debug, Clone)]
pub enum NameFilter {
    /// 文件名以给定字符串结尾
    Suffix(String),
    /// 文件名匹配 glob 模式
    Glob(glob::Pattern),
}

impl NameFilter {
    /// 后缀过滤器
    pub fn suffix(suffix: &str) -> Self {
        NameFilter::Suffix(suffix.to_string())
    }

    /// glob 过滤器
    pub fn glob(pattern: &str) -> Result<Self> {
        glob::Pattern::new(pattern)
            .map(NameFilter::Glob)
            .map_err(|e| {
                RebrandError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
            })
    }

    /// 检查文件名是否匹配
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::Suffix(suffix) => name.ends_with(suffix.as_str()),
            NameFilter::Glob(pattern) => pattern.matches(name),
        }
    }

    /// 检查目录项文件名是否匹配
    ///
    /// 后缀按原始字节比较，非 UTF-8 文件名也能命中；glob 只匹配 UTF-8 文件名。
    pub fn matches_os_str(&self, name: &OsStr) -> bool {
        match self {
            NameFilter::Suffix(suffix) => name.as_encoded_bytes().ends_with(suffix.as_bytes()),
            NameFilter::Glob(_) => name.to_str().map_or(false, |name| self.matches(name)),
        }
    }
}

impl std::fmt::Display for NameFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameFilter::Suffix(suffix) => write!(f, "*{}", suffix),
            NameFilter::Glob(pattern) => write!(f, "{}", pattern.as_str()),
        }
    }
}

/// 文档收集器
pub struct DocumentCollector {
    /// 输入目录
    dir: PathBuf,
    /// 文件名过滤器
    filter: NameFilter,
}

impl DocumentCollector {
    /// 创建收集器；目录不存在或不是目录时报 `DirectoryNotFound`
    pub fn new(dir: &Path, filter: NameFilter) -> Result<Self> {
        if !dir.is_dir() {
            return Err(RebrandError::DirectoryNotFound {
                path: dir.display().to_string(),
            });
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            filter,
        })
    }

    /// 输入目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 过滤器
    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// 消耗收集器，返回匹配文档路径的惰性序列
    ///
    /// 目录项读取失败时产生 `DocumentReadError`，由调用方按策略处理。
    pub fn into_documents(self) -> impl Iterator<Item = Result<PathBuf>> {
        let DocumentCollector { dir, filter } = self;

        WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_file()
                        || (entry.path_is_symlink() && entry.path().is_file());
                    let matched = filter.matches_os_str(entry.file_name());

                    if is_file && matched {
                        Some(Ok(entry.into_path()))
                    } else {
                        None
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| dir.clone());
                    Some(Err(RebrandError::DocumentReadError {
                        path: path.display().to_string(),
                        source: e.into(),
                    }))
                }
            })
    }
}
