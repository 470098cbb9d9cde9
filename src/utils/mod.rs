//! # 工具函数模块
//!
//! 提供美化输出、进度条、原子写入等工具。
//!
//! ## 依赖关系
//! - 被 `engine/`, `batch/`, `commands/` 模块使用
//! - 子模块: atomic, output, progress

pub mod atomic;
pub mod output;
pub mod progress;
