//! # 批量处理模块
//!
//! 提供目录级的文档批量处理能力。
//!
//! ## 功能
//! - 收集目录下匹配的文档（不递归）
//! - 顺序或并行处理
//! - fail-fast / best-effort 错误策略
//! - 运行报告汇总
//!
//! ## 依赖关系
//! - 被 `commands/replace.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{DocumentCollector, NameFilter};
pub use runner::{error_reason, BatchRunner, FailurePolicy};
