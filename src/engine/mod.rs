//! # 替换引擎模块
//!
//! 单个文档的 读取 → 规则变换 → (可能)原子写回。
//!
//! ## 功能
//! - 显式字符编码读写（读写使用同一编码）
//! - 按顺序执行规则集
//! - 换行符保持或规范化
//! - dry-run 模式
//!
//! ## 依赖关系
//! - 被 `commands/replace.rs` 调用，作为 `batch/runner.rs` 的处理器
//! - 使用 `models/`, `utils/atomic.rs`
//! - 子模块: codec, newline, replacer

pub mod codec;
pub mod newline;
pub mod replacer;

pub use codec::TextCodec;
pub use newline::NewlineMode;
pub use replacer::Replacer;
