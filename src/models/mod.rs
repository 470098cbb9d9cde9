//! # 数据模型模块
//!
//! 定义替换规则、文档与运行报告的数据模型。
//!
//! ## 依赖关系
//! - 被 `rules/`, `engine/`, `batch/`, `commands/` 使用
//! - 子模块: rule, document, report

pub mod document;
pub mod report;
pub mod rule;

pub use document::Document;
pub use report::{Outcome, Processed, ReportEntry, RunReport};
pub use rule::{Hazard, RuleSet, RuleSpec};
