//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `replace`: 对目录下的文档执行有序替换
//! - `check`: 编译并检查规则集
//! - `presets`: 列出内置规则预设
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: replace, check, rules

pub mod check;
pub mod replace;
pub mod rules;

use clap::{Parser, Subcommand};

/// rebrand - 有序、原子的批量文本替换
#[derive(Parser)]
#[command(name = "rebrand")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Ordered, atomic search-and-replace over a directory of documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply an ordered rule set to every matching document in a directory
    Replace(replace::ReplaceArgs),

    /// Compile a rule set, print it and report idempotence hazards
    Check(check::CheckArgs),

    /// List the built-in rule presets
    Presets,
}
