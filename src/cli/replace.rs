//! # replace 子命令 CLI 定义
//!
//! 对目录下匹配的文档按顺序执行替换规则并原子写回
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/replace.rs`

use super::rules::RuleArgs;
use crate::engine::NewlineMode;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 换行符处理方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum NewlineArg {
    /// Write back without any line-ending translation
    Preserve,
    /// Normalize line endings to LF
    Lf,
    /// Normalize line endings to CRLF
    Crlf,
}

impl From<NewlineArg> for NewlineMode {
    fn from(arg: NewlineArg) -> Self {
        match arg {
            NewlineArg::Preserve => NewlineMode::Preserve,
            NewlineArg::Lf => NewlineMode::Lf,
            NewlineArg::Crlf => NewlineMode::Crlf,
        }
    }
}

/// replace 子命令参数
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Directory containing the documents (not searched recursively)
    #[arg(short, long, env = "REBRAND_DIR")]
    pub dir: PathBuf,

    /// Only process files whose name ends with this suffix
    #[arg(short, long, default_value = ".html", conflicts_with = "glob")]
    pub ext: String,

    /// Only process files whose name matches this glob instead of --ext
    #[arg(short, long)]
    pub glob: Option<String>,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Character encoding used to read and write documents
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,

    /// Line-ending handling when writing documents back
    #[arg(long, value_enum, default_value_t = NewlineArg::Preserve)]
    pub newline: NewlineArg,

    /// Record failing documents and continue instead of aborting the run
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,

    /// Report what would change without writing anything
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Number of parallel jobs (1 = sequential, 0 = auto)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Write the run report to this CSV file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Only print the summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
