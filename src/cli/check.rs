//! # check 子命令 CLI 定义
//!
//! 编译规则集并报告幂等性隐患，不触碰任何文档
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::rules::RuleArgs;
use clap::Args;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub rules: RuleArgs,

    /// Exit with an error when idempotence hazards are found
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
