//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `rules/`, `engine/`, `batch/`, `utils/`
//! - 子模块: replace, check, presets

pub mod check;
pub mod presets;
pub mod replace;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Replace(args) => replace::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::Presets => presets::execute(),
    }
}
