//! # rebrand - 有序、原子的批量文本替换
//!
//! 将逐次修订品牌名的零散替换脚本用 Rust 重构为单一可执行文件：
//! 目录 + 文件名过滤 + 有序规则集，一次运行完成。
//!
//! ## 子命令
//! - `replace` - 对目录下匹配的文档执行有序替换并原子写回
//! - `check`   - 编译规则集并报告幂等性隐患
//! - `presets` - 列出内置规则预设
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── rules/     (规则来源: 预设、CSV、内联)
//!   │     ├── engine/    (单文档 读取 → 变换 → 写回)
//!   │     ├── batch/     (文档收集与批量执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、原子写入)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod engine;
mod error;
mod models;
mod rules;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&batch::error_reason(&e));
        std::process::exit(1);
    }
}
