//! # presets 命令实现
//!
//! 以表格列出内置规则预设。
//!
//! ## 依赖关系
//! - 使用 `rules/presets.rs`
//! - 使用 `utils/output.rs`

use crate::error::Result;
use crate::rules::presets::PRESETS;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct PresetRow {
    #[tabled(rename = "Preset")]
    name: &'static str,
    #[tabled(rename = "Rules")]
    rules: usize,
    #[tabled(rename = "Case")]
    case: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// 执行 presets 命令
pub fn execute() -> Result<()> {
    output::print_header("Built-in presets");

    let rows: Vec<PresetRow> = PRESETS
        .iter()
        .map(|p| PresetRow {
            name: p.name,
            rules: p.len(),
            case: if p.ignore_case() { "ignore" } else { "exact" },
            description: p.description,
        })
        .collect();

    println!("{}\n", Table::new(rows));
    output::print_info("Combine presets with repeated --preset flags; they run in the given order.");

    Ok(())
}
