//! # check 命令实现
//!
//! 编译规则集、以表格打印，并列出幂等性隐患。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `rules/`, `models/rule.rs`
//! - 使用 `utils/output.rs`

use crate::cli::check::CheckArgs;
use crate::error::{RebrandError, Result};
use crate::models::{Hazard, RuleSet};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 规则表格行
#[derive(Debug, Clone, Tabled)]
struct RuleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Replacement")]
    replacement: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Case")]
    case: &'static str,
    #[tabled(rename = "Expand")]
    expand: &'static str,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Checking rule set");

    let rules = args.rules.sources().load()?;
    println!("{}\n", Table::new(rule_rows(&rules)));

    let hazards = rules.hazards();
    if hazards.is_empty() {
        output::print_done(&format!(
            "{} rule(s) compiled; every replacement is stable under later rules",
            rules.len()
        ));
        return Ok(());
    }

    for hazard in &hazards {
        output::print_warning(&describe(hazard));
        output::print_replacement(&hazard.replacement, &hazard.rewritten);
    }

    if args.strict {
        return Err(RebrandError::IdempotenceHazards(hazards.len()));
    }

    output::print_done(&format!(
        "{} rule(s) compiled with {} idempotence hazard(s)",
        rules.len(),
        hazards.len()
    ));
    Ok(())
}

/// 规则表格
fn rule_rows(rules: &RuleSet) -> Vec<RuleRow> {
    rules
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let spec = rule.spec();
            RuleRow {
                index: i + 1,
                pattern: spec.pattern.escape_debug().to_string(),
                replacement: spec.replacement.escape_debug().to_string(),
                kind: spec.kind(),
                case: if spec.ignore_case { "ignore" } else { "exact" },
                expand: if spec.expand { "yes" } else { "no" },
            }
        })
        .collect()
}

/// 隐患描述
fn describe(hazard: &Hazard) -> String {
    if hazard.source == hazard.rewritten_by {
        format!(
            "Rule #{} rewrites its own replacement; a second run will change it again",
            hazard.source + 1
        )
    } else {
        format!(
            "Replacement of rule #{} is rewritten by rule #{}; a second run may change documents again",
            hazard.source + 1,
            hazard.rewritten_by + 1
        )
    }
}
