//! # 内联规则解析
//!
//! 命令行规则语法：`PATTERN=>REPLACEMENT`，以第一个 `=>` 分隔。
//! 两侧文本均不做 trim，空格是模式的一部分。
//!
//! ## 依赖关系
//! - 被 `rules/mod.rs` 使用

use crate::error::{RebrandError, Result};
use crate::models::RuleSpec;

/// 分隔符
pub const SEPARATOR: &str = "=>";

/// 解析单条内联规则
pub fn parse_inline_rule(raw: &str, ignore_case: bool, regex: bool) -> Result<RuleSpec> {
    let (pattern, replacement) =
        raw.split_once(SEPARATOR)
            .ok_or_else(|| RebrandError::InvalidRule {
                rule: raw.to_string(),
                reason: format!("expected PATTERN{}REPLACEMENT", SEPARATOR),
            })?;

    if pattern.is_empty() {
        return Err(RebrandError::InvalidRule {
            rule: raw.to_string(),
            reason: "pattern is empty".to_string(),
        });
    }

    let spec = if regex {
        RuleSpec::regex(pattern, replacement)
    } else {
        RuleSpec::literal(pattern, replacement)
    };
    Ok(spec.ignore_case(ignore_case))
}
