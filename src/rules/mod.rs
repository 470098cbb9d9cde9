//! # 规则来源模块
//!
//! 从内置预设、CSV 规则文件和命令行内联规则组装有序规则集。
//!
//! ## 组装顺序
//! 预设（按给出顺序） → 规则文件 → 内联规则
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/rule.rs`
//! - 子模块: file, inline, presets

pub mod file;
pub mod inline;
pub mod presets;

use crate::error::Result;
use crate::models::{RuleSet, RuleSpec};
use std::path::Path;

/// 规则来源
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSources<'a> {
    /// 内置预设名称
    pub presets: &'a [String],
    /// CSV 规则文件
    pub file: Option<&'a Path>,
    /// 内联规则 `PATTERN=>REPLACEMENT`
    pub inline: &'a [String],
    /// 内联规则是否忽略大小写
    pub ignore_case: bool,
    /// 内联规则是否为正则
    pub regex: bool,
}

impl RuleSources<'_> {
    /// 按顺序收集全部规则描述
    pub fn specs(&self) -> Result<Vec<RuleSpec>> {
        let mut specs = Vec::new();

        for name in self.presets {
            specs.extend(presets::find(name)?.specs());
        }

        if let Some(path) = self.file {
            specs.extend(file::parse_rules_file(path)?);
        }

        for raw in self.inline {
            specs.push(inline::parse_inline_rule(raw, self.ignore_case, self.regex)?);
        }

        Ok(specs)
    }

    /// 收集并编译为规则集
    pub fn load(&self) -> Result<RuleSet> {
        RuleSet::compile(self.specs()?)
    }
}
