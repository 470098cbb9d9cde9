//! # 规则来源参数
//!
//! `replace` 与 `check` 共用的规则参数。
//!
//! ## 依赖关系
//! - 被 `cli/replace.rs`, `cli/check.rs` 使用
//! - 参数传递给 `rules/mod.rs`

use crate::rules::RuleSources;
use clap::Args;
use std::path::PathBuf;

/// 规则参数
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
    /// Built-in preset to apply first (repeatable; see `rebrand presets`)
    #[arg(long = "preset", value_name = "NAME")]
    pub presets: Vec<String>,

    /// CSV rules file with columns pattern,replacement[,ignore_case,regex,expand]
    #[arg(long = "rules", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Inline rule 'PATTERN=>REPLACEMENT' (repeatable, applied last)
    #[arg(long = "rule", value_name = "RULE")]
    pub inline: Vec<String>,

    /// Match inline rules case-insensitively
    #[arg(short = 'i', long, default_value_t = false)]
    pub ignore_case: bool,

    /// Treat inline rule patterns as regular expressions
    #[arg(long, default_value_t = false)]
    pub regex: bool,
}

impl RuleArgs {
    /// 转换为规则来源
    pub fn sources(&self) -> RuleSources<'_> {
        RuleSources {
            presets: &self.presets,
            file: self.file.as_deref(),
            inline: &self.inline,
            ignore_case: self.ignore_case,
            regex: self.regex,
        }
    }
}
