//! # 内置规则预设
//!
//! 品牌名历次修订（Curve → X3D DENTAL → X3DENTAL → x3dental）使用过的规则集。
//! 多个预设可以按顺序拼接成一个规则集，在一次运行中完成多轮修订。
//!
//! ## 依赖关系
//! - 被 `rules/mod.rs`, `commands/presets.rs` 使用

use crate::error::{RebrandError, Result};
use crate::models::RuleSpec;

/// 预设中的单条规则
#[derive(Debug, Clone, Copy)]
struct PresetRule {
    pattern: &'static str,
    replacement: &'static str,
    regex: bool,
}

const fn literal(pattern: &'static str, replacement: &'static str) -> PresetRule {
    PresetRule {
        pattern,
        replacement,
        regex: false,
    }
}

const fn regex(pattern: &'static str, replacement: &'static str) -> PresetRule {
    PresetRule {
        pattern,
        replacement,
        regex: true,
    }
}

/// 内置预设
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    ignore_case: bool,
    rules: &'static [PresetRule],
}

impl Preset {
    /// 规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 是否忽略大小写
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// 展开为规则描述
    pub fn specs(&self) -> Vec<RuleSpec> {
        self.rules
            .iter()
            .map(|r| {
                let spec = if r.regex {
                    RuleSpec::regex(r.pattern, r.replacement)
                } else {
                    RuleSpec::literal(r.pattern, r.replacement)
                };
                spec.ignore_case(self.ignore_case)
            })
            .collect()
    }
}

/// 全部内置预设
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "curve-to-x3d-dental",
        description: "Contextual Curve -> X3D DENTAL in titles, alt text, spans and prose",
        ignore_case: false,
        rules: &[
            literal("| CURVE</title>", "| X3D DENTAL</title>"),
            literal("CURVE |", "X3D DENTAL |"),
            literal("CURVE -", "X3D DENTAL -"),
            literal(r#"alt="Curve Logo""#, r#"alt="X3D DENTAL Logo""#),
            literal(r#"alt="Curve""#, r#"alt="X3D DENTAL""#),
            literal(">Curve</span>", ">X3D DENTAL</span>"),
            literal("At CURVE,", "At X3D DENTAL,"),
            literal(
                r#"Welcome to <span id="welcome-branch-display">Curve</span>"#,
                r#"Welcome to <span id="welcome-branch-display">X3D DENTAL</span>"#,
            ),
        ],
    },
    Preset {
        name: "x3d-dental-compact",
        description: "X3D DENTAL -> X3DENTAL, x3d dental -> x3dental",
        ignore_case: false,
        rules: &[
            literal("X3D DENTAL", "X3DENTAL"),
            literal("x3d dental", "x3dental"),
        ],
    },
    Preset {
        name: "x3dental",
        description: "Any case of X3D DENTAL, X3DENTAL or CURVE -> x3dental",
        ignore_case: true,
        rules: &[
            literal("X3D DENTAL", "x3dental"),
            literal("X3DENTAL", "x3dental"),
            literal("CURVE", "x3dental"),
        ],
    },
    Preset {
        name: "x3dental-whitespace",
        description: "Like x3dental, but X3D and DENTAL may be separated by any whitespace",
        ignore_case: true,
        rules: &[
            regex(r"X3D\s+DENTAL", "x3dental"),
            literal("X3DENTAL", "x3dental"),
            literal("CURVE", "x3dental"),
        ],
    },
];

/// 按名称查找预设
pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| RebrandError::UnknownPreset(name.to_string()))
}
