//! # 替换规则数据模型
//!
//! 定义单条替换规则 (`RuleSpec` / `Rule`) 与有序规则集 (`RuleSet`)。
//!
//! ## 语义
//! - 规则按顺序执行：前一条规则的输出是后一条规则的输入
//! - 每条规则替换全部不重叠的匹配
//! - 匹配模式默认按字面量处理，`regex = true` 时按正则表达式处理
//! - 替换文本默认按字面量处理，`expand = true` 时展开 `$1` / `${name}`
//!
//! ## 依赖关系
//! - 被 `rules/`, `engine/`, `commands/` 使用
//! - 使用 `regex` crate

use crate::error::{RebrandError, Result};

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// 规则的原始描述（来自规则文件、命令行或内置预设）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// 匹配模式
    pub pattern: String,
    /// 替换文本
    pub replacement: String,
    /// 是否忽略大小写
    #[serde(default, deserialize_with = "flexible_bool")]
    pub ignore_case: bool,
    /// 匹配模式是否为正则表达式
    #[serde(default, deserialize_with = "flexible_bool")]
    pub regex: bool,
    /// 替换文本是否展开捕获组引用
    #[serde(default, deserialize_with = "flexible_bool")]
    pub expand: bool,
}

impl RuleSpec {
    /// 创建大小写敏感的字面量规则
    pub fn literal(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            ignore_case: false,
            regex: false,
            expand: false,
        }
    }

    /// 创建正则规则
    pub fn regex(pattern: &str, replacement: &str) -> Self {
        Self {
            regex: true,
            ..Self::literal(pattern, replacement)
        }
    }

    /// 设置是否忽略大小写
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// 设置是否展开捕获组
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// 规则种类的显示名
    pub fn kind(&self) -> &'static str {
        if self.regex {
            "regex"
        } else {
            "literal"
        }
    }
}

/// 解析 `true/false/1/0/yes/no`，空值视为 false
fn flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("expected a boolean (true/false/yes/no/1/0), got '{}'", raw))
    })
}

/// 宽松布尔解析
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Some(false),
        "true" | "yes" | "y" | "1" => Some(true),
        _ => None,
    }
}

/// 编译后的规则
#[derive(Debug, Clone)]
pub struct Rule {
    spec: RuleSpec,
    matcher: Regex,
}

impl Rule {
    /// 编译规则
    pub fn compile(spec: RuleSpec) -> Result<Self> {
        if spec.pattern.is_empty() {
            return Err(RebrandError::InvalidRule {
                rule: format!("=> {}", spec.replacement),
                reason: "pattern is empty".to_string(),
            });
        }

        let source = if spec.regex {
            spec.pattern.clone()
        } else {
            regex::escape(&spec.pattern)
        };

        let matcher = RegexBuilder::new(&source)
            .case_insensitive(spec.ignore_case)
            .build()
            .map_err(|e| RebrandError::InvalidRule {
                rule: spec.pattern.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { spec, matcher })
    }

    /// 原始描述
    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    /// 对文本执行本规则，返回新文本与替换次数
    ///
    /// 替换结果与匹配文本相同的匹配不计数。无匹配时返回借用的原文本。
    pub fn apply<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        let mut count = 0;
        let replaced = self.matcher.replace_all(text, |caps: &Captures<'_>| {
            let replacement = if self.spec.expand {
                let mut dst = String::new();
                caps.expand(&self.spec.replacement, &mut dst);
                dst
            } else {
                self.spec.replacement.clone()
            };
            if replacement != caps[0] {
                count += 1;
            }
            replacement
        });
        (replaced, count)
    }
}

/// 幂等性隐患：某条规则的替换文本会被自身或后续规则再次改写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hazard {
    /// 产生替换文本的规则序号（从 0 开始）
    pub source: usize,
    /// 改写该替换文本的规则序号
    pub rewritten_by: usize,
    /// 改写前的替换文本
    pub replacement: String,
    /// 改写后的文本
    pub rewritten: String,
}

/// 有序规则集
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// 编译一组规则描述；空规则集视为错误
    pub fn compile(specs: Vec<RuleSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(RebrandError::EmptyRuleSet);
        }

        let rules = specs
            .into_iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// 规则列表
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 依次执行全部规则，返回最终文本与总替换次数
    pub fn apply<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        let mut current = Cow::Borrowed(text);
        let mut total = 0;

        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            if count > 0 {
                let next = next.into_owned();
                current = Cow::Owned(next);
                total += count;
            }
        }

        (current, total)
    }

    /// 检查幂等性隐患
    ///
    /// 对每条字面量替换文本，依次用自身及后续规则改写；若文本发生变化，
    /// 则重复执行规则集会产生额外修改。依赖上下文的匹配无法在此检出。
    pub fn hazards(&self) -> Vec<Hazard> {
        let mut hazards = Vec::new();

        for (i, rule) in self.rules.iter().enumerate() {
            if rule.spec.expand || rule.spec.replacement.is_empty() {
                continue;
            }

            let replacement = rule.spec.replacement.as_str();
            for (j, later) in self.rules.iter().enumerate().skip(i) {
                let (rewritten, count) = later.apply(replacement);
                if count > 0 && rewritten != replacement {
                    hazards.push(Hazard {
                        source: i,
                        rewritten_by: j,
                        replacement: replacement.to_string(),
                        rewritten: rewritten.into_owned(),
                    });
                    break;
                }
            }
        }

        hazards
    }
}
