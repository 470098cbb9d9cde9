//! # CSV 规则文件解析器
//!
//! ## 格式说明
//! ```text
//! pattern,replacement,ignore_case,regex,expand
//! # 以 # 开头的行是注释
//! | CURVE</title>,| X3D DENTAL</title>
//! X3D\s+DENTAL,x3dental,yes,yes
//! ```
//!
//! - 必须有表头；只有 `pattern` 和 `replacement` 两列是必需的
//! - 布尔列接受 `true/false/yes/no/1/0`，空值为 false
//! - 字段不做 trim；以 `#` 开头的模式需要加引号
//!
//! ## 依赖关系
//! - 被 `rules/mod.rs` 使用
//! - 使用 `csv` + `serde`

use crate::error::{RebrandError, Result};
use crate::models::RuleSpec;

use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// 解析规则文件
pub fn parse_rules_file(path: &Path) -> Result<Vec<RuleSpec>> {
    let content = fs::read_to_string(path).map_err(|e| RebrandError::RulesFileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_rules_content(&content, &path.display().to_string())
}

/// 从字符串内容解析规则
pub fn parse_rules_content(content: &str, source_name: &str) -> Result<Vec<RuleSpec>> {
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(Trim::None)
        .from_reader(content.as_bytes());

    let mut specs = Vec::new();
    for record in reader.deserialize::<RuleSpec>() {
        let spec = record.map_err(|e| RebrandError::RulesFileError {
            path: source_name.to_string(),
            reason: e.to_string(),
        })?;
        specs.push(spec);
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_rules() {
        let content = "pattern,replacement\nX3D DENTAL,X3DENTAL\nx3d dental,x3dental\n";
        let specs = parse_rules_content(content, "rules.csv").unwrap();
        assert_eq!(
            specs,
            vec![
                RuleSpec::literal("X3D DENTAL", "X3DENTAL"),
                RuleSpec::literal("x3d dental", "x3dental"),
            ]
        );
    }

    #[test]
    fn test_parse_flags_comments_and_quoting() {
        let content = r#"pattern,replacement,ignore_case,regex,expand
# canonical brand
X3D\s+DENTAL,x3dental,yes,true,
CURVE,x3dental,1,,

"alt=""Curve Logo""","alt=""x3dental Logo""",no,no,no
"#;
        let specs = parse_rules_content(content, "rules.csv").unwrap();
        assert_eq!(specs.len(), 3);

        assert!(specs[0].regex);
        assert!(specs[0].ignore_case);
        assert!(!specs[0].expand);

        assert!(!specs[1].regex);
        assert!(specs[1].ignore_case);

        assert_eq!(specs[2].pattern, r#"alt="Curve Logo""#);
        assert_eq!(specs[2].replacement, r#"alt="x3dental Logo""#);
    }

    #[test]
    fn test_spaces_are_significant() {
        let content = "pattern,replacement\nCURVE |,X3D DENTAL |\n";
        let specs = parse_rules_content(content, "rules.csv").unwrap();
        assert_eq!(specs[0].pattern, "CURVE |");
        assert_eq!(specs[0].replacement, "X3D DENTAL |");
    }

    #[test]
    fn test_invalid_boolean_is_rejected() {
        let content = "pattern,replacement,ignore_case\nCURVE,x3dental,sometimes\n";
        let result = parse_rules_content(content, "rules.csv");
        assert!(matches!(result, Err(RebrandError::RulesFileError { .. })));
    }

    #[test]
    fn test_missing_replacement_column_is_rejected() {
        let content = "pattern\nCURVE\n";
        assert!(parse_rules_content(content, "rules.csv").is_err());
    }
}
