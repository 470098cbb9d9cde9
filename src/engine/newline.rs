//! # 换行符处理
//!
//! 默认原样保留换行符；可选统一为 LF 或 CRLF。
//!
//! ## 依赖关系
//! - 被 `engine/replacer.rs` 使用

use std::borrow::Cow;

/// 换行符模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewlineMode {
    /// 不做任何换行符转换
    #[default]
    Preserve,
    /// 统一为 `\n`
    Lf,
    /// 统一为 `\r\n`
    Crlf,
}

impl NewlineMode {
    /// 按模式处理文本
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            NewlineMode::Preserve => Cow::Borrowed(text),
            NewlineMode::Lf => {
                if text.contains("\r\n") {
                    Cow::Owned(text.replace("\r\n", "\n"))
                } else {
                    Cow::Borrowed(text)
                }
            }
            NewlineMode::Crlf => {
                let lf = NewlineMode::Lf.apply(text);
                if lf.contains('\n') {
                    Cow::Owned(lf.replace('\n', "\r\n"))
                } else {
                    Cow::Borrowed(text)
                }
            }
        }
    }
}

impl std::fmt::Display for NewlineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewlineMode::Preserve => write!(f, "preserve"),
            NewlineMode::Lf => write!(f, "lf"),
            NewlineMode::Crlf => write!(f, "crlf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_keeps_mixed_endings() {
        let text = "a\r\nb\nc\r\n";
        assert_eq!(NewlineMode::Preserve.apply(text), text);
    }

    #[test]
    fn test_lf_normalization() {
        assert_eq!(NewlineMode::Lf.apply("a\r\nb\nc"), "a\nb\nc");
        assert!(matches!(NewlineMode::Lf.apply("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_crlf_normalization() {
        assert_eq!(NewlineMode::Crlf.apply("a\r\nb\nc"), "a\r\nb\r\nc");
        assert_eq!(NewlineMode::Crlf.apply("single line"), "single line");
    }
}
