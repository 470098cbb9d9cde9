//! # 文档替换器
//!
//! 对单个文档执行完整的 读取 → 变换 → 比较 → 原子写回 流程。
//! 文档之间没有任何共享状态，`Replacer` 可在多线程中共享。
//!
//! ## 依赖关系
//! - 被 `commands/replace.rs` 作为 `BatchRunner` 的处理器调用
//! - 使用 `engine/codec.rs`, `engine/newline.rs`, `utils/atomic.rs`

use super::{NewlineMode, TextCodec};
use crate::error::{RebrandError, Result};
use crate::models::{Document, Processed, RuleSet};
use crate::utils::atomic;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// 文档替换器
#[derive(Debug, Clone)]
pub struct Replacer {
    rules: RuleSet,
    codec: TextCodec,
    newline: NewlineMode,
    dry_run: bool,
}

impl Replacer {
    /// 使用 UTF-8、保留换行符创建替换器
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            codec: TextCodec::default(),
            newline: NewlineMode::Preserve,
            dry_run: false,
        }
    }

    /// 设置字符编码
    pub fn with_codec(mut self, codec: TextCodec) -> Self {
        self.codec = codec;
        self
    }

    /// 设置换行符模式
    pub fn with_newline(mut self, newline: NewlineMode) -> Self {
        self.newline = newline;
        self
    }

    /// 设置 dry-run（只计算不写回）
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 变换文本：先执行规则集，再处理换行符
    pub fn transform<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        let (replaced, count) = self.rules.apply(text);
        let normalized = match replaced {
            Cow::Borrowed(t) => self.newline.apply(t),
            Cow::Owned(t) => Cow::Owned(self.newline.apply(&t).into_owned()),
        };
        (normalized, count)
    }

    /// 读取文档
    pub fn read(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).map_err(|e| RebrandError::DocumentReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let content = self.codec.decode(path, &bytes)?;
        Ok(Document::new(path, content))
    }

    /// 处理单个文档
    ///
    /// 内容不变时不触碰文件；内容改变时（非 dry-run）原子写回。
    pub fn process(&self, path: &Path) -> Result<Processed> {
        let document = self.read(path)?;
        let (text, replacements) = self.transform(&document.content);

        if text == document.content {
            return Ok(Processed {
                changed: false,
                replacements,
            });
        }

        // dry-run 也要编码，确保与实际运行报告一致
        let bytes = self.codec.encode(path, &text)?;
        if !self.dry_run {
            atomic::write_atomic(path, &bytes).map_err(|e| RebrandError::DocumentWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
        }

        Ok(Processed {
            changed: true,
            replacements,
        })
    }
}
