//! # 统一错误处理模块
//!
//! 定义 rebrand 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// rebrand 统一错误类型
#[derive(Error, Debug)]
pub enum RebrandError {
    // ─────────────────────────────────────────────────────────────
    // 目录与文档 I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read document: {path}")]
    DocumentReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document is not valid {encoding}: {path}")]
    EncodingError { path: String, encoding: String },

    #[error("Failed to write document: {path}")]
    DocumentWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 规则错误
    // ─────────────────────────────────────────────────────────────
    #[error("Rule set is empty: supply --rules, --rule or --preset")]
    EmptyRuleSet,

    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("Failed to load rules file: {path}\nReason: {reason}")]
    RulesFileError { path: String, reason: String },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 批处理结果
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} document(s) failed")]
    BatchIncomplete { failed: usize, total: usize },

    #[error("Rule set has {0} idempotence hazard(s)")]
    IdempotenceHazards(usize),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl RebrandError {
    /// 是否属于读取阶段的错误（编码错误按读取错误处理）
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            RebrandError::DocumentReadError { .. } | RebrandError::EncodingError { .. }
        )
    }

    /// 出错文档的路径（如有）
    pub fn document_path(&self) -> Option<&str> {
        match self {
            RebrandError::DocumentReadError { path, .. }
            | RebrandError::EncodingError { path, .. }
            | RebrandError::DocumentWriteError { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RebrandError>;
