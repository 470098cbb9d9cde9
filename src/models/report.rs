//! # 运行报告数据模型
//!
//! 记录一次运行中每个文档的处理结果，仅用于观察与导出。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/replace.rs` 使用
//! - 使用 `csv` + `serde` 导出报告

use crate::error::{RebrandError, Result};

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 单个文档的处理结果（由处理器返回）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Processed {
    /// 内容是否改变（dry-run 时表示"将会改变"）
    pub changed: bool,
    /// 替换次数
    pub replacements: usize,
}

/// 报告中记录的文档状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 内容改变并已写回
    Updated,
    /// 内容未改变，文件未被触碰
    Unchanged,
    /// 处理失败（仅在 best-effort 策略下出现）
    Failed(String),
}

impl Outcome {
    /// 状态标签
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Updated => "updated",
            Outcome::Unchanged => "unchanged",
            Outcome::Failed(_) => "failed",
        }
    }
}

/// 报告条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub replacements: usize,
}

impl ReportEntry {
    /// 由处理结果构造条目
    pub fn from_processed(path: PathBuf, processed: Processed) -> Self {
        let outcome = if processed.changed {
            Outcome::Updated
        } else {
            Outcome::Unchanged
        };
        Self {
            path,
            outcome,
            replacements: processed.replacements,
        }
    }

    /// 构造失败条目
    pub fn failed(path: PathBuf, reason: String) -> Self {
        Self {
            path,
            outcome: Outcome::Failed(reason),
            replacements: 0,
        }
    }
}

/// CSV 导出行
#[derive(Serialize)]
struct ReportRow<'a> {
    path: String,
    status: &'a str,
    replacements: usize,
    error: &'a str,
}

/// 运行报告
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    entries: Vec<ReportEntry>,
}

impl RunReport {
    /// 追加条目
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// 全部条目（按处理顺序）
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// 按路径稳定排序
    pub fn sort_by_path(&mut self) {
        self.entries.sort_by(|a, b| a.path.cmp(&b.path));
    }

    /// 条目总数
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// 已更新的文档数
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Updated))
    }

    /// 未改变的文档数
    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    /// 失败的文档数
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    /// 全部替换次数
    pub fn replacements(&self) -> usize {
        self.entries.iter().map(|e| e.replacements).sum()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    /// 导出为 CSV；没有条目时只写表头
    pub fn write_csv(&self, output_path: &Path) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(output_path)?;
        wtr.write_record(["path", "status", "replacements", "error"])?;

        for entry in &self.entries {
            let error = match &entry.outcome {
                Outcome::Failed(reason) => reason.as_str(),
                _ => "",
            };
            wtr.serialize(ReportRow {
                path: entry.path.display().to_string(),
                status: entry.outcome.label(),
                replacements: entry.replacements,
                error,
            })?;
        }

        wtr.flush().map_err(|e| RebrandError::DocumentWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_report() -> RunReport {
        let mut report = RunReport::default();
        report.push(ReportEntry::from_processed(
            PathBuf::from("b.html"),
            Processed {
                changed: true,
                replacements: 3,
            },
        ));
        report.push(ReportEntry::from_processed(
            PathBuf::from("a.html"),
            Processed {
                changed: false,
                replacements: 0,
            },
        ));
        report.push(ReportEntry::failed(
            PathBuf::from("c.html"),
            "Document is not valid UTF-8: c.html".to_string(),
        ));
        report
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();
        assert_eq!(report.total(), 3);
        assert_eq!(report.updated(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.replacements(), 3);
    }

    #[test]
    fn test_sort_by_path() {
        let mut report = sample_report();
        report.sort_by_path();
        let paths: Vec<_> = report.entries().iter().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.html"),
                PathBuf::from("b.html"),
                PathBuf::from("c.html")
            ]
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.csv");
        sample_report().write_csv(&out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("path,status,replacements,error"));
        assert_eq!(lines.next(), Some("b.html,updated,3,"));
        assert_eq!(lines.next(), Some("a.html,unchanged,0,"));
        assert_eq!(
            lines.next(),
            Some("c.html,failed,0,Document is not valid UTF-8: c.html")
        );
    }

    #[test]
    fn test_write_csv_empty_report_has_header() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("empty.csv");
        RunReport::default().write_csv(&out).unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "path,status,replacements,error\n"
        );
    }
}
