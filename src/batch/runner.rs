//! # 批量执行器
//!
//! 对文档路径序列逐个执行处理器，汇总为运行报告。
//!
//! ## 功能
//! - 默认顺序执行，按收集顺序报告
//! - `jobs != 1` 时基于 rayon 并行执行，报告按路径稳定排序
//! - fail-fast：首个错误终止运行并返回该错误
//! - best-effort：错误记录为失败条目，继续处理其余文档
//!
//! ## 依赖关系
//! - 被 `commands/replace.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{RebrandError, Result};
use crate::models::{Processed, ReportEntry, RunReport};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// 单个文档出错时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// 首个错误即终止整个运行
    #[default]
    FailFast,
    /// 记录错误并继续
    BestEffort,
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数（1 = 顺序执行）
    jobs: usize,
    /// 错误处理策略
    policy: FailurePolicy,
    /// 并行时是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建批量执行器；`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize, policy: FailurePolicy) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            policy,
            show_progress: false,
        }
    }

    /// 顺序执行器
    pub fn sequential(policy: FailurePolicy) -> Self {
        Self::new(1, policy)
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 执行批处理
    ///
    /// `observe` 对每个报告条目按报告顺序调用一次：顺序模式下随处理进行，
    /// 并行模式下在全部完成并排序之后。
    pub fn run<I, F, O>(&self, documents: I, processor: F, mut observe: O) -> Result<RunReport>
    where
        I: IntoIterator<Item = Result<PathBuf>>,
        F: Fn(&Path) -> Result<Processed> + Sync + Send,
        O: FnMut(&ReportEntry),
    {
        if self.jobs <= 1 {
            return self.run_sequential(documents, processor, observe);
        }

        let report = self.run_parallel(documents, processor)?;
        for entry in report.entries() {
            observe(entry);
        }
        Ok(report)
    }

    fn run_sequential<I, F, O>(&self, documents: I, processor: F, mut observe: O) -> Result<RunReport>
    where
        I: IntoIterator<Item = Result<PathBuf>>,
        F: Fn(&Path) -> Result<Processed>,
        O: FnMut(&ReportEntry),
    {
        let mut report = RunReport::default();

        for document in documents {
            let result = document.and_then(|path| processor(&path).map(|p| (path, p)));
            let entry = match result {
                Ok((path, processed)) => ReportEntry::from_processed(path, processed),
                Err(e) => self.recover(e)?,
            };
            observe(&entry);
            report.push(entry);
        }

        Ok(report)
    }

    fn run_parallel<I, F>(&self, documents: I, processor: F) -> Result<RunReport>
    where
        I: IntoIterator<Item = Result<PathBuf>>,
        F: Fn(&Path) -> Result<Processed> + Sync + Send,
    {
        let mut report = RunReport::default();
        let mut paths = Vec::new();

        // 目录列举本身是顺序的
        for document in documents {
            match document {
                Ok(path) => paths.push(path),
                Err(e) => report.push(self.recover(e)?),
            }
        }

        let pb = if self.show_progress {
            progress::create_progress_bar(paths.len() as u64, "Rewriting")
        } else {
            progress::create_hidden_bar()
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| RebrandError::InvalidArgument(format!("Cannot start thread pool: {}", e)))?;

        let aborted = AtomicBool::new(false);
        let fail_fast = self.policy == FailurePolicy::FailFast;

        let results: Vec<Option<(PathBuf, Result<Processed>)>> = pool.install(|| {
            paths
                .into_par_iter()
                .map(|path| {
                    if aborted.load(Ordering::Relaxed) {
                        return None;
                    }
                    let result = processor(&path);
                    if result.is_err() && fail_fast {
                        aborted.store(true, Ordering::Relaxed);
                    }
                    pb.inc(1);
                    Some((path, result))
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut first_error: Option<(PathBuf, RebrandError)> = None;
        for (path, result) in results.into_iter().flatten() {
            match result {
                Ok(processed) => report.push(ReportEntry::from_processed(path, processed)),
                Err(e) if fail_fast => {
                    let earlier = first_error.as_ref().map_or(true, |(p, _)| path < *p);
                    if earlier {
                        first_error = Some((path, e));
                    }
                }
                Err(e) => report.push(ReportEntry::failed(path, error_reason(&e))),
            }
        }

        if let Some((_, e)) = first_error {
            return Err(e);
        }

        report.sort_by_path();
        Ok(report)
    }

    /// 按策略处理单个文档的错误
    fn recover(&self, error: RebrandError) -> Result<ReportEntry> {
        match self.policy {
            FailurePolicy::FailFast => Err(error),
            FailurePolicy::BestEffort => {
                let path = error.document_path().unwrap_or("?").to_string();
                Ok(ReportEntry::failed(PathBuf::from(path), error_reason(&error)))
            }
        }
    }
}

/// 错误描述（含底层原因）
pub fn error_reason(error: &RebrandError) -> String {
    use std::error::Error;

    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}
