//! # replace 命令实现
//!
//! 对目录下匹配的文档执行有序替换。
//!
//! ## 功能
//! - 组装规则集（预设 → 规则文件 → 内联规则）
//! - 收集文档、按策略批量处理
//! - 逐文档输出 updated / no change
//! - 可选导出 CSV 运行报告
//!
//! ## 依赖关系
//! - 使用 `cli/replace.rs` 定义的参数
//! - 使用 `rules/`, `engine/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, DocumentCollector, FailurePolicy, NameFilter};
use crate::cli::replace::ReplaceArgs;
use crate::engine::{NewlineMode, Replacer, TextCodec};
use crate::error::{RebrandError, Result};
use crate::models::{Outcome, ReportEntry, RunReport};
use crate::utils::output;

/// 执行 replace 命令
pub fn execute(args: ReplaceArgs) -> Result<()> {
    if args.dry_run {
        output::print_header("Rebranding documents (dry run)");
    } else {
        output::print_header("Rebranding documents");
    }

    let report = run(&args)?;

    if let Some(ref path) = args.report {
        report.write_csv(path)?;
        output::print_info(&format!("Run report saved to '{}'", path.display()));
    }

    if report.total() == 0 {
        output::print_warning(&format!(
            "No documents matched under {}",
            args.dir.display()
        ));
        return Ok(());
    }

    let verb = if args.dry_run { "would be updated" } else { "updated" };
    output::print_done(&format!(
        "{} of {} document(s) {} ({} replacement(s), {} unchanged, {} failed)",
        report.updated(),
        report.total(),
        verb,
        report.replacements(),
        report.unchanged(),
        report.failed()
    ));

    if report.failed() > 0 {
        return Err(RebrandError::BatchIncomplete {
            failed: report.failed(),
            total: report.total(),
        });
    }

    Ok(())
}

/// 执行替换并返回运行报告
pub fn run(args: &ReplaceArgs) -> Result<RunReport> {
    let rules = args.rules.sources().load()?;
    let codec = TextCodec::for_label(&args.encoding)?;

    let filter = match args.glob {
        Some(ref pattern) => NameFilter::glob(pattern)?,
        None => NameFilter::suffix(&args.ext),
    };
    let collector = DocumentCollector::new(&args.dir, filter)?;

    let newline: NewlineMode = args.newline.into();

    if !args.quiet {
        output::print_info(&format!(
            "Applying {} rule(s) to '{}' in {} ({}, newline: {})",
            rules.len(),
            collector.filter(),
            collector.dir().display(),
            codec.name(),
            newline
        ));
    }

    let replacer = Replacer::new(rules)
        .with_codec(codec)
        .with_newline(newline)
        .dry_run(args.dry_run);

    let policy = if args.keep_going {
        FailurePolicy::BestEffort
    } else {
        FailurePolicy::FailFast
    };

    let quiet = args.quiet;
    let dry_run = args.dry_run;

    BatchRunner::new(args.jobs, policy)
        .with_progress(!quiet)
        .run(
            collector.into_documents(),
            |path| replacer.process(path),
            |entry| {
                if !quiet {
                    print_entry(entry, dry_run);
                }
            },
        )
}

/// 打印单个文档的处理结果
fn print_entry(entry: &ReportEntry, dry_run: bool) {
    let name = entry
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| entry.path.display().to_string());

    match &entry.outcome {
        Outcome::Updated => {
            let verb = if dry_run { "would update" } else { "updated" };
            output::print_success(&format!(
                "{}: {} ({} replacement(s))",
                name, verb, entry.replacements
            ));
        }
        Outcome::Unchanged => output::print_skip(&format!("{}: no change", name)),
        Outcome::Failed(reason) => output::print_error(&format!("{}: {}", name, reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::replace::NewlineArg;
    use crate::cli::rules::RuleArgs;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(dir: &Path) -> ReplaceArgs {
        ReplaceArgs {
            dir: dir.to_path_buf(),
            ext: ".html".to_string(),
            glob: None,
            rules: RuleArgs {
                presets: vec!["x3dental-whitespace".to_string()],
                ..Default::default()
            },
            encoding: "utf-8".to_string(),
            newline: NewlineArg::Preserve,
            keep_going: false,
            dry_run: false,
            jobs: 1,
            report: None,
            quiet: true,
        }
    }

    #[test]
    fn test_replace_rewrites_only_matching_documents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<title>CURVE</title>").unwrap();
        fs::write(dir.path().join("plain.html"), "<p>hello</p>").unwrap();
        fs::write(dir.path().join("app.js"), "const brand = 'Curve';").unwrap();

        let report = run(&args(dir.path())).unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.updated(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "<title>x3dental</title>"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("app.js")).unwrap(),
            "const brand = 'Curve';"
        );
    }

    #[test]
    fn test_replace_requires_existing_directory() {
        let dir = TempDir::new().unwrap();
        let result = run(&args(&dir.path().join("missing")));
        assert!(matches!(result, Err(RebrandError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_replace_requires_rules() {
        let dir = TempDir::new().unwrap();
        let mut args = args(dir.path());
        args.rules.presets.clear();
        assert!(matches!(run(&args), Err(RebrandError::EmptyRuleSet)));
    }

    #[test]
    fn test_keep_going_reports_failures() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), b"Curve \xC3").unwrap();
        fs::write(dir.path().join("b.html"), "Curve").unwrap();

        let mut args = args(dir.path());
        args.keep_going = true;
        let report = run(&args).unwrap();

        assert_eq!(report.failed(), 1);
        assert_eq!(report.updated(), 1);

        let err = execute(args).unwrap_err();
        assert!(matches!(
            err,
            RebrandError::BatchIncomplete {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_report_csv_is_written() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "Curve").unwrap();

        let mut args = args(dir.path());
        args.report = Some(out.path().join("report.csv"));
        execute(args).unwrap();

        let csv = fs::read_to_string(out.path().join("report.csv")).unwrap();
        assert!(csv.contains("index.html,updated,1,"));
    }

    #[test]
    fn test_empty_run_writes_header_only_report() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(dir.path().join("app.js"), "Curve").unwrap();

        let mut args = args(dir.path());
        args.report = Some(out.path().join("report.csv"));
        execute(args).unwrap();

        let csv = fs::read_to_string(out.path().join("report.csv")).unwrap();
        assert_eq!(csv, "path,status,replacements,error\n");
    }
}
