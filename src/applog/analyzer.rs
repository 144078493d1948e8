//! 解析入口
//!
//! 一次解析对应一个全新的 [`ThreadContext`]。按文件顺序单遍扫描：每一行先
//! 交给线程上下文观察，再判断是否为语句模板行或错误行，因此某一行的画面
//! 归属只取决于它之前（含自身）已经扫描过的行。

use crate::applog::correlator::ThreadContext;
use crate::applog::error_block::extract_error;
use crate::applog::io::{lines_from_str, load_lines};
use crate::applog::reconstructor::StatementReconstructor;
use crate::applog::types::{AnalysisResult, ErrorEntry, LogLine, StatementEntry};
use crate::config::AnalysisOptions;
use crate::error::Result;
use std::path::Path;

/// 应用日志解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalyzer {
    options: AnalysisOptions,
}

impl LogAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// 解析日志文件
    ///
    /// # Errors
    /// 文件读取失败时返回错误，不返回部分结果。
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        let lines = load_lines(path)?;
        Ok(self.analyze_lines(&lines))
    }

    /// 解析内存中的日志文本
    pub fn analyze_str(&self, text: &str) -> AnalysisResult {
        self.analyze_lines(&lines_from_str(text))
    }

    /// 解析已读入的行数组
    pub fn analyze_lines(&self, lines: &[LogLine]) -> AnalysisResult {
        let mut ctx = ThreadContext::new();
        let reconstructor = StatementReconstructor::new(lines, self.options);
        let mut statements = Vec::new();
        let mut errors = Vec::new();
        // 错误块的续行不再作为新的错误行检查
        let mut error_resume = 0usize;

        for (i, line) in lines.iter().enumerate() {
            ctx.observe(line.as_str());

            statements.extend(reconstructor.reconstruct(i, &ctx));

            if i >= error_resume {
                if let Some((entry, next)) = extract_error(lines, i, &ctx) {
                    errors.push(entry);
                    error_resume = next;
                }
            }
        }

        sort_statements(&mut statements);
        sort_errors(&mut errors);

        #[cfg(feature = "logging")]
        tracing::info!(
            "解析完成: {} 行, {} 条语句, {} 个错误, {} 个线程关联画面",
            lines.len(),
            statements.len(),
            errors.len(),
            ctx.len()
        );

        AnalysisResult { statements, errors }
    }
}

/// 按时间戳降序排列，时间戳相同（含为空）时保持原有顺序
pub fn sort_statements(entries: &mut [StatementEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// 按时间戳降序排列，时间戳相同（含为空）时保持原有顺序
pub fn sort_errors(entries: &mut [ErrorEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
