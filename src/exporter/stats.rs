//! 导出统计信息模块

use std::time::{Duration, Instant};

/// 导出统计信息
#[derive(Debug, Default, Clone)]
pub struct ExportStats {
    /// 已导出的语句条数
    pub exported_statements: usize,
    /// 已导出的错误条数
    pub exported_errors: usize,
    /// 导出失败的批次数
    pub failed_batches: usize,
    /// 导出开始时间
    pub start_time: Option<Instant>,
    /// 导出完成时间
    pub end_time: Option<Instant>,
}

impl ExportStats {
    /// 创建新的统计信息，记录开始时间
    pub fn new() -> Self {
        Self { start_time: Some(Instant::now()), ..Default::default() }
    }

    /// 标记导出完成，记录结束时间
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// 计算导出持续时间
    pub fn duration(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }

    /// 已导出的总条数
    pub fn total_records(&self) -> usize {
        self.exported_statements + self.exported_errors
    }

    /// 合并其他统计信息
    pub fn merge(&mut self, other: &ExportStats) {
        self.exported_statements += other.exported_statements;
        self.exported_errors += other.exported_errors;
        self.failed_batches += other.failed_batches;

        // 保持最早的开始时间
        self.start_time = match (self.start_time, other.start_time) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        // 保持最晚的结束时间
        self.end_time = match (self.end_time, other.end_time) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }
}

impl std::fmt::Display for ExportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "语句: {}, 错误: {}, 失败批次: {}",
            self.exported_statements, self.exported_errors, self.failed_batches
        )?;

        if let Some(duration) = self.duration() {
            write!(f, ", 耗时: {:.2}s", duration.as_secs_f64())?;
        }
        Ok(())
    }
}
