//! 错误块提取
//!
//! 一个错误块由带时间戳的 `ERROR` 行及其后所有不带时间戳的续行组成
//! （通常是异常堆栈），直到下一条带时间戳的行为止。

use crate::applog::classifier::{self, ERROR_MARKER};
use crate::applog::correlator::ThreadContext;
use crate::applog::types::{ErrorEntry, LogLine};

/// 摘要中 ERROR 标记后的分隔符
const SUMMARY_SEPARATOR: &str = " - ";

/// 错误块在行数组中的结束位置（不含）
pub fn block_end(lines: &[LogLine], start: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| classifier::is_timestamped(line.as_str()))
        .map_or(lines.len(), |(j, _)| j)
}

/// 去掉 `ERROR` 标记及其后第一个 ` - ` 之前的内容
///
/// 没有标记或分隔符时返回原行。
pub fn summarize(first_line: &str) -> String {
    first_line
        .find(ERROR_MARKER)
        .and_then(|pos| {
            let after = &first_line[pos + ERROR_MARKER.len()..];
            after
                .find(SUMMARY_SEPARATOR)
                .map(|sep| after[sep + SUMMARY_SEPARATOR.len()..].trim().to_string())
        })
        .unwrap_or_else(|| first_line.to_string())
}

/// 提取从 `start` 开始的错误块
///
/// 返回错误条目以及下一次扫描应开始的行号；`start` 不是错误行时返回 `None`。
pub fn extract_error(
    lines: &[LogLine],
    start: usize,
    ctx: &ThreadContext,
) -> Option<(ErrorEntry, usize)> {
    let first = lines.get(start)?.as_str();
    if !classifier::is_error_trigger(first) {
        return None;
    }

    let end = block_end(lines, start);
    let details = lines[start..end]
        .iter()
        .map(|line| line.as_str().trim_end_matches(['\r', '\n']))
        .collect::<Vec<_>>()
        .join("\n");

    let screen_id = classifier::direct_screen_id(&details)
        .or_else(|| classifier::thread_tag(first).and_then(|tag| ctx.resolve(tag)))
        .map(str::to_string);

    let entry = ErrorEntry {
        timestamp: classifier::timestamp_of(first),
        screen_id,
        summary: summarize(first),
        details,
    };

    #[cfg(feature = "logging")]
    tracing::trace!(line = start, lines = end - start, "提取错误块");

    Some((entry, end))
}
