//! 日志文件读取
//!
//! 文件一次性读入内存，按行切分成 [`LogLine`] 数组。无效的 UTF-8 字节
//! 直接丢弃而不是报错，以兼容混合编码的日志。

use crate::applog::types::LogLine;
use crate::error::{AppLogError, Result};
use std::path::Path;

/// 读取整个日志文件
///
/// # Errors
/// 文件无法打开或读取时返回 [`AppLogError::ReadFile`]，其中包含路径和原因。
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<LogLine>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).map_err(|e| AppLogError::read_file(path, e))?;
    let text = decode_lossy(&bytes);

    let lines = lines_from_str(&text);
    #[cfg(feature = "logging")]
    tracing::debug!("读取日志文件 {}: {} 行", path.display(), lines.len());
    Ok(lines)
}

/// 宽松解码：无效字节序列被丢弃
pub fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            text
        }
    }
}

/// 将文本切分为行数组，行尾的 `\r\n` / `\n` 被去除
pub fn lines_from_str(text: &str) -> Vec<LogLine> {
    text.lines()
        .enumerate()
        .map(|(i, line)| LogLine::new(i, line))
        .collect()
}
