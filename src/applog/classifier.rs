//! 日志行分类
//!
//! 对单行文本做标记检测与字段提取。所有函数都是纯函数，
//! 找不到时返回 `None`/`false`，不会产生错误。

use lazy_static::lazy_static;
use regex::Regex;

/// 语句模板行的标记
pub const PREPARING_MARKER: &str = "Preparing:";
/// 参数行的标记
pub const PARAMETERS_MARKER: &str = "Parameters:";
/// 调试级别标记
pub const DEBUG_MARKER: &str = "DEBUG";
/// 错误级别标记
pub const ERROR_MARKER: &str = "ERROR";
/// 服务分发行的标记，该行上出现的画面 ID 会记入线程上下文
pub const SERVICE_DISPATCH_MARKER: &str = "ServiceDispatcher";

lazy_static! {
    static ref THREAD_TAG_RE: Regex =
        Regex::new(r"--- \[\s*([^\]]*?)\s*\]").unwrap();
    static ref TIMESTAMP_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2} ").unwrap();
    static ref REQUEST_SCREEN_RE: Regex = Regex::new(
        r"\b(?:GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS)\s+\S*?/([A-Za-z]{2}\d{4})\b"
    )
    .unwrap();
    static ref DIRECT_SCREEN_RE: Regex = Regex::new(r"\b(MU\d{4})\b").unwrap();
}

/// 提取 `--- [thread]` 中的线程标识
pub fn thread_tag(line: &str) -> Option<&str> {
    THREAD_TAG_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| !tag.is_empty())
}

/// 行首是否为 `YYYY-MM-DD ` 日期
pub fn is_timestamped(line: &str) -> bool {
    TIMESTAMP_RE.is_match(line)
}

/// 行首 19 个字符（`YYYY-MM-DD HH:MM:SS`），行首无日期时为空串
pub fn timestamp_of(line: &str) -> String {
    if is_timestamped(line) {
        line.chars().take(19).collect()
    } else {
        String::new()
    }
}

/// 从 `POST /xx/MU0101` 这类请求行中提取画面 ID
pub fn request_screen_id(line: &str) -> Option<&str> {
    REQUEST_SCREEN_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 在整行中查找裸的画面 ID（`MU` + 4 位数字）
pub fn direct_screen_id(line: &str) -> Option<&str> {
    DIRECT_SCREEN_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 是否为语句模板行（同时包含 `DEBUG` 和 `Preparing:`）
pub fn is_statement_trigger(line: &str) -> bool {
    line.contains(DEBUG_MARKER) && line.contains(PREPARING_MARKER)
}

pub fn is_parameter_line(line: &str) -> bool {
    line.contains(PARAMETERS_MARKER)
}

pub fn is_error_trigger(line: &str) -> bool {
    line.contains(ERROR_MARKER)
}
