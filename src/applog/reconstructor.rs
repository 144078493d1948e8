//! SQL 语句还原
//!
//! 对每个 `Preparing:` 模板行，在附近若干行内寻找同线程的 `Parameters:` 行，
//! 将参数按顺序代入 `?` 占位符，每个参数块生成一条 [`StatementEntry`]。
//!
//! ## 查找规则
//!
//! ```text
//!   i-6 ─┐
//!        │  参数窗口：[i-6, i+6]，不含 i，按行号升序；
//!    i ──┤  两行都带线程标识且不同则跳过
//!        │
//!   i+6 ─┘  窗口内一个都没有 → 兜底向后 [i+1, i+5] 取第一个参数行（不看线程）
//!           仍然没有 → 用空参数块，模板原样输出
//! ```
//!
//! 窗口查找都是纯函数，可以脱离完整日志文件单独测试。

use crate::applog::classifier::{self, PREPARING_MARKER};
use crate::applog::correlator::ThreadContext;
use crate::applog::params::parse_parameters;
use crate::applog::types::{LogLine, ParameterBlock, ParameterToken, StatementEntry};
use crate::config::AnalysisOptions;
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::RangeInclusive;

/// 调用链与 SQL 之间的分隔符
pub const STATEMENT_SEPARATOR: &str = ": ==>";

lazy_static! {
    static ref NUMERIC_RE: Regex = Regex::new(r"^-?\d+(?:\.\d+)?$").unwrap();
}

/// `index` 前后 `radius` 行的闭区间，按文件范围截断
///
/// `len` 必须大于 `index`。
pub fn window_bounds(
    index: usize,
    radius: usize,
    len: usize,
) -> RangeInclusive<usize> {
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).min(len.saturating_sub(1));
    start..=end
}

/// 在窗口内收集参数块
///
/// `thread_filter` 为触发行的线程标识；窗口行也带标识且不同时跳过该行。
/// 解析为空的参数行不计入。结果按行号升序。
pub fn collect_parameter_blocks(
    lines: &[LogLine],
    index: usize,
    radius: usize,
    thread_filter: Option<&str>,
) -> Vec<ParameterBlock> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for j in window_bounds(index, radius, lines.len()) {
        if j == index {
            continue;
        }
        let text = lines[j].as_str();
        if !classifier::is_parameter_line(text) {
            continue;
        }
        if let (Some(want), Some(tag)) = (thread_filter, classifier::thread_tag(text)) {
            if want != tag {
                continue;
            }
        }
        let block = parse_parameters(text);
        if !block.is_empty() {
            blocks.push(block);
        }
    }
    blocks
}

/// 兜底：从 `index + 1` 开始向后最多 `lookahead` 行，取第一个参数行
pub fn fallback_parameter_block(
    lines: &[LogLine],
    index: usize,
    lookahead: usize,
) -> Option<ParameterBlock> {
    lines
        .iter()
        .skip(index + 1)
        .take(lookahead)
        .find(|line| classifier::is_parameter_line(line.as_str()))
        .map(|line| parse_parameters(line.as_str()))
        .filter(|block| !block.is_empty())
}

/// 在 `index` 前后 `radius` 行内按行号升序查找第一个裸画面 ID
pub fn nearby_screen_id(
    lines: &[LogLine],
    index: usize,
    radius: usize,
) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    window_bounds(index, radius, lines.len())
        .find_map(|j| classifier::direct_screen_id(lines[j].as_str()))
        .map(str::to_string)
}

/// 取触发行或其下一行上的线程标识
pub fn trigger_thread_tag(lines: &[LogLine], index: usize) -> Option<&str> {
    lines.get(index).and_then(|l| classifier::thread_tag(l.as_str())).or_else(
        || lines.get(index + 1).and_then(|l| classifier::thread_tag(l.as_str())),
    )
}

/// 参数值在 SQL 中的写法
///
/// 数字（整数或小数）且声明类型不含 `String` 时原样输出，其余一律加单引号。
/// 值中的单引号不做转义。
pub fn format_value(token: &ParameterToken) -> String {
    if NUMERIC_RE.is_match(&token.value) && !token.declared_type.contains("String") {
        token.value.clone()
    } else {
        format!("'{}'", token.value)
    }
}

/// 从左到右依次替换 `?`，参数用完后剩余的 `?` 原样保留
pub fn substitute(template: &str, block: &[ParameterToken]) -> String {
    let mut out = String::with_capacity(template.len() + block.len() * 8);
    let mut values = block.iter();
    for ch in template.chars() {
        if ch == '?' {
            match values.next() {
                Some(token) => out.push_str(&format_value(token)),
                None => out.push('?'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// SQL 首个单词的大写形式，空白 SQL 返回空串
pub fn command_kind(sql: &str) -> String {
    sql.split_whitespace().next().map(str::to_uppercase).unwrap_or_default()
}

/// 拆分触发行，返回 (调用方法名, 模板 SQL)
///
/// 缺少 `: ==>`、调用链为空或缺少 `Preparing:` 时返回 `None`。
pub fn split_trigger(line: &str) -> Option<(String, String)> {
    let (prefix, remainder) = line.split_once(STATEMENT_SEPARATOR)?;
    let caller = prefix.split_whitespace().last()?;
    let function = match caller.rfind('.') {
        Some(pos) => &caller[pos + 1..],
        None => caller,
    };
    let pos = remainder.find(PREPARING_MARKER)?;
    let template = remainder[pos + PREPARING_MARKER.len()..].trim();
    Some((function.to_string(), template.to_string()))
}

/// 语句还原器，持有整份日志行
pub struct StatementReconstructor<'a> {
    lines: &'a [LogLine],
    options: AnalysisOptions,
}

impl<'a> StatementReconstructor<'a> {
    pub fn new(lines: &'a [LogLine], options: AnalysisOptions) -> Self {
        Self { lines, options }
    }

    /// 还原第 `index` 行的语句
    ///
    /// 非触发行或格式不完整的行返回空列表。`ctx` 只需观察到 `index` 为止。
    pub fn reconstruct(
        &self,
        index: usize,
        ctx: &ThreadContext,
    ) -> Vec<StatementEntry> {
        let Some(line) = self.lines.get(index) else {
            return Vec::new();
        };
        let text = line.as_str();
        if !classifier::is_statement_trigger(text) {
            return Vec::new();
        }

        let Some((originating_function, template_sql)) = split_trigger(text)
        else {
            #[cfg(feature = "logging")]
            tracing::trace!(line = index, "模板行缺少分隔符或 Preparing 标记，跳过");
            return Vec::new();
        };

        let timestamp = classifier::timestamp_of(text);
        let blocks = self.parameter_blocks(index);
        let screen_id = self.screen_id(index, ctx);

        blocks
            .into_iter()
            .map(|block| {
                let final_sql = substitute(&template_sql, &block);
                StatementEntry {
                    timestamp: timestamp.clone(),
                    screen_id: screen_id.clone(),
                    command_kind: command_kind(&final_sql),
                    originating_function: originating_function.clone(),
                    parameter_values: block.into_iter().map(|t| t.value).collect(),
                    template_sql: template_sql.clone(),
                    final_sql,
                }
            })
            .collect()
    }

    /// 窗口查找 → 向后兜底 → 空块
    fn parameter_blocks(&self, index: usize) -> Vec<ParameterBlock> {
        let own_tag = classifier::thread_tag(self.lines[index].as_str());
        let mut blocks = collect_parameter_blocks(
            self.lines,
            index,
            self.options.parameter_window,
            own_tag,
        );

        if blocks.is_empty() {
            if let Some(block) = fallback_parameter_block(
                self.lines,
                index,
                self.options.fallback_lookahead,
            ) {
                blocks.push(block);
            }
        }

        if blocks.is_empty() {
            #[cfg(feature = "logging")]
            tracing::trace!(line = index, "未找到参数行，模板原样输出");
            blocks.push(Vec::new());
        }
        blocks
    }

    fn screen_id(&self, index: usize, ctx: &ThreadContext) -> Option<String> {
        nearby_screen_id(self.lines, index, self.options.screen_window).or_else(
            || {
                trigger_thread_tag(self.lines, index)
                    .and_then(|tag| ctx.resolve(tag))
                    .map(str::to_string)
            },
        )
    }
}
