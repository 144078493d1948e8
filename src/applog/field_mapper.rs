//! 参数值与列/条件字段的映射
//!
//! 根据模板 SQL 推断每个参数值填入的是哪一列：
//!
//! - `INSERT INTO t (a, b, ...)`：按列清单逐个对应；
//! - 其他语句：收集所有 `字段 运算符 ?`，数量足够时按位置对应；
//!   不够时（如 `IN (?, ?, ?)`）改为对每个 `?` 向前回看最近的 `字段 =` / `字段 IN (`。
//!
//! 这是启发式推断，CASE 表达式、子查询等复杂模板得到 `None` 是正常结果。

use crate::applog::types::FieldMapping;
use lazy_static::lazy_static;
use regex::Regex;

/// 反向查找的缺省字符数
pub const DEFAULT_LOOKBACK_CHARS: usize = 80;

lazy_static! {
    static ref INSERT_RE: Regex =
        Regex::new(r"(?is)\bINSERT\s+INTO\s+\S+?\s*\(([^)]*)\)").unwrap();
    static ref CONDITION_RE: Regex = Regex::new(
        r"(?i)\b(\w+)\s*(?:=|<>|!=|>=|<=|>|<|IN\s*\(|LIKE\b)\s*'?\?"
    )
    .unwrap();
    static ref NEAREST_FIELD_RE: Regex =
        Regex::new(r"(?i)\b(\w+)\s*(?:=|IN\s*\()").unwrap();
}

/// 列推断策略
///
/// 返回值按参数下标排列；长度可以与参数个数不同，不足部分视为 `None`。
pub trait MappingStrategy {
    fn columns(&self, template: &str, value_count: usize) -> Vec<Option<String>>;
}

/// INSERT 列清单
pub struct InsertColumns;

impl MappingStrategy for InsertColumns {
    fn columns(&self, template: &str, _value_count: usize) -> Vec<Option<String>> {
        insert_columns(template)
            .unwrap_or_default()
            .into_iter()
            .map(Some)
            .collect()
    }
}

/// 条件字段按出现顺序对应
pub struct PositionalConditions {
    fields: Vec<String>,
}

impl MappingStrategy for PositionalConditions {
    fn columns(&self, _template: &str, value_count: usize) -> Vec<Option<String>> {
        self.fields.iter().take(value_count).cloned().map(Some).collect()
    }
}

/// 对每个 `?` 向前回看最近的字段
pub struct BackwardScan {
    pub lookback_chars: usize,
}

impl MappingStrategy for BackwardScan {
    fn columns(&self, template: &str, _value_count: usize) -> Vec<Option<String>> {
        template
            .char_indices()
            .filter(|&(_, c)| c == '?')
            .map(|(pos, _)| {
                let start = lookback_start(template, pos, self.lookback_chars);
                NEAREST_FIELD_RE
                    .captures_iter(&template[start..pos])
                    .last()
                    .map(|caps| caps[1].to_string())
            })
            .collect()
    }
}

/// 解析 `INSERT INTO t (a, b)` 的列清单，非 INSERT 模板返回 `None`
pub fn insert_columns(template: &str) -> Option<Vec<String>> {
    INSERT_RE.captures(template).map(|caps| {
        caps[1]
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    })
}

/// 按出现顺序收集 `字段 运算符 ?` 中的字段
pub fn condition_fields(template: &str) -> Vec<String> {
    CONDITION_RE
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// 根据模板选出策略：INSERT 用列清单，否则比较条件字段数与参数个数
pub fn select_strategy(
    template: &str,
    value_count: usize,
    lookback_chars: usize,
) -> Box<dyn MappingStrategy> {
    if INSERT_RE.is_match(template) {
        return Box::new(InsertColumns);
    }
    let fields = condition_fields(template);
    if fields.len() >= value_count {
        Box::new(PositionalConditions { fields })
    } else {
        Box::new(BackwardScan { lookback_chars })
    }
}

/// 将参数值映射到列/条件字段
pub fn map_fields(
    template: &str,
    values: &[String],
    lookback_chars: usize,
) -> Vec<FieldMapping> {
    let strategy = select_strategy(template, values.len(), lookback_chars);
    let columns = strategy.columns(template, values.len());
    values
        .iter()
        .enumerate()
        .map(|(i, value)| FieldMapping {
            column: columns.get(i).cloned().flatten(),
            value: strip_quotes(value).to_string(),
        })
        .collect()
}

/// 去掉两端成对的单引号
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
}

/// `pos` 之前第 `n` 个字符的字节位置
fn lookback_start(s: &str, pos: usize, n: usize) -> usize {
    if n == 0 {
        return pos;
    }
    s[..pos].char_indices().rev().take(n).last().map_or(pos, |(i, _)| i)
}
