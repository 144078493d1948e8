//! 应用日志解析的数据结构

use serde::Serialize;

/// 日志文件中的一行原始文本
///
/// 文件只读入一次，之后按下标访问，不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// 从 0 开始的行号
    pub index: usize,
    /// 原始文本（已去除行尾换行符）
    pub text: String,
}

impl LogLine {
    pub fn new<S: Into<String>>(index: usize, text: S) -> Self {
        Self { index, text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// `Parameters:` 行中的一个参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterToken {
    /// 参数值（不含类型注解）
    pub value: String,
    /// 声明类型，缺省为 `String`
    pub declared_type: String,
}

impl ParameterToken {
    pub fn new<V: Into<String>, T: Into<String>>(value: V, declared_type: T) -> Self {
        Self { value: value.into(), declared_type: declared_type.into() }
    }
}

/// 一个参数块：一行 `Parameters:` 解析出的全部参数
pub type ParameterBlock = Vec<ParameterToken>;

/// 还原后的一条 SQL 语句
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    /// 触发行的时间戳（`YYYY-MM-DD HH:MM:SS`），可能为空
    pub timestamp: String,
    /// 画面 ID
    pub screen_id: Option<String>,
    /// 最终 SQL 的首个单词（大写），如 SELECT/INSERT
    pub command_kind: String,
    /// 调用方法名（调用链最后一段）
    pub originating_function: String,
    /// 按顺序代入的参数值
    pub parameter_values: Vec<String>,
    /// 带 `?` 占位符的原始 SQL
    pub template_sql: String,
    /// 代入参数后的 SQL
    pub final_sql: String,
}

/// 一个错误块
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// 时间戳，可能为空
    pub timestamp: String,
    /// 画面 ID
    pub screen_id: Option<String>,
    /// 去掉日志级别等前缀后的一行摘要
    pub summary: String,
    /// 完整的错误块（含后续续行）
    pub details: String,
}

/// 字段映射结果：参数值及其对应的列名/条件字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    pub column: Option<String>,
    pub value: String,
}

/// 一次解析的全部输出，两个集合均按时间戳降序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub statements: Vec<StatementEntry>,
    pub errors: Vec<ErrorEntry>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty() && self.errors.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.statements.len() + self.errors.len()
    }
}

impl StatementEntry {
    /// 参数值与列/条件字段的对应关系
    pub fn field_mappings(&self, lookback_chars: usize) -> Vec<FieldMapping> {
        crate::applog::field_mapper::map_fields(
            &self.template_sql,
            &self.parameter_values,
            lookback_chars,
        )
    }

    /// 排版后的最终 SQL
    pub fn pretty_sql(&self) -> String {
        crate::applog::formatter::pretty_sql(&self.final_sql)
    }
}
