//! 结果筛选与派生视图

use crate::applog::types::{AnalysisResult, ErrorEntry, StatementEntry};
use std::collections::BTreeSet;

/// 条目筛选条件，字段为 `None` 表示不限制
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// 画面 ID（精确匹配）
    pub screen_id: Option<String>,
    /// 语句类型（忽略大小写），只作用于语句
    pub command_kind: Option<String>,
    /// 关键字（忽略大小写的子串匹配）
    pub keyword: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen<S: Into<String>>(mut self, screen_id: S) -> Self {
        self.screen_id = Some(screen_id.into());
        self
    }

    pub fn kind<S: Into<String>>(mut self, command_kind: S) -> Self {
        self.command_kind = Some(command_kind.into());
        self
    }

    pub fn keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.screen_id.is_none() && self.command_kind.is_none() && self.keyword.is_none()
    }

    pub fn matches_statement(&self, entry: &StatementEntry) -> bool {
        self.screen_matches(entry.screen_id.as_deref())
            && self
                .command_kind
                .as_ref()
                .is_none_or(|k| k.eq_ignore_ascii_case(&entry.command_kind))
            && self.keyword_matches(&[
                entry.final_sql.as_str(),
                entry.originating_function.as_str(),
            ])
    }

    pub fn matches_error(&self, entry: &ErrorEntry) -> bool {
        self.screen_matches(entry.screen_id.as_deref())
            && self.keyword_matches(&[entry.summary.as_str(), entry.details.as_str()])
    }

    fn screen_matches(&self, screen_id: Option<&str>) -> bool {
        match self.screen_id.as_deref() {
            Some(want) => screen_id == Some(want),
            None => true,
        }
    }

    fn keyword_matches(&self, haystacks: &[&str]) -> bool {
        match self.keyword.as_deref() {
            Some(keyword) => {
                let needle = keyword.to_lowercase();
                haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }
}

impl AnalysisResult {
    /// 所有出现过的画面 ID（去重、排序）
    pub fn screen_ids(&self) -> BTreeSet<String> {
        self.statements
            .iter()
            .filter_map(|e| e.screen_id.clone())
            .chain(self.errors.iter().filter_map(|e| e.screen_id.clone()))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// 按条件筛选，保持原有顺序
    pub fn filter(&self, filter: &EntryFilter) -> AnalysisResult {
        AnalysisResult {
            statements: self
                .statements
                .iter()
                .filter(|e| filter.matches_statement(e))
                .cloned()
                .collect(),
            errors: self
                .errors
                .iter()
                .filter(|e| filter.matches_error(e))
                .cloned()
                .collect(),
        }
    }
}
