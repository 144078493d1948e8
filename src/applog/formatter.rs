//! SQL 简单排版
//!
//! 纯文本处理：在关键字前换行并将关键字转为大写，不做语法分析，
//! 字符串常量中的关键字同样会被断行。

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // 多词关键字放在前面，保证优先匹配最长形式
    static ref KEYWORD_RE: Regex = Regex::new(
        r"(?i)\b(LEFT\s+OUTER\s+JOIN|RIGHT\s+OUTER\s+JOIN|FULL\s+OUTER\s+JOIN|LEFT\s+JOIN|RIGHT\s+JOIN|INNER\s+JOIN|FULL\s+JOIN|CROSS\s+JOIN|ORDER\s+BY|GROUP\s+BY|INSERT\s+INTO|DELETE\s+FROM|VALUES|DELETE|UPDATE|SET|SELECT|FROM|WHERE|AND|OR|ON|HAVING|JOIN|CASE|WHEN|ELSE|END)\b"
    )
    .unwrap();
    static ref SPACES_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// 在关键字前插入换行，关键字转大写，逐行去除首尾空白
pub fn pretty_sql(sql: &str) -> String {
    let broken = KEYWORD_RE.replace_all(sql, |caps: &Captures| {
        let keyword = SPACES_RE.replace_all(&caps[1], " ").to_uppercase();
        format!("\n{keyword}")
    });

    broken
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
