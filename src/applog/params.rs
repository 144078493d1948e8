//! `Parameters:` 行解析

use crate::applog::classifier::PARAMETERS_MARKER;
use crate::applog::types::{ParameterBlock, ParameterToken};
use lazy_static::lazy_static;
use regex::Regex;

/// 未注明类型时的缺省类型
pub const DEFAULT_TYPE: &str = "String";

lazy_static! {
    static ref TYPED_TOKEN_RE: Regex =
        Regex::new(r"(?s)^(.*)\(([^()]*)\)$").unwrap();
}

/// 将一行 `Parameters:` 解析为有序的参数列表
///
/// 按逗号切分（不识别引号，值中含逗号时会被拆开）。每段若以 `(type)` 结尾
/// 则拆出类型，否则类型为 `String`。标记后为空时返回空列表。
pub fn parse_parameters(line: &str) -> ParameterBlock {
    let Some(pos) = line.find(PARAMETERS_MARKER) else {
        return Vec::new();
    };
    let rest = line[pos + PARAMETERS_MARKER.len()..].trim();
    if rest.is_empty() {
        return Vec::new();
    }

    rest.split(',').map(parse_token).collect()
}

fn parse_token(raw: &str) -> ParameterToken {
    let raw = raw.trim();
    match TYPED_TOKEN_RE.captures(raw) {
        Some(caps) => ParameterToken::new(caps[1].trim(), caps[2].trim()),
        None => ParameterToken::new(raw, DEFAULT_TYPE),
    }
}
