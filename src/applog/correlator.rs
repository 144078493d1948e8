//! 线程与画面的关联
//!
//! `ThreadContext` 记录每个线程最近一次出现的画面 ID。每次解析新建一个，
//! 按文件顺序对每一行调用 [`ThreadContext::observe`]，只依赖已经扫描过的行。

use crate::applog::classifier;
use std::collections::HashMap;

/// 线程标识 → 画面 ID
#[derive(Debug, Clone, Default)]
pub struct ThreadContext {
    screens: HashMap<String, String>,
}

impl ThreadContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 观察一行，必要时更新线程对应的画面
    ///
    /// 带线程标识的行优先取请求行中的画面 ID；否则仅当该行是服务分发行时
    /// 才取行内的裸画面 ID。
    pub fn observe(&mut self, line: &str) {
        let Some(tag) = classifier::thread_tag(line) else {
            return;
        };

        let screen = classifier::request_screen_id(line).or_else(|| {
            if line.contains(classifier::SERVICE_DISPATCH_MARKER) {
                classifier::direct_screen_id(line)
            } else {
                None
            }
        });

        if let Some(screen) = screen {
            #[cfg(feature = "logging")]
            tracing::trace!(thread = tag, screen = screen, "线程关联画面");
            self.screens.insert(tag.to_string(), screen.to_string());
        }
    }

    /// 查询线程最近关联的画面
    pub fn resolve(&self, tag: &str) -> Option<&str> {
        self.screens.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}
