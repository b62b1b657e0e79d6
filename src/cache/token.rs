use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};

/// 加好友 token 表：token -> user_id
///
/// 克隆只复制内部的 `Arc`，所有克隆共享同一张表。条目只增不减，
/// 同一个 token 一旦写入就不会再被改写。
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    entries: Arc<DashMap<String, String>>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入 token。token 已存在时保留原有的 user_id 并返回 false
    pub fn insert(&self, token: &str, user_id: &str) -> bool {
        match self.entries.entry(token.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(user_id.to_string());
                true
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<String> {
        self.entries.get(token).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
