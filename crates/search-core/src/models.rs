// search-core/src/models.rs
//! 数据模型定义

use serde::{Deserialize, Serialize};

/// 文本文档结构
///
/// 一个待索引的纯文本文件：`name` 是文件名（精确匹配字段），
/// `content` 是全文内容（分词字段）。入索引后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDoc {
    pub name: String,
    pub content: String,
}

impl TextDoc {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
