// search-core/src/lib.rs
//! 搜索引擎核心库
//!
//! 基于 Tantivy 的纯文本全文索引与查询调度，支持：
//! - `.txt` 文件批量索引（name 精确字段 + content 全文字段）
//! - 字段限定查询：精确 term / 短语 / 引擎原生布尔语法
//! - 只读搜索会话

use std::path::Path;

pub mod dispatch;
pub mod indexer;
pub mod models;
pub mod schema;
pub mod search;

// 重导出核心类型
pub use dispatch::{QueryContext, QueryDispatchError, dispatch_query, split_field_query};
pub use indexer::{IndexStats, index_directory, init_index, open_index};
pub use models::TextDoc;
pub use schema::{FIELD_CONTENT, FIELD_NAME, SchemaFields, build_schema};
pub use search::execute_search;

/// 搜索结果
///
/// 命中文档的存储字段及引擎相关度分数，按相关度降序返回。
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub name: String,
    pub content: String,
    pub score: f32,
}

/// 只读搜索会话
///
/// 打开一次索引，供整个查询循环复用；每行查询本身无状态。
/// 会话期间索引不会被本组件修改。
pub struct SearchSession {
    index: tantivy::Index,
    reader: tantivy::IndexReader,
    limit: usize,
}

impl SearchSession {
    /// 打开搜索会话
    ///
    /// `limit` 是每次查询返回的结果数量上限，必须为正。
    pub fn open(index_path: &Path, limit: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(limit > 0, "结果数量上限必须为正整数");
        let (index, reader) = open_index(index_path)?;
        Ok(Self { index, reader, limit })
    }

    /// 解析并执行一行查询
    pub fn query(&self, line: &str) -> Result<Vec<SearchHit>, QueryDispatchError> {
        let ctx = QueryContext {
            reader: &self.reader,
            index: &self.index,
            limit: self.limit,
        };
        dispatch_query(&ctx, line)
    }
}
