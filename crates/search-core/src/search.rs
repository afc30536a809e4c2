// search-core/src/search.rs
//! 搜索模块 - 执行查询并读取存储字段

use tantivy::collector::TopDocs;
use tantivy::query::Query;
use tantivy::schema::Value;
use tantivy::{Index, IndexReader, TantivyDocument};

use crate::SearchHit;
use crate::schema::{FIELD_CONTENT, FIELD_NAME};

/// 执行任意查询，按相关度降序返回至多 `limit` 条结果
///
/// 命中数不足 limit 时按实际数量返回。索引访问失败向上传播，
/// 由调用方决定是否终止搜索会话。
pub fn execute_search(
    reader: &IndexReader,
    index: &Index,
    query: &dyn Query,
    limit: usize,
) -> tantivy::Result<Vec<SearchHit>> {
    let searcher = reader.searcher();
    let schema = index.schema();

    let name_field = schema.get_field(FIELD_NAME)?;
    let content_field = schema.get_field(FIELD_CONTENT)?;

    let top_docs = searcher.search(query, &TopDocs::with_limit(limit))?;
    tracing::debug!("找到 {} 个文档", top_docs.len());

    let mut results = Vec::with_capacity(top_docs.len());
    for (score, doc_address) in top_docs {
        let retrieved_doc: TantivyDocument = searcher.doc(doc_address)?;

        let name = retrieved_doc
            .get_first(name_field)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let content = retrieved_doc
            .get_first(content_field)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        results.push(SearchHit {
            name,
            content,
            score,
        });
    }

    Ok(results)
}
