// search-core/src/schema/builder.rs
//! Schema 构建器
//!
//! 构建 Tantivy 索引 Schema，统一管理字段配置

use tantivy::schema::*;

use super::fields::*;

/// 构建 Tantivy Schema
///
/// # 字段
/// - `name`: 文件名，精确匹配（raw，不分词），存储
/// - `content`: 文件内容，默认分词器（小写 + 按词切分），存储
///
/// `content` 必须带位置信息（WithFreqsAndPositions），短语查询依赖它。
pub fn build_schema() -> Schema {
    let mut schema_builder = Schema::builder();

    let content_options = TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer("default")
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        )
        .set_stored();

    // 文件名字段（精确匹配，不分词）
    schema_builder.add_text_field(FIELD_NAME, STRING | STORED);

    // 内容字段（分词 + 位置）
    schema_builder.add_text_field(FIELD_CONTENT, content_options);

    schema_builder.build()
}

/// Schema 字段辅助结构
///
/// 缓存字段引用，避免重复查找
pub struct SchemaFields {
    pub name: Field,
    pub content: Field,
}

impl SchemaFields {
    /// 从 Schema 中提取所有字段引用
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            name: schema.get_field(FIELD_NAME).expect("missing name field"),
            content: schema.get_field(FIELD_CONTENT).expect("missing content field"),
        }
    }
}
