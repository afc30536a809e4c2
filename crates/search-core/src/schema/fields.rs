// search-core/src/schema/fields.rs
//! 字段名常量定义
//!
//! 统一管理所有 Schema 字段名，避免魔法字符串

/// 文件名（精确匹配，不分词）
pub const FIELD_NAME: &str = "name";

/// 文件内容（全文检索主字段）
pub const FIELD_CONTENT: &str = "content";
