// search-core/src/schema/mod.rs
//! Schema 模块 - Tantivy 索引结构定义

pub mod builder;
pub mod fields;

pub use builder::{SchemaFields, build_schema};
pub use fields::*;
