// search-core/src/dispatch.rs
//! 查询调度器
//!
//! 把一行用户输入解析为三种查询形态之一并交给引擎执行：
//! - `name:<text>`      → name 字段精确 term 查询（不分词、不折叠大小写）
//! - `<field>:"<text>"` → 短语查询（小写、去标点、按空白切分，位置 0,1,2,...）
//! - `<field>:<text>`   → 交给 Tantivy 原生查询语法解析
//!
//! 调度器本身无状态，每一行独立解析、独立执行。

use tantivy::query::{EmptyQuery, PhraseQuery, Query, QueryParser, TermQuery};
use tantivy::schema::{Field, IndexRecordOption};
use tantivy::{Index, IndexReader, Term};
use thiserror::Error;

use crate::SearchHit;
use crate::schema::FIELD_NAME;
use crate::search::execute_search;

/// 查询执行上下文
pub struct QueryContext<'a> {
    pub reader: &'a IndexReader,
    pub index: &'a Index,
    /// 返回结果数量上限（正整数）
    pub limit: usize,
}

/// 查询调度错误
#[derive(Debug, Error)]
pub enum QueryDispatchError {
    /// 输入不是 `field:query` 形式（两部分去空白后必须都非空）
    #[error("Syntax error! Use name:term or content:query or content:\"phrase query\"")]
    Syntax,
    /// 字段在索引 Schema 中不存在
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// 引擎原生语法解析失败
    #[error("Query parse error: {0}")]
    Parse(#[from] tantivy::query::QueryParserError),
    /// 索引访问失败，对当前搜索会话是致命的
    #[error("Search failed: {0}")]
    Engine(#[from] tantivy::TantivyError),
}

impl QueryDispatchError {
    /// 可恢复错误只需提示用户重新输入，不终止搜索会话
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Syntax | Self::UnknownField(_) | Self::Parse(_)
        )
    }
}

/// 解析一行输入并执行搜索
pub fn dispatch_query(
    ctx: &QueryContext,
    line: &str,
) -> Result<Vec<SearchHit>, QueryDispatchError> {
    let (field, query_text) = split_field_query(line).ok_or(QueryDispatchError::Syntax)?;
    tracing::debug!("查询调度: field='{}' query='{}'", field, query_text);

    let query = build_query(ctx.index, field, query_text)?;
    Ok(execute_search(ctx.reader, ctx.index, query.as_ref(), ctx.limit)?)
}

/// 按第一个冒号把输入切成 (field, queryText)
///
/// 两部分去掉首尾空白后必须都非空，否则视为语法错误。
pub fn split_field_query(line: &str) -> Option<(&str, &str)> {
    let (field, query_text) = line.split_once(':')?;
    let field = field.trim();
    let query_text = query_text.trim();
    if field.is_empty() || query_text.is_empty() {
        return None;
    }
    Some((field, query_text))
}

/// 按调度规则构造查询
fn build_query(
    index: &Index,
    field_name: &str,
    query_text: &str,
) -> Result<Box<dyn Query>, QueryDispatchError> {
    let schema = index.schema();

    // 规则 1: name 字段走精确 term 查询，查询文本原样保留
    if field_name == FIELD_NAME {
        let field = schema
            .get_field(FIELD_NAME)
            .map_err(|_| QueryDispatchError::UnknownField(field_name.to_string()))?;
        let term = Term::from_field_text(field, query_text);
        return Ok(Box::new(TermQuery::new(term, IndexRecordOption::Basic)));
    }

    let field = schema
        .get_field(field_name)
        .map_err(|_| QueryDispatchError::UnknownField(field_name.to_string()))?;

    // 规则 2: 成对双引号包裹 → 短语查询
    if is_quoted(query_text) {
        let tokens = phrase_tokens(&query_text[1..query_text.len() - 1]);
        return Ok(build_phrase_query(field, &tokens));
    }

    // 规则 3: 交给引擎原生查询语法
    let parser = QueryParser::for_index(index, vec![field]);
    Ok(parser.parse_query(query_text)?)
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// 短语分词：小写，去掉非字母/数字/空白字符，按空白切分
///
/// 模拟引擎默认分析器对纯文字文本的行为。空 token 被丢弃。
pub fn phrase_tokens(phrase: &str) -> Vec<String> {
    let cleaned: String = phrase
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// 由短语 token 构造查询
///
/// PhraseQuery 至少要两个 term：空短语匹配空集（与原始引擎的空短语
/// 行为一致），单 token 退化为 term 查询。
fn build_phrase_query(field: Field, tokens: &[String]) -> Box<dyn Query> {
    match tokens {
        [] => Box::new(EmptyQuery),
        [token] => Box::new(TermQuery::new(
            Term::from_field_text(field, token),
            IndexRecordOption::Basic,
        )),
        _ => {
            let terms = tokens
                .iter()
                .enumerate()
                .map(|(pos, token)| (pos, Term::from_field_text(field, token)))
                .collect();
            Box::new(PhraseQuery::new_with_offset(terms))
        }
    }
}
